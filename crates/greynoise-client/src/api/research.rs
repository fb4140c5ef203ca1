//! Research API endpoints.

use crate::GreyNoiseClient;
use greynoise_core::{Actor, Result};
use tracing::debug;

const EP_RESEARCH_ACTORS: &str = "research/actors";

/// Research API endpoints
pub struct ResearchApi<'a> {
    client: &'a GreyNoiseClient,
}

impl<'a> ResearchApi<'a> {
    pub(crate) const fn new(client: &'a GreyNoiseClient) -> Self {
        Self { client }
    }

    /// Get the names and IP addresses of actors scanning the Internet
    pub async fn actors(&self) -> Result<Vec<Actor>> {
        debug!("Getting actors");
        self.client.get(EP_RESEARCH_ACTORS).await
    }
}

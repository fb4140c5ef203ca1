//! Noise API endpoints.

use crate::GreyNoiseClient;
use chrono::NaiveDate;
use greynoise_core::{
    is_valid_ip, parse_date, validate_ip, GreyNoiseError, IpContext, NoisePage, NoiseStatus,
    Result, DATE_FORMAT,
};
use serde::Serialize;
use tracing::debug;

const EP_NOISE_BULK: &str = "noise/bulk";
const EP_NOISE_QUICK: &str = "noise/quick";
const EP_NOISE_MULTI: &str = "noise/multi/quick";
const EP_NOISE_CONTEXT: &str = "noise/context";

#[derive(Serialize)]
struct MultiQuickRequest<'a> {
    ips: &'a [String],
}

/// Noise API endpoints
pub struct NoiseApi<'a> {
    client: &'a GreyNoiseClient,
}

impl<'a> NoiseApi<'a> {
    pub(crate) const fn new(client: &'a GreyNoiseClient) -> Self {
        Self { client }
    }

    /// Get a complete dump of noisy IPs associated with Internet scans.
    ///
    /// Without a date every noise IP is returned, otherwise only those for that day.
    /// Follows the `offset` of each page until the API reports the dump `complete`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let ips = client.noise().dump(None).await?;
    /// println!("{} noisy addresses", ips.len());
    /// ```
    pub async fn dump(&self, date: Option<NaiveDate>) -> Result<Vec<String>> {
        debug!(date = ?date, "Getting noise");
        let endpoint = match date {
            None => EP_NOISE_BULK.to_string(),
            Some(date) => format!("{EP_NOISE_BULK}/{}", date.format(DATE_FORMAT)),
        };

        let mut page: NoisePage = self.client.get(&endpoint).await?;
        let mut noise_ips = std::mem::take(&mut page.noise_ips);

        while !page.complete {
            let offset = page.offset.ok_or_else(|| {
                GreyNoiseError::InvalidResponse("incomplete page without an offset".into())
            })?;
            page = self
                .client
                .get_with_query(&endpoint, &[("offset", offset.to_string())])
                .await?;
            noise_ips.append(&mut page.noise_ips);
        }

        debug!(count = noise_ips.len(), "Noisy IP addresses found");
        Ok(noise_ips)
    }

    /// Same as [`dump`](Self::dump) for a `YYYY-MM-DD` date string
    pub async fn dump_for(&self, date: &str) -> Result<Vec<String>> {
        let date = parse_date(date)?;
        self.dump(Some(date)).await
    }

    /// Quick check of a single IP address.
    ///
    /// Fails with [`GreyNoiseError::InvalidArgument`] if `ip` is not an IPv4 address.
    pub async fn quick(&self, ip: &str) -> Result<NoiseStatus> {
        debug!(ip_address = ip, "Getting noise status");
        let ip = validate_ip(ip)?;

        let status: NoiseStatus = self
            .client
            .get(&format!("{EP_NOISE_QUICK}/{ip}"))
            .await?;
        Ok(status.with_code_message())
    }

    /// Quick check of several IP addresses at once.
    ///
    /// Malformed addresses are dropped from the request instead of failing it.
    pub async fn multi_quick<I, S>(&self, ips: I) -> Result<Vec<NoiseStatus>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ips: Vec<String> = ips
            .into_iter()
            .filter(|ip| is_valid_ip(ip.as_ref()))
            .map(|ip| ip.as_ref().to_string())
            .collect();
        debug!(ip_addresses = ?ips, "Getting noise status in bulk");

        let results: Vec<NoiseStatus> = self
            .client
            .get_with_json(EP_NOISE_MULTI, &MultiQuickRequest { ips: &ips })
            .await?;
        Ok(results
            .into_iter()
            .map(NoiseStatus::with_code_message)
            .collect())
    }

    /// Get context associated with an IP address
    pub async fn context(&self, ip: &str) -> Result<IpContext> {
        debug!(ip_address = ip, "Getting context");
        let ip = validate_ip(ip)?;

        self.client
            .get(&format!("{EP_NOISE_CONTEXT}/{ip}"))
            .await
    }
}

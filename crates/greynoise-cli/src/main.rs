//! greynoise - command-line client for the GreyNoise API.

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    greynoise_cli::run().await
}

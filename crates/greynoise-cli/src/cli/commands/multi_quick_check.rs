//! `greynoise multi-quick-check` - Classify several IP addresses.

use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::cli::args::MultiQuickCheckArgs;
use crate::output::render;

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Noise")]
    noise: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Meaning")]
    message: String,
}

pub async fn execute(ctx: &Context, args: MultiQuickCheckArgs) -> Result<()> {
    let client = ctx.client()?;
    let results = client.noise().multi_quick(&args.ip_addresses).await?;

    if let Some(text) = render(ctx.output_format, &results)? {
        println!("{text}");
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let rows: Vec<StatusRow> = results
        .iter()
        .map(|status| StatusRow {
            ip: status.ip().unwrap_or("-").to_string(),
            noise: if status.is_noise() { "yes" } else { "no" }.to_string(),
            code: status.code().unwrap_or_default().to_string(),
            message: status.code_message().unwrap_or_default().to_string(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .to_string();
    println!("{table}");
    Ok(())
}

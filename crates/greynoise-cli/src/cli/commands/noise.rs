//! `greynoise noise` - Dump noise IP addresses.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::NoiseArgs;
use crate::output::render;

pub async fn execute(ctx: &Context, args: NoiseArgs) -> Result<()> {
    let client = ctx.client()?;
    let ips = client.noise().dump(args.date).await?;

    if let Some(text) = render(ctx.output_format, &ips)? {
        println!("{text}");
        return Ok(());
    }

    for ip in &ips {
        println!("{ip}");
    }
    let scope = args
        .date
        .map_or_else(|| "in total".to_string(), |date| format!("on {date}"));
    eprintln!(
        "{}",
        format!("{} noise addresses {scope}", ips.len()).dimmed()
    );

    Ok(())
}

//! `greynoise quick-check` - Classify a single IP address.

use anyhow::Result;
use colored::Colorize;
use greynoise::NoiseStatus;

use super::Context;
use crate::cli::args::IpArgs;
use crate::output::render;

pub async fn execute(ctx: &Context, args: IpArgs) -> Result<()> {
    let client = ctx.client()?;
    let status = client.noise().quick(&args.ip_address).await?;

    if let Some(text) = render(ctx.output_format, &status)? {
        println!("{text}");
        return Ok(());
    }

    print_status_pretty(&status);
    Ok(())
}

fn print_status_pretty(status: &NoiseStatus) {
    let verdict = if status.is_noise() {
        "noise".red().bold()
    } else {
        "not noise".green().bold()
    };
    let ip = status.ip().unwrap_or("-");
    println!("{} {} {}", "IP:".bold(), ip.cyan().bold(), verdict);

    if let Some(code) = status.code() {
        println!(
            "  {} {} ({})",
            "Code:".bold(),
            code,
            status.code_message().unwrap_or_default()
        );
    }
}

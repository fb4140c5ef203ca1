//! `greynoise context` - Show everything known about an IP address.

use anyhow::Result;
use colored::Colorize;
use greynoise::IpContext;

use super::Context;
use crate::cli::args::IpArgs;
use crate::output::render;

pub async fn execute(ctx: &Context, args: IpArgs) -> Result<()> {
    let client = ctx.client()?;
    let context = client.noise().context(&args.ip_address).await?;

    if let Some(text) = render(ctx.output_format, &context)? {
        println!("{text}");
        return Ok(());
    }

    print_context_pretty(&context);
    Ok(())
}

fn print_context_pretty(context: &IpContext) {
    println!("{} {}", "IP:".bold(), context.ip().unwrap_or("-").cyan().bold());

    if !context.seen() {
        println!("  {}", "Not observed by GreyNoise".dimmed());
        return;
    }

    if let Some(classification) = context.classification() {
        let label = match classification {
            "malicious" => classification.red(),
            "benign" => classification.green(),
            _ => classification.yellow(),
        };
        println!("  {} {}", "Classification:".bold(), label);
    }
    if let Some(actor) = context.actor() {
        println!("  {} {}", "Actor:".bold(), actor);
    }
    if let Some(first_seen) = context.first_seen() {
        println!("  {} {}", "First seen:".bold(), first_seen);
    }
    if let Some(last_seen) = context.last_seen() {
        println!("  {} {}", "Last seen:".bold(), last_seen);
    }
    let tags = context.tags();
    if !tags.is_empty() {
        println!("  {} {}", "Tags:".bold(), tags.join(", "));
    }
}

//! `greynoise actors` - List known scanning actors.

use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

use super::Context;
use crate::output::render;

#[derive(Tabled)]
struct ActorRow {
    #[tabled(rename = "Actor")]
    name: String,
    #[tabled(rename = "IPs")]
    ips: usize,
}

pub async fn execute(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let actors = client.research().actors().await?;

    if let Some(text) = render(ctx.output_format, &actors)? {
        println!("{text}");
        return Ok(());
    }

    let rows: Vec<ActorRow> = actors
        .iter()
        .map(|actor| ActorRow {
            name: actor.name().unwrap_or("-").to_string(),
            ips: actor.ips().len(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .to_string();
    println!("{table}");
    Ok(())
}

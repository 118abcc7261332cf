//! Retrieve command

use crate::app::{OutputFormat, RetrieveArgs};
use crate::output::format_snippets;
use anyhow::Result;
use netpilot_core::Config;

pub async fn run(args: RetrieveArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let query = args.query.join(" ");
    let kb = config.knowledge_base();

    let ranked: Vec<_> = kb.rank(&query).into_iter().take(args.limit).collect();
    tracing::debug!("Retrieved {} snippets for {:?}", ranked.len(), query);

    print!("{}", format_snippets(&ranked, format));
    Ok(())
}

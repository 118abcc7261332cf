//! Knowledge base listing

use crate::app::OutputFormat;
use anyhow::Result;
use netpilot_core::Config;

pub async fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let kb = config.knowledge_base();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(kb.snippets())?);
        }
        OutputFormat::Md => {
            println!("# Knowledge Base\n");
            for snippet in kb.snippets() {
                println!("- {}", snippet);
            }
        }
        OutputFormat::Cli => {
            let source = if config.knowledge.is_some() {
                "config"
            } else {
                "built-in"
            };
            println!("Snippets:        {} ({})", kb.len(), source);
            println!();
            for (i, snippet) in kb.snippets().iter().enumerate() {
                println!("  {}. {}", i + 1, snippet);
            }
        }
    }
    Ok(())
}

//! Prompt preview command

use crate::app::PromptArgs;
use anyhow::Result;
use netpilot_core::pipeline::build_prompt;
use netpilot_core::{Config, NetpilotError, DEFAULT_TOP_K};

pub async fn run(args: PromptArgs, config: &Config) -> Result<()> {
    let intent = args.intent.join(" ");
    let intent = intent.trim();
    if intent.is_empty() {
        return Err(NetpilotError::InvalidInput("Please enter a network intent.".to_string()).into());
    }

    let kb = config.knowledge_base();
    let context = kb.retrieve(intent, DEFAULT_TOP_K).join(" ");
    print!("{}", build_prompt(intent, &context));
    Ok(())
}

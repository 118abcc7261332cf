//! Generate command

use crate::app::{GenerateArgs, OutputFormat};
use crate::output::{format_report, Report};
use crate::progress::ProgressReporter;
use anyhow::Result;
use netpilot_core::{Config, NetpilotError, NetworkConfigurator, DEFAULT_TOP_K};

pub async fn run(args: GenerateArgs, config: &Config, format: OutputFormat) -> Result<()> {
    // Credential gate runs before the blank-intent gate
    let configurator = NetworkConfigurator::from_config(config)?;

    let intent = args.intent.join(" ");
    let intent = intent.trim();
    if intent.is_empty() {
        return Err(NetpilotError::InvalidInput("Please enter a network intent.".to_string()).into());
    }

    if args.show_prompt {
        eprintln!("{}", configurator.prompt_for(intent));
    }

    let progress = ProgressReporter::start("Generating configurations...");
    let outcome = configurator
        .run_with_max_tokens(intent, args.max_tokens)
        .await;
    progress.finish();

    let report = Report {
        intent,
        model: configurator.model_name(),
        context: configurator
            .knowledge()
            .rank(intent)
            .into_iter()
            .take(DEFAULT_TOP_K)
            .collect(),
        outcome: &outcome,
    };
    print!("{}", format_report(&report, format));

    outcome.into_result()?;
    Ok(())
}

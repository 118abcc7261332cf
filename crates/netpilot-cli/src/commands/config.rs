//! Config command

use crate::app::{ConfigAction, ConfigArgs, OutputFormat};
use anyhow::{bail, Result};
use netpilot_core::{Config, DEFAULT_TEMPERATURE};

/// Loads the config file only for `show`, so `init --force` can replace a broken file
pub async fn run(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    match args.action {
        ConfigAction::Show => show(&Config::load()?, format),
        ConfigAction::Path => {
            println!("{}", Config::default_path().display());
            Ok(())
        }
        ConfigAction::Init { force } => init(force),
    }
}

fn show(config: &Config, format: OutputFormat) -> Result<()> {
    let api_key = config
        .resolve_api_key()
        .map(|key| mask_key(&key))
        .unwrap_or_else(|| "(not set)".to_string());

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": Config::default_path(),
                "api_key": api_key,
                "endpoint": config.gemini.endpoint,
                "model": config.gemini.model,
                "url": config.gemini.generate_content_url(),
                "timeout_secs": config.gemini.timeout_secs,
                "temperature": DEFAULT_TEMPERATURE,
                "knowledge_snippets": config.knowledge_base().len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("Config file:     {}", Config::default_path().display());
            println!("API key:         {}", api_key);
            println!();
            println!("Gemini:");
            println!("  Endpoint:      {}", config.gemini.endpoint);
            println!("  Model:         {}", config.gemini.model);
            println!("  Timeout:       {}s", config.gemini.timeout_secs);
            println!("  Temperature:   {} (fixed)", DEFAULT_TEMPERATURE);
            println!();
            println!("Knowledge:       {} snippets", config.knowledge_base().len());
        }
    }
    Ok(())
}

fn init(force: bool) -> Result<()> {
    let path = Config::default_path();
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn mask_key(key: &str) -> String {
    let visible: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if key.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("****{}", visible)
    }
}

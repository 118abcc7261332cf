// Configure a network intent using netpilot as a library

use netpilot_core::{Config, KnowledgeBase, NetworkConfigurator, DEFAULT_TOP_K};

#[tokio::main]
async fn main() -> netpilot_core::Result<()> {
    println!("Netpilot Configure Example\n");

    let intent = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Set up branch office VPN".to_string());

    // Show what the knowledge base contributes before calling the model
    let kb = KnowledgeBase::default();
    println!("Intent: {}", intent);
    println!("Retrieved context:");
    for (i, entry) in kb.rank(&intent).iter().take(DEFAULT_TOP_K).enumerate() {
        println!("  {}. [score {}] {}", i + 1, entry.score, entry.text);
    }
    println!();

    let config = Config::load()?;
    let configurator = NetworkConfigurator::from_config(&config)?;
    println!("Generating with {}...\n", configurator.model_name());

    let outcome = configurator.run(&intent).await;
    println!("{}", outcome.display_text());

    Ok(())
}

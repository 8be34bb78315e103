use clap::Parser;
use wiki_enrich::utils::{logger, validation::Validate};
use wiki_enrich::{CliConfig, EnrichEngine, EnrichPipeline, LocalStorage, WikipediaClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wiki-enrich CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let lookup = WikipediaClient::new(&config.language, config.thumb_size);
    let storage = LocalStorage::new();
    let pipeline = EnrichPipeline::new(storage, config, lookup);
    let engine = EnrichEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Enrichment completed successfully!");
            println!("✅ Done! '{}' has been written.", output_path);
        }
        Err(e) => {
            // Per-record lookup failures never reach here; only input
            // parsing and final-write problems are fatal.
            tracing::error!("❌ Enrichment failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

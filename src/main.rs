use clap::Parser;
use vehicle_history::utils::logger;
use vehicle_history::{CliConfig, ConsoleSink, HistoryEngine};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting vehicle-history");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let engine = HistoryEngine::new(ConsoleSink, settings);

    match engine.run() {
        Ok(rendered) => {
            tracing::info!("✅ Rendered {} history snapshot(s)", rendered.len());
        }
        Err(e) => {
            tracing::error!("❌ Rendering failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

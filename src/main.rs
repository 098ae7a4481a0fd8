//! catalog-ingest - batch upload of products and prices

use catalog_ingest::cli::Cli;
use catalog_ingest::utils::logging::init_logging;
use catalog_ingest::{IngestConfig, IngestionKind, build_info, run};
use clap::Parser;
use std::process::ExitCode;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; real environment variables take precedence
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_format);

    let build = build_info();
    info!(
        version = build.version,
        git_hash = build.git_hash,
        "Starting catalog-ingest"
    );

    // Fail before touching any file or the network
    let config = match IngestConfig::from_env().and_then(|config| cli.apply(config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(report) => {
            for kind in IngestionKind::ALL {
                if report.outcome(kind).is_err() {
                    warn!(run_id = %report.run_id, "Ingestion of {} did not complete", kind);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

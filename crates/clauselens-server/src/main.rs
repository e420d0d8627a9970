//! ClauseLens — insurance policy analyzer server.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "analyze" => {
                if args.len() < 3 {
                    eprintln!("Usage: clauselens analyze <policy.pdf>");
                    std::process::exit(1);
                }
                if let Err(e) = cli::run_analyze(&PathBuf::from(&args[2])) {
                    eprintln!("Failed to analyze {}: {}", args[2], e);
                    std::process::exit(1);
                }
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("ClauseLens — insurance policy analyzer");
                println!();
                println!("Usage: clauselens [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the HTTP server");
                println!("  analyze <policy.pdf>     Analyze a local PDF and print the report");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'clauselens help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let config = clauselens_core::ServerConfig::from_env();
    let port = config.port;

    let state = Arc::new(AppState::new(config));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("ClauseLens server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

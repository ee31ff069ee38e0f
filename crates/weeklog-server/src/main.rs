//! weeklog — weekly-report summarizer for raw developer logs.

use std::io::Read;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8787)
}

/// Run the heuristic engine offline on a file (or stdin) and print the
/// report JSON. No model call is made.
fn run_offline_analyze(path: Option<&str>) -> anyhow::Result<()> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let report = weeklog_model::WeeklyReport::heuristic(weeklog_analyze::analyze(&raw));
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--analyze" | "analyze" => {
                return run_offline_analyze(args.get(2).map(String::as_str));
            }
            "--help" | "-h" | "help" => {
                println!("weeklog — weekly-report summarizer for raw developer logs");
                println!();
                println!("Usage: weeklog-server [command]");
                println!();
                println!("Commands:");
                println!("  (none)             Start the HTTP server");
                println!("  analyze [file]     Analyze a log file (or stdin) offline, print JSON");
                println!("  help               Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'weeklog-server help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let model_config = weeklog_model::ModelConfig::from_env();
    let port = resolve_port();

    let state = Arc::new(AppState::new(model_config));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("weeklog server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

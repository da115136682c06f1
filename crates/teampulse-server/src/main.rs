//! TeamPulse: feedback analytics server for trainers.

use std::path::PathBuf;
use std::sync::Arc;

use teampulse_server::{build_router, validate, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn resolve_data_dir() -> PathBuf {
    std::env::var("TEAMPULSE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--validate" | "validate" => {
                let data_dir = if args.len() > 2 {
                    PathBuf::from(&args[2])
                } else {
                    resolve_data_dir()
                };
                let report = validate::validate(&data_dir);
                validate::print_report(&report);
                std::process::exit(if report.is_ready() { 0 } else { 1 });
            }
            "--help" | "-h" | "help" => {
                println!("TeamPulse: trainer feedback analytics server");
                println!();
                println!("Usage: teampulse [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  validate [data-dir]      Check configuration readiness");
                println!("  help                     Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'teampulse help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = teampulse_core::TeamPulseConfig::from_env(&data_dir)?;
    let port = config.port;

    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("TeamPulse server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tube_router::config::AppConfig;
use tube_router::network::Network;
use tube_router::planner::shortest_path;
use tube_router::web::{AppState, create_router};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the quickest route between two stations
    Route {
        /// Start station name
        from: String,
        /// End station name
        to: String,
        /// Map description file
        #[arg(short, long)]
        map: Option<PathBuf>,
    },
    /// Serve route queries over HTTP
    Serve {
        /// Map description file
        #[arg(short, long)]
        map: Option<PathBuf>,
        /// Address to listen on
        #[arg(short, long)]
        addr: Option<SocketAddr>,
        /// Reload the map file every this many seconds
        #[arg(long)]
        reload_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match args.cmd {
        Command::Route { from, to, map } => {
            let config = match map {
                Some(path) => config.with_map_path(path),
                None => config,
            };
            route(&config, &from, &to)
        }
        Command::Serve {
            map,
            addr,
            reload_secs,
        } => {
            let mut config = config;
            if let Some(path) = map {
                config = config.with_map_path(path);
            }
            if let Some(addr) = addr {
                config = config.with_addr(addr);
            }
            serve(config, reload_secs.map(Duration::from_secs)).await
        }
    }
}

fn route(config: &AppConfig, from: &str, to: &str) -> ExitCode {
    let network = match Network::load(&config.map_path) {
        Ok(network) => network,
        Err(e) => {
            error!(path = %config.map_path.display(), "Failed to load map: {e}");
            return ExitCode::FAILURE;
        }
    };

    match shortest_path(Some(&network), from, to) {
        Some(route) => {
            println!("{:?}", route.names());
            println!("Total: {} minutes", route.total_time());
        }
        None => println!("None"),
    }

    ExitCode::SUCCESS
}

async fn serve(config: AppConfig, reload: Option<Duration>) -> ExitCode {
    let network = match Network::load(&config.map_path) {
        Ok(network) => network,
        Err(e) => {
            error!(path = %config.map_path.display(), "Failed to load map: {e}");
            return ExitCode::FAILURE;
        }
    };

    let addr = config.addr;
    let map_path = config.map_path.clone();
    let state = AppState::new(network, config);

    if let Some(period) = reload.filter(|p| !p.is_zero()) {
        let reload_state = state.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match Network::load(&map_path) {
                    Ok(network) => {
                        reload_state.replace(network).await;
                    }
                    Err(e) => warn!(path = %map_path.display(), "Map reload failed: {e}"),
                }
            }
        });
    }

    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "Failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(%addr, "Tube router listening");
    info!("  GET /health             - Health check");
    info!("  GET /network            - Network size");
    info!("  GET /stations?q=        - Search stations by name");
    info!("  GET /route?from=&to=    - Quickest route");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

//! Sketchboard collection service entry point.

use clap::Parser;
use sketchboard_core::{DrawingStore, FileCollection, MemoryCollection};
use sketchboard_server::{AppState, router};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sketchboard-server", about = "Sketchboard drawing collection service")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "SKETCHBOARD_ADDR", default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// Persist drawings to this JSON file instead of memory.
    #[arg(long, env = "SKETCHBOARD_DATA")]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sketchboard_server=info,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();
    let store: Box<dyn DrawingStore> = match args.data {
        Some(path) => {
            info!("Persisting drawings to {}", path.display());
            Box::new(FileCollection::new(path))
        }
        None => {
            info!("Keeping drawings in memory");
            Box::new(MemoryCollection::new())
        }
    };
    let app = router(Arc::new(AppState::new(store)));

    info!("Sketchboard collection service listening on {}", args.addr);
    info!("Drawings endpoint: http://{}/api/drawings", args.addr);

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    axum::serve(listener, app).await
}

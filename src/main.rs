use std::net::SocketAddr;
use std::sync::Arc;

use cenik::{AppState, MemoryStore, ReportPipeline};

/// Catalog service entry point: in-memory store, default A4 geometry.
#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("starting catalog service");

    let state = AppState::new(Arc::new(MemoryStore::new()), ReportPipeline::default());
    let addr: SocketAddr = ([127, 0, 0, 1], 8080).into();
    cenik::serve(addr, state).await
}

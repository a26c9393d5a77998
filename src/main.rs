//! MVP Rotation Service - Binary Entry Point
//!
//! Serves the rotation store over HTTP. State lives at
//! `ROTATION_FILE_PATH` (default `data/rotation.json`); the listen port
//! comes from `PORT` (default 10000).

use std::env;
use std::sync::Arc;

use mvp_rotation::api::http::create_router;
use mvp_rotation::rotation::RotationStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let store = Arc::new(RotationStore::new());
    let snapshot = store.snapshot();
    println!(
        "Loaded rotation state from {}: {} active, {} inactive, {} retired, {} awards logged",
        store.file_path(),
        snapshot.active.len(),
        snapshot.inactive.len(),
        snapshot.retired.len(),
        snapshot.log.len()
    );

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(10000);

    let app = create_router(store);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    println!("rotation-server v{} listening on port {}", mvp_rotation::VERSION, port);

    axum::serve(listener, app).await?;
    Ok(())
}

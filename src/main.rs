use crate::app_config::AppConfig;
use crate::domain::events::Event;
use crate::location::IpGeolocation;
use crate::lookup::perform_lookup;
use crate::store::Store;
use crate::store_listener::store_listener;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app_config;
mod domain;
mod elevation;
mod location;
mod lookup;
mod store;
mod store_listener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics stay out of the stdout UI unless RUST_LOG raises them
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    info!("🏔️ Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load());
    info!("✅  Loaded configuration");

    let client = elevation::new_client()?;

    let (tx, rx) = mpsc::channel::<Event>(config.core().store_buffer_size());
    let mut store = Store::new(rx);
    let notifier_rx = store.notifier();

    task::spawn(async move {
        store_listener(notifier_rx).await;
    });
    info!("✅  Initialized store listener");

    task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    println!("Altitude Aware");
    println!();
    println!("Hi!");
    println!("This is a simple app to check your altitude and inform you about");
    println!("the physical conditions that your body may experience.");
    println!();
    println!("Press Enter to get your altitude (Ctrl-D to quit).");

    let provider = IpGeolocation::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Each Enter spawns its own chain; overlapping chains resolve in arrival
    // order at the store
    while lines.next_line().await?.is_some() {
        let tx = tx.clone();
        let client = client.clone();
        let config = config.clone();

        task::spawn(async move {
            perform_lookup(tx, &provider, &client, &config).await;
        });
    }

    info!("🏔️ {} is shutting down", env!("CARGO_PKG_NAME"));
    Ok(())
}

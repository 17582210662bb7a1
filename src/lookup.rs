use crate::app_config::AppConfig;
use crate::domain::events::Event;
use crate::elevation;
use crate::location::LocationProvider;
use reqwest::Client;
use tokio::sync::mpsc::Sender;
use tracing::{instrument, warn};

/// Runs one trigger-to-resolution chain: announce the start, acquire a
/// position, fetch its elevation, report the terminal event. Each failure is
/// converted into its user-visible message at the point of origin and the
/// chain stops there.
#[instrument(skip_all)]
pub async fn perform_lookup(tx: Sender<Event>, provider: &impl LocationProvider, client: &Client, config: &AppConfig) {
    send(&tx, Event::LookupStarted).await;

    let coordinates = match provider.acquire().await {
        Ok(coordinates) => coordinates,
        Err(e) => {
            warn!(error = ?e, "⚠️ Acquiring the current position failed");
            send(&tx, Event::LookupFailed(e.to_string())).await;
            return;
        }
    };

    match elevation::fetch(client, config, &coordinates).await {
        Ok(reading) => send(&tx, Event::LookupSucceeded(reading)).await,
        Err(e) => {
            warn!(error = ?e, "⚠️ Fetching the elevation failed");
            send(&tx, Event::LookupFailed(e.to_string())).await;
        }
    }
}

async fn send(tx: &Sender<Event>, event: Event) {
    tx.send(event).await.unwrap_or_else(|e| warn!("⚠️ Store is gone, dropping event: {}", e));
}

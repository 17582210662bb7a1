use crate::app_config::AppConfig;
use crate::domain::{AltitudeReading, Coordinates};
use crate::elevation::lookup_response::LookupResponse;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument};

/// Retrieves the ground elevation for a position with a single GET. No retry,
/// no caching, transport default timeouts only.
#[instrument(skip(client, config))]
pub async fn fetch(client: &Client, config: &AppConfig, coordinates: &Coordinates) -> Result<AltitudeReading, ElevationError> {
    info!("⛰️ Retrieving elevation for position ({:.4}, {:.4})...", coordinates.latitude, coordinates.longitude);

    let response = client
        .get(format!(
            "{}/api/v1/lookup?locations={},{}",
            config.elevation().url(),
            coordinates.latitude,
            coordinates.longitude
        ))
        .send()
        .await?
        .error_for_status()?;

    let lookup = response.json::<LookupResponse>().await?;

    let Some(result) = lookup.results.first() else {
        return Err(ElevationError::NoData);
    };

    #[rustfmt::skip]
    info!("⛰️ Retrieving elevation for position ({:.4}, {:.4})... OK, {} m", coordinates.latitude, coordinates.longitude, result.elevation);

    Ok(AltitudeReading::new(result.elevation))
}

/// The `Display` rendering of each variant is the message shown to the user.
#[derive(Error, Debug)]
pub enum ElevationError {
    #[error("Unable to retrieve altitude data")]
    NoData,
    #[error("Something went wrong while fetching altitude")]
    Network(#[from] reqwest::Error),
}

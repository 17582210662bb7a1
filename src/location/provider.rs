use crate::domain::Coordinates;
use async_trait::async_trait;
use thiserror::Error;

const FALLBACK_MESSAGE: &str = "Location access denied.";

/// One-shot position capability. A single attempt runs to completion or
/// failure; there is no retry and no cancellation.
#[async_trait]
pub trait LocationProvider {
    async fn acquire(&self) -> Result<Coordinates, LocationError>;
}

/// Position acquisition failure. Displays the provider-supplied message when
/// there is one, else a fixed fallback.
#[derive(Error, Debug, PartialEq)]
#[error("{message}")]
pub struct LocationError {
    message: String,
}

impl LocationError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        LocationError {
            message: if message.trim().is_empty() { FALLBACK_MESSAGE.to_string() } else { message },
        }
    }

    pub fn denied() -> Self {
        LocationError {
            message: FALLBACK_MESSAGE.to_string(),
        }
    }
}

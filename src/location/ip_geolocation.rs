use crate::domain::Coordinates;
use crate::location::provider::{LocationError, LocationProvider};
use async_trait::async_trait;
use ipgeolocate::{Locator, Service};
use tracing::{info, instrument, warn};

/// Position provider backed by IP geolocation (ip-api.com). Best available
/// accuracy for a headless host; an empty query resolves the caller's own
/// public address.
#[derive(Clone, Copy, Debug, Default)]
pub struct IpGeolocation;

impl IpGeolocation {
    pub fn new() -> Self {
        IpGeolocation
    }
}

#[async_trait]
impl LocationProvider for IpGeolocation {
    #[instrument(skip(self))]
    async fn acquire(&self) -> Result<Coordinates, LocationError> {
        info!("📍 Acquiring current position...");

        let located = Locator::get("", Service::IpApi).await.map_err(|e| LocationError::new(e.to_string()))?;

        let (Ok(latitude), Ok(longitude)) = (located.latitude.parse::<f64>(), located.longitude.parse::<f64>()) else {
            #[rustfmt::skip]
            warn!(raw_lat = %located.latitude, raw_lon = %located.longitude, "⚠️ Could not parse coordinates from the geolocation response");
            return Err(LocationError::denied());
        };

        info!("📍 Acquiring current position... OK ({:.4}, {:.4})", latitude, longitude);
        Ok(Coordinates { latitude, longitude })
    }
}

use serde::Deserialize;

/// Response body of the elevation lookup endpoint. A body without a usable
/// `results` array deserializes to an empty result set.
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub results: Vec<LocationResult>,
}

#[derive(Debug, Deserialize)]
pub struct LocationResult {
    pub elevation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64, // In decimal degrees (WGS84)
    pub longitude: f64,
}

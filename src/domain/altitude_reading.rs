/// Ground elevation reported for a position. Negative for below-sea-level
/// locations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AltitudeReading {
    meters: f64,
}

impl AltitudeReading {
    pub fn new(meters: f64) -> Self {
        AltitudeReading { meters }
    }

    pub fn meters(&self) -> f64 {
        self.meters
    }
}

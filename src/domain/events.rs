use crate::domain::AltitudeReading;

#[derive(Debug)]
pub enum Event {
    LookupStarted,
    LookupSucceeded(AltitudeReading),
    LookupFailed(String),
}

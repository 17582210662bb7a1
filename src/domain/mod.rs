mod altitude_reading;
pub mod body_effects;
mod coordinates;
pub mod events;
mod lookup_state;

pub use altitude_reading::AltitudeReading;
pub use coordinates::Coordinates;
pub use lookup_state::LookupState;

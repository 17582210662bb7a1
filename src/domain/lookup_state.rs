use crate::domain::AltitudeReading;

/// State of the one lookup the UI displays. Exactly one variant is live at a
/// time, so a loading flag can never coexist with an error or a reading.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Succeeded {
        reading: AltitudeReading,
        message: &'static str,
    },
    Failed {
        error: String,
    },
}

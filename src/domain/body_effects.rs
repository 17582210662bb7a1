/// Returns the advisory message for an altitude. Thresholds are in meters,
/// evaluated low to high, first match wins.
pub fn classify(meters: f64) -> &'static str {
    if meters < 1500.0 {
        "You're at a safe altitude. No significant effects."
    } else if meters < 2500.0 {
        "You may feel slight breathlessness during intense activity."
    } else if meters < 3500.0 {
        "Altitude sickness is possible. Acclimatization is advised."
    } else {
        "Acute mountain sickness is likely. Seek medical attention if symptoms occur."
    }
}

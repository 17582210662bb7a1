use crate::domain::LookupState;
use tokio::sync::watch::Receiver;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<LookupState>) {
    while rx.changed().await.is_ok() {
        let state: LookupState = rx.borrow().clone();
        render(&state);
    }
}

/// Prints the display regions. The variants are mutually exclusive, so at
/// most one region renders per snapshot; the intro panel is printed once by
/// `main`, not here.
fn render(state: &LookupState) {
    match state {
        LookupState::Idle => {}
        LookupState::Loading => println!("Loading..."),
        LookupState::Failed { error } => println!("{error}"),
        LookupState::Succeeded { reading, message } => {
            println!("Your altitude is: {} meters", reading.meters());
            println!("Altitude Effects: {message}");
        }
    }
}

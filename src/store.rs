use crate::domain::LookupState;
use crate::domain::body_effects::classify;
use crate::domain::events::Event;
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch::{self, Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, instrument};

/// Owns the one `LookupState` value the UI displays. Events are the only way
/// the state changes; every reduction publishes a fresh snapshot on the watch
/// channel.
#[derive(Debug)]
pub struct Store {
    state: LookupState,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<LookupState>,
    notifier_rx: WatchReceiver<LookupState>,
}

impl Store {
    pub fn new(rx: Receiver<Event>) -> Self {
        let (notifier_tx, notifier_rx) = watch::channel(LookupState::default());

        Store {
            state: LookupState::default(),
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<LookupState> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            self.state = reduce(event);
            self.notifier_tx.send(self.state.clone()).unwrap_or_default();
        }
    }
}

/// A started lookup clears any prior error, reading and message before its
/// chain resolves; a terminal event replaces the loading state wholesale.
/// Events from overlapping chains apply in arrival order.
fn reduce(event: Event) -> LookupState {
    match event {
        Event::LookupStarted => LookupState::Loading,
        Event::LookupSucceeded(reading) => LookupState::Succeeded {
            reading,
            message: classify(reading.meters()),
        },
        Event::LookupFailed(error) => LookupState::Failed { error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AltitudeReading;
    use pretty_assertions::assert_eq;
    use test_log::test;
    use tokio::sync::mpsc;

    #[test]
    fn a_started_lookup_clears_any_previous_outcome() {
        assert_eq!(reduce(Event::LookupStarted), LookupState::Loading);
    }

    #[test]
    fn a_successful_lookup_stores_the_reading_and_classifies_it() {
        let state = reduce(Event::LookupSucceeded(AltitudeReading::new(1800.0)));

        assert_eq!(
            state,
            LookupState::Succeeded {
                reading: AltitudeReading::new(1800.0),
                message: "You may feel slight breathlessness during intense activity.",
            }
        );
    }

    #[test]
    fn a_failed_lookup_stores_the_error_message() {
        let state = reduce(Event::LookupFailed("User denied Geolocation".to_string()));

        assert_eq!(
            state,
            LookupState::Failed {
                error: "User denied Geolocation".to_string()
            }
        );
    }

    #[test(tokio::test)]
    async fn listen_publishes_a_snapshot_per_event() {
        let (tx, rx) = mpsc::channel(8);
        let mut store = Store::new(rx);
        let mut notifier = store.notifier();

        tokio::spawn(async move { store.listen().await });

        tx.send(Event::LookupStarted).await.unwrap();
        notifier.changed().await.unwrap();
        assert_eq!(*notifier.borrow(), LookupState::Loading);

        tx.send(Event::LookupFailed("Unable to retrieve altitude data".to_string())).await.unwrap();
        notifier.changed().await.unwrap();
        assert_eq!(
            *notifier.borrow(),
            LookupState::Failed {
                error: "Unable to retrieve altitude data".to_string()
            }
        );
    }
}

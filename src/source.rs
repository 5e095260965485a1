//! Record source: the subscribable stream of rows behind the grid.
//!
//! Observers register an explicit callback and receive every emission, so
//! the data binding is traceable without a hidden event bus. A refresh
//! re-runs the fetch and fans the outcome out to all subscribers.

use std::sync::RwLock;

use crate::error::FetchError;
use crate::record::Record;

/// One emission from a record source: the fetched rows, or the failure.
pub type FetchOutcome = Result<Vec<Record>, FetchError>;

/// Callback registered by a subscriber.
pub type Observer = Box<dyn Fn(&FetchOutcome) + Send + Sync>;

/// A refreshable, subscribable supplier of records.
pub trait RecordSource: Send + Sync {
    /// Register an observer. It receives every subsequent emission,
    /// successful or not.
    fn subscribe(&self, observer: Observer);

    /// Re-run the fetch and notify all subscribers with the outcome.
    ///
    /// Returns `Err` when the fetch itself failed; subscribers are still
    /// notified of that failure so dependent views can react.
    fn refresh(&self) -> Result<(), FetchError>;
}

/// A record source backed by a fetch closure.
///
/// Construction does not fetch; the host triggers the initial `refresh()`.
pub struct InMemoryRecordSource {
    fetch: Box<dyn Fn() -> FetchOutcome + Send + Sync>,
    observers: RwLock<Vec<Observer>>,
}

impl InMemoryRecordSource {
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn() -> FetchOutcome + Send + Sync + 'static,
    {
        InMemoryRecordSource {
            fetch: Box::new(fetch),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// A source that always emits the same records.
    pub fn fixed(records: Vec<Record>) -> Self {
        Self::new(move || Ok(records.clone()))
    }
}

impl RecordSource for InMemoryRecordSource {
    fn subscribe(&self, observer: Observer) {
        match self.observers.write() {
            Ok(mut observers) => observers.push(observer),
            Err(_) => log::warn!("record source observer lock poisoned; subscription dropped"),
        }
    }

    fn refresh(&self) -> Result<(), FetchError> {
        let outcome = (self.fetch)();
        match self.observers.read() {
            Ok(observers) => {
                for observer in observers.iter() {
                    observer(&outcome);
                }
            }
            Err(_) => log::warn!("record source observer lock poisoned; emission dropped"),
        }
        outcome.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn refresh_fans_the_outcome_out_to_every_subscriber() {
        let source = InMemoryRecordSource::fixed(vec![Record::new("1")]);
        let seen_a = Arc::new(Mutex::new(0usize));
        let seen_b = Arc::new(Mutex::new(0usize));

        let a = Arc::clone(&seen_a);
        source.subscribe(Box::new(move |outcome| {
            assert_eq!(outcome.as_ref().unwrap().len(), 1);
            *a.lock().unwrap() += 1;
        }));
        let b = Arc::clone(&seen_b);
        source.subscribe(Box::new(move |_| {
            *b.lock().unwrap() += 1;
        }));

        source.refresh().unwrap();
        source.refresh().unwrap();
        assert_eq!(*seen_a.lock().unwrap(), 2);
        assert_eq!(*seen_b.lock().unwrap(), 2);
    }

    #[test]
    fn fetch_failures_reach_subscribers_and_the_caller() {
        let source =
            InMemoryRecordSource::new(|| Err(FetchError::new("connection refused")));
        let failures = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&failures);
        source.subscribe(Box::new(move |outcome| {
            if let Err(e) = outcome {
                sink.lock().unwrap().push(e.clone());
            }
        }));

        let err = source.refresh().unwrap_err();
        assert_eq!(err.message, "connection refused");
        assert_eq!(failures.lock().unwrap().len(), 1);
    }

    #[test]
    fn construction_does_not_fetch() {
        let fetches = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&fetches);
        let source = InMemoryRecordSource::new(move || {
            *counter.lock().unwrap() += 1;
            Ok(Vec::new())
        });
        assert_eq!(*fetches.lock().unwrap(), 0);
        source.refresh().unwrap();
        assert_eq!(*fetches.lock().unwrap(), 1);
    }
}

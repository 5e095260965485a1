//! Table view: a read-optimized projection of the rows the grid renders.
//!
//! Subscribes to a record source and mirrors its emissions: a successful
//! fetch replaces the rows, a failed fetch clears them and records the
//! error. The view stays well-formed either way.

use std::sync::{Arc, RwLock};

use crate::record::Record;
use crate::source::RecordSource;

#[derive(Default)]
struct ViewState {
    rows: Vec<Record>,
    fetch_error: Option<String>,
}

/// Rendered-row read model fed by a [`RecordSource`] subscription.
#[derive(Clone)]
pub struct TableView {
    state: Arc<RwLock<ViewState>>,
}

impl TableView {
    /// Create a view and subscribe it to the given source. Rows stay empty
    /// until the source's next emission.
    pub fn attach(source: &dyn RecordSource) -> Self {
        let view = TableView {
            state: Arc::new(RwLock::new(ViewState::default())),
        };
        let state = Arc::clone(&view.state);
        source.subscribe(Box::new(move |outcome| match state.write() {
            Ok(mut state) => match outcome {
                Ok(records) => {
                    state.rows = records.clone();
                    state.fetch_error = None;
                }
                Err(e) => {
                    state.rows.clear();
                    state.fetch_error = Some(e.message.clone());
                }
            },
            Err(_) => log::warn!("table view lock poisoned; emission dropped"),
        }));
        view
    }

    /// The rows currently rendered, in source order.
    pub fn rows(&self) -> Vec<Record> {
        match self.state.read() {
            Ok(state) => state.rows.clone(),
            Err(_) => {
                log::warn!("table view lock poisoned; returning no rows");
                Vec::new()
            }
        }
    }

    pub fn row_count(&self) -> usize {
        match self.state.read() {
            Ok(state) => state.rows.len(),
            Err(_) => 0,
        }
    }

    /// Message from the most recent failed fetch, cleared by the next
    /// successful one.
    pub fn fetch_error(&self) -> Option<String> {
        match self.state.read() {
            Ok(state) => state.fetch_error.clone(),
            Err(_) => None,
        }
    }
}

mod controller;
mod edit_buffer;
mod error;
mod notification;
mod record;
mod service;
mod source;
mod view;

pub use controller::{SaveController, SaveState};
pub use edit_buffer::EditBuffer;
pub use error::{ErrorPayload, FetchError};
pub use notification::{EmitterNotifier, Notification, Notifier, Severity};
pub use record::{DraftEdit, Record};
pub use service::{InMemoryUpdateService, RecordUpdateService, UpdateRequest};
pub use source::{FetchOutcome, InMemoryRecordSource, RecordSource};
pub use view::TableView;

// Re-export the EventEmitter from the event_emitter_rs crate
pub use event_emitter_rs::EventEmitter;

//! Save controller: the state machine behind the grid's save button.
//!
//! Owns the edit buffer and orchestrates one batch submission per save:
//! exactly one update call carrying the full buffer, then one notification
//! per outcome. On success the buffer is cleared and the record source is
//! asked to refresh; on rejection the buffer is left intact so the user's
//! edits survive for a retry.
//!
//! ## Example
//!
//! ```ignore
//! use record_grid::{DraftEdit, SaveController};
//!
//! let mut controller = SaveController::new(service, source, notifier);
//!
//! let mut edit = DraftEdit::for_record("1");
//! edit.first_name = Some("Janet".into());
//! controller.stage(edit);
//!
//! controller.submit().await;
//! ```

use std::sync::Arc;

use crate::edit_buffer::EditBuffer;
use crate::notification::{Notification, Notifier};
use crate::record::DraftEdit;
use crate::service::{RecordUpdateService, UpdateRequest};
use crate::source::RecordSource;

/// Where the controller is in the save cycle. `Submitting` while a request
/// is in flight, then the terminal outcome of the last settled submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

pub struct SaveController {
    service: Arc<dyn RecordUpdateService>,
    source: Arc<dyn RecordSource>,
    notifier: Arc<dyn Notifier>,
    buffer: EditBuffer,
    state: SaveState,
}

impl SaveController {
    /// Message emitted with the success notification.
    pub const SUCCESS_MESSAGE: &'static str = "Records updated";

    pub fn new(
        service: Arc<dyn RecordUpdateService>,
        source: Arc<dyn RecordSource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        SaveController {
            service,
            source,
            notifier,
            buffer: EditBuffer::new(),
            state: SaveState::Idle,
        }
    }

    /// Stage a draft edit into the pending buffer.
    pub fn stage(&mut self, edit: DraftEdit) {
        self.buffer.stage(edit);
    }

    /// The pending edits.
    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Outcome of the last submit, or `Idle` before the first one.
    pub fn last_state(&self) -> SaveState {
        self.state
    }

    /// Submit the current buffer as one batch.
    ///
    /// An empty buffer is still submitted; the service decides whether to
    /// accept it. The rejection is absorbed here, translated into an error
    /// notification rather than returned, and emits exactly one
    /// notification either way. No retry is initiated.
    pub async fn submit(&mut self) {
        self.state = SaveState::Submitting;
        let request = UpdateRequest::new(self.buffer.snapshot());

        match self.service.update(request).await {
            Ok(_updated) => {
                self.buffer.clear();
                // Fire-and-forget: a refresh failure must not suppress the
                // success notification.
                if let Err(e) = self.source.refresh() {
                    log::warn!("refresh after save failed: {}", e);
                }
                self.notifier
                    .notify(Notification::success(Self::SUCCESS_MESSAGE));
                self.state = SaveState::Succeeded;
            }
            Err(payload) => {
                self.notifier
                    .notify(Notification::error(payload.user_message()));
                self.state = SaveState::Failed;
            }
        }
    }
}

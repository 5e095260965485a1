//! Shared fixtures: a recording fake update service, a recording notifier,
//! and canned contact records.
#![allow(dead_code)] // not every test binary uses every fixture

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use record_grid::{
    ErrorPayload, Notification, Notifier, Record, RecordUpdateService, Severity, UpdateRequest,
};

pub fn contact(id: &str, first_name: &str, last_name: &str) -> Record {
    let mut record = Record::new(id);
    record.first_name = first_name.to_string();
    record.last_name = last_name.to_string();
    record.email = format!("{}@example.com", first_name.to_lowercase());
    record
}

/// Two-contact roster used across scenarios.
pub fn roster() -> Vec<Record> {
    vec![contact("1", "Jane", "Doe"), contact("2", "John", "Smith")]
}

/// Update service double with a scripted response and captured requests.
pub struct FakeUpdateService {
    response: Result<Vec<Record>, ErrorPayload>,
    calls: Mutex<Vec<UpdateRequest>>,
}

impl FakeUpdateService {
    pub fn resolving(records: Vec<Record>) -> Arc<Self> {
        Arc::new(FakeUpdateService {
            response: Ok(records),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting(payload: ErrorPayload) -> Arc<Self> {
        Arc::new(FakeUpdateService {
            response: Err(payload),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<UpdateRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordUpdateService for FakeUpdateService {
    async fn update(&self, request: UpdateRequest) -> Result<Vec<Record>, ErrorPayload> {
        self.calls.lock().unwrap().push(request);
        self.response.clone()
    }
}

/// Notifier double that records every notification synchronously.
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(RecordingNotifier {
            notifications: Mutex::new(Vec::new()),
        })
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn severities(&self) -> Vec<Severity> {
        self.notifications().iter().map(|n| n.severity).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

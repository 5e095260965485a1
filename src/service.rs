//! Record update service: the seam through which edited rows are persisted.
//!
//! A save submits the whole edit buffer as one batch. The request wire shape
//! is `{ "records": [draft, ...] }`; the service either resolves with the
//! updated records or rejects with an [`ErrorPayload`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ErrorPayload;
use crate::record::{DraftEdit, Record};

/// The batch payload submitted on save. Carries the full edit buffer in one
/// request; per-record calls are not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub records: Vec<DraftEdit>,
}

impl UpdateRequest {
    pub fn new(records: Vec<DraftEdit>) -> Self {
        UpdateRequest { records }
    }
}

/// Persists a batch of draft edits.
#[async_trait]
pub trait RecordUpdateService: Send + Sync {
    /// Apply the batch. Resolves with the updated records, or rejects with
    /// an error payload. The batch is atomic: either every draft applied or
    /// the rejection reports failure for the whole request.
    async fn update(&self, request: UpdateRequest) -> Result<Vec<Record>, ErrorPayload>;
}

/// HashMap-backed update service for development and single-process use.
///
/// Applies drafts against a shared record map keyed by id. Clone-friendly
/// via `Arc`, so a record source can be wired over the same store.
#[derive(Clone)]
pub struct InMemoryUpdateService {
    storage: Arc<RwLock<HashMap<String, Record>>>,
}

impl InMemoryUpdateService {
    /// Create a service seeded with the given records.
    pub fn new(seed: Vec<Record>) -> Self {
        let storage = seed
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect();
        InMemoryUpdateService {
            storage: Arc::new(RwLock::new(storage)),
        }
    }

    /// Current contents of the store, in no particular order.
    pub fn records(&self) -> Result<Vec<Record>, ErrorPayload> {
        let storage = self
            .storage
            .read()
            .map_err(|_| ErrorPayload::new("record store lock poisoned", 500))?;
        Ok(storage.values().cloned().collect())
    }

    /// Look up a single record by id.
    pub fn get(&self, id: &str) -> Result<Option<Record>, ErrorPayload> {
        let storage = self
            .storage
            .read()
            .map_err(|_| ErrorPayload::new("record store lock poisoned", 500))?;
        Ok(storage.get(id).cloned())
    }
}

#[async_trait]
impl RecordUpdateService for InMemoryUpdateService {
    async fn update(&self, request: UpdateRequest) -> Result<Vec<Record>, ErrorPayload> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| ErrorPayload::new("record store lock poisoned", 500))?;

        // Validate the whole batch before touching anything so a rejection
        // leaves the store unchanged.
        for draft in &request.records {
            if !storage.contains_key(draft.id()) {
                return Err(ErrorPayload::new(
                    format!("no record with id {}", draft.id()),
                    404,
                ));
            }
        }

        let mut updated = Vec::with_capacity(request.records.len());
        for draft in &request.records {
            let current = &storage[draft.id()];
            let next = draft.apply_to(current);
            storage.insert(next.id().to_string(), next.clone());
            updated.push(next);
        }
        Ok(updated)
    }
}

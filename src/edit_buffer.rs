use crate::record::DraftEdit;

/// The set of pending draft edits awaiting save.
///
/// Holds at most one draft per record identifier, in the order the records
/// were first edited. Staging a second draft for the same record merges it
/// into the existing one in place, so the latest edit supersedes prior ones
/// without losing the record's position in the batch.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    drafts: Vec<DraftEdit>,
}

impl EditBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a draft edit. Merges into the existing draft for the same
    /// record if one is already pending.
    pub fn stage(&mut self, edit: DraftEdit) {
        if let Some(existing) = self.drafts.iter_mut().find(|d| d.id() == edit.id()) {
            existing.merge(edit);
        } else {
            self.drafts.push(edit);
        }
    }

    /// Clone the current contents in staging order.
    pub fn snapshot(&self) -> Vec<DraftEdit> {
        self.drafts.clone()
    }

    /// The pending draft for a record, if any.
    pub fn get(&self, id: &str) -> Option<&DraftEdit> {
        self.drafts.iter().find(|d| d.id() == id)
    }

    /// Drop all pending drafts. Called by the save controller only after a
    /// confirmed successful save.
    pub fn clear(&mut self) {
        self.drafts.clear();
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

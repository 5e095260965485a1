use serde::{Deserialize, Serialize};

/// A single row of the grid: an opaque identifier plus a fixed set of
/// mutable scalar fields. The identifier never changes after creation,
/// so it is only exposed read-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
}

impl Record {
    /// Create a record with the given identifier and empty fields.
    pub fn new(id: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            title: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A partial record update pending submission: the record's identifier
/// plus only the fields the user changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEdit {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl DraftEdit {
    /// Start an empty draft for the record with the given identifier.
    pub fn for_record(id: impl Into<String>) -> Self {
        DraftEdit {
            id: id.into(),
            first_name: None,
            last_name: None,
            title: None,
            phone: None,
            email: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// True when no field has been changed.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.title.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }

    /// Fold a later draft for the same record into this one. Fields set
    /// in `later` supersede this draft's values field by field.
    pub fn merge(&mut self, later: DraftEdit) {
        if later.first_name.is_some() {
            self.first_name = later.first_name;
        }
        if later.last_name.is_some() {
            self.last_name = later.last_name;
        }
        if later.title.is_some() {
            self.title = later.title;
        }
        if later.phone.is_some() {
            self.phone = later.phone;
        }
        if later.email.is_some() {
            self.email = later.email;
        }
    }

    /// Produce the record that results from applying this draft. Unchanged
    /// fields keep the record's current values; the identifier is preserved.
    pub fn apply_to(&self, record: &Record) -> Record {
        let mut next = record.clone();
        if let Some(first_name) = &self.first_name {
            next.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            next.last_name = last_name.clone();
        }
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(phone) = &self.phone {
            next.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            next.email = email.clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_later_wins_field_by_field() {
        let mut draft = DraftEdit::for_record("1");
        draft.first_name = Some(String::from("Jane"));
        draft.title = Some(String::from("Engineer"));

        let mut later = DraftEdit::for_record("1");
        later.first_name = Some(String::from("Janet"));
        later.phone = Some(String::from("555-0100"));

        draft.merge(later);
        assert_eq!(draft.first_name.as_deref(), Some("Janet"));
        assert_eq!(draft.title.as_deref(), Some("Engineer"));
        assert_eq!(draft.phone.as_deref(), Some("555-0100"));
        assert_eq!(draft.last_name, None);
    }

    #[test]
    fn apply_to_preserves_id_and_untouched_fields() {
        let mut record = Record::new("1");
        record.first_name = String::from("Jane");
        record.last_name = String::from("Doe");
        record.email = String::from("jane@example.com");

        let mut draft = DraftEdit::for_record("1");
        draft.first_name = Some(String::from("Janet"));

        let updated = draft.apply_to(&record);
        assert_eq!(updated.id(), "1");
        assert_eq!(updated.first_name, "Janet");
        assert_eq!(updated.last_name, "Doe");
        assert_eq!(updated.email, "jane@example.com");
    }

    #[test]
    fn empty_draft_applies_as_a_no_op() {
        let mut record = Record::new("1");
        record.first_name = String::from("Jane");

        let draft = DraftEdit::for_record("1");
        assert!(draft.is_empty());
        assert_eq!(draft.apply_to(&record), record);
    }

    #[test]
    fn unchanged_fields_are_omitted_from_the_wire() {
        let mut draft = DraftEdit::for_record("1");
        draft.email = Some(String::from("janet@example.com"));

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": "1", "email": "janet@example.com" })
        );

        let parsed: DraftEdit = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, draft);
    }
}

//! Person Data Structures
//!
//! Wire types for the phonebook collection exposed at `/api/persons`.

use serde::{Deserialize, Serialize};

use crate::shared::error::ValidationError;

/// A phonebook entry as stored by the backend.
///
/// The `id` is assigned by the remote store on create and treated as an
/// opaque string. Add/update routing matches records by `name`
/// (case-sensitive, exact); replace and remove match by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    /// Server-assigned identifier
    pub id: String,
    /// Display name, non-empty
    pub name: String,
    /// Phone number, non-empty
    pub number: String,
}

/// Payload for create and update calls.
///
/// Never carries an id: the server assigns one on create, and updates
/// address the target record through the URL path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub number: String,
}

impl PersonDraft {
    /// Build a draft from raw form input, rejecting empty fields.
    ///
    /// Only the empty string is rejected; whitespace-only input passes,
    /// matching the `required` semantics of the form inputs.
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let number = number.into();
        if name.is_empty() {
            return Err(ValidationError::empty("name"));
        }
        if number.is_empty() {
            return Err(ValidationError::empty("number"));
        }
        Ok(Self { name, number })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_rejects_empty_name() {
        let err = PersonDraft::new("", "040-123456").unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_draft_rejects_empty_number() {
        let err = PersonDraft::new("Arto Hellas", "").unwrap_err();
        assert_eq!(err.field, "number");
    }

    #[test]
    fn test_draft_accepts_whitespace_only_input() {
        // Mirrors the form's `required` behavior: only "" is empty.
        let draft = PersonDraft::new(" ", " ").unwrap();
        assert_eq!(draft.name, " ");
    }

    #[test]
    fn test_person_deserializes_from_backend_json() {
        let json = r#"{"id":"6421a","name":"Ada Lovelace","number":"39-44-5323523"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.id, "6421a");
        assert_eq!(person.name, "Ada Lovelace");
        assert_eq!(person.number, "39-44-5323523");
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = PersonDraft::new("Ada Lovelace", "39-44-5323523").unwrap();
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("name"));
        assert!(object.contains_key("number"));
    }
}

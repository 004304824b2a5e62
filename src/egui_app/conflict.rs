//! Conflict classification
//!
//! Pure decisions about how a submission or a failed remote call should be
//! handled. Nothing here talks to the network or touches shared state; the
//! orchestration in `state` acts on the returned variants.

use crate::shared::error::ApiError;
use crate::shared::person::Person;

/// What an add submission should do, given the current local list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddAction {
    /// No entry with this exact name exists; create a new record.
    Create,
    /// An entry with exactly this name exists; offer to overwrite its number.
    UpdateExisting(Person),
}

/// How a failed remote mutation should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The record no longer exists on the server, usually because another
    /// client deleted it.
    NotFound,
    /// Any other failure. The detail stays on the `ApiError` the caller
    /// already holds.
    Other,
}

/// Route an add submission by exact, case-sensitive name match.
///
/// Intentionally stricter than display filtering: "alice" and "Alice" are
/// distinct entries here, while the filter treats them as the same.
pub fn classify_add(persons: &[Person], name: &str) -> AddAction {
    match persons.iter().find(|p| p.name == name) {
        Some(existing) => AddAction::UpdateExisting(existing.clone()),
        None => AddAction::Create,
    }
}

/// Classify a failed update or delete. Only 404 means the record vanished.
/// The result picks the notification wording; the list is never touched on
/// a failure.
pub fn classify_failure(error: &ApiError) -> FailureKind {
    if error.is_not_found() {
        FailureKind::NotFound
    } else {
        FailureKind::Other
    }
}

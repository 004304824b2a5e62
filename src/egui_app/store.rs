//! Person Store
//!
//! Owns the in-memory copy of the remote phonebook collection. The list is
//! loaded once at startup and afterwards only mirrors successful remote
//! operations, so it can diverge silently if another client mutates the
//! backend; that divergence is surfaced per operation, not by re-fetching.

use crate::shared::person::Person;

/// Ordered list of phonebook entries.
///
/// Insertion order is preserved; updates replace in place by id and deletes
/// remove by id. Mutated only from completion handlers on the UI thread.
#[derive(Debug, Default)]
pub struct PersonStore {
    persons: Vec<Person>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh fetch result. Last call wins.
    pub fn load(&mut self, persons: Vec<Person>) {
        self.persons = persons;
    }

    /// Add a newly created record to the end of the list.
    pub fn append(&mut self, person: Person) {
        self.persons.push(person);
    }

    /// Substitute the entry with a matching id, in place.
    ///
    /// Silently does nothing when no entry matches: the record was deleted
    /// elsewhere and the caller surfaces that separately.
    pub fn replace(&mut self, person: Person) {
        if let Some(slot) = self.persons.iter_mut().find(|p| p.id == person.id) {
            *slot = person;
        }
    }

    /// Remove the entry with a matching id; no-op when absent.
    pub fn remove(&mut self, id: &str) {
        self.persons.retain(|p| p.id != id);
    }

    /// All entries in stored order.
    pub fn all(&self) -> &[Person] {
        &self.persons
    }

    /// Look up one entry by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    /// Entries whose name contains `filter` as a case-insensitive
    /// substring, in stored order. An empty filter yields the whole list.
    /// Never mutates the underlying list.
    pub fn filtered_by(&self, filter: &str) -> Vec<&Person> {
        let needle = filter.to_lowercase();
        self.persons
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

//! Property-based tests for filtering and add routing

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::Index;
use xfbook::egui_app::conflict::{self, AddAction};
use xfbook::egui_app::PersonStore;
use xfbook::shared::person::Person;

fn person_strategy() -> impl Strategy<Value = Person> {
    ("[0-9]{1,4}", "[A-Za-z ]{1,12}", "[0-9-]{1,12}").prop_map(|(id, name, number)| Person {
        id,
        name,
        number,
    })
}

proptest! {
    #[test]
    fn test_filter_result_is_an_ordered_subsequence(
        persons in vec(person_strategy(), 0..12),
        filter in "[A-Za-z]{0,4}",
    ) {
        let mut store = PersonStore::new();
        store.load(persons.clone());

        let filtered: Vec<String> = store
            .filtered_by(&filter)
            .into_iter()
            .map(|p| p.name.clone())
            .collect();

        // Every filtered name occurs in the original list, in order.
        let mut remaining = persons.iter().map(|p| p.name.clone());
        for name in &filtered {
            prop_assert!(remaining.any(|original| original == *name));
        }

        // The store itself is untouched.
        prop_assert_eq!(store.len(), persons.len());
    }

    #[test]
    fn test_empty_filter_yields_every_entry(persons in vec(person_strategy(), 0..12)) {
        let mut store = PersonStore::new();
        store.load(persons.clone());

        prop_assert_eq!(store.filtered_by("").len(), persons.len());
    }

    #[test]
    fn test_filter_case_never_changes_the_result(
        persons in vec(person_strategy(), 0..12),
        filter in "[A-Za-z]{0,4}",
    ) {
        let mut store = PersonStore::new();
        store.load(persons);

        let lower: Vec<String> = store
            .filtered_by(&filter.to_lowercase())
            .into_iter()
            .map(|p| p.name.clone())
            .collect();
        let upper: Vec<String> = store
            .filtered_by(&filter.to_uppercase())
            .into_iter()
            .map(|p| p.name.clone())
            .collect();

        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn test_existing_name_always_routes_to_update(
        persons in vec(person_strategy(), 1..8),
        pick in any::<Index>(),
    ) {
        let target = pick.get(&persons);

        match conflict::classify_add(&persons, &target.name) {
            AddAction::UpdateExisting(found) => prop_assert_eq!(&found.name, &target.name),
            AddAction::Create => prop_assert!(false, "existing name must route to update"),
        }
    }

    #[test]
    fn test_unknown_name_always_routes_to_create(
        persons in vec(person_strategy(), 0..8),
        name in "[A-Za-z]{1,12}",
    ) {
        prop_assume!(persons.iter().all(|p| p.name != name));

        let action = conflict::classify_add(&persons, &name);
        prop_assert!(matches!(action, AddAction::Create));
    }
}

use rollcall::app::{Action, AppState, FilterKey};
use rollcall::view::{Direction, SortField};

mod common;
use common::{add_student, visible_rolls};

fn roster() -> AppState {
    let mut state = AppState::default();
    add_student(&mut state, "CSE2025-001", "José Martínez", "CSE", 1, 8.4);
    add_student(&mut state, "ECE2025-002", "Ana", "ECE", 2, 9.1);
    add_student(&mut state, "ME2025-003", "Ravi", "ME", 2, 6.7);
    add_student(&mut state, "CSE2025-004", "Zoë", "CSE", 3, 7.9);
    state
}

#[test]
fn test_roll_query_returns_only_first() {
    let mut state = AppState::default();
    add_student(&mut state, "CSE2025-001", "Ravi", "CSE", 1, 8.0);
    add_student(&mut state, "ECE2025-002", "Ana", "ECE", 2, 7.0);

    state.update(Action::Search("cse2025-01".to_string()));
    assert_eq!(visible_rolls(&state), ["CSE2025-001"]);
}

#[test]
fn test_name_query_is_accent_and_case_insensitive() {
    let mut state = roster();
    state.update(Action::Search("ZOE".to_string()));
    assert_eq!(visible_rolls(&state), ["CSE2025-004"]);

    state.update(Action::Search("rvi".to_string()));
    assert_eq!(visible_rolls(&state), ["ME2025-003"]);
}

#[test]
fn test_query_needs_whole_value_within_one_edit() {
    let mut state = roster();
    // a first name alone is too far from the full name
    state.update(Action::Search("jose".to_string()));
    assert!(visible_rolls(&state).is_empty());

    state.update(Action::Search("jose martinez".to_string()));
    assert_eq!(visible_rolls(&state), ["CSE2025-001"]);
}

#[test]
fn test_filters_combine_with_query() {
    let mut state = roster();
    state.update(Action::SetFilter(FilterKey::Dept, "CSE".to_string()));
    assert_eq!(visible_rolls(&state), ["CSE2025-001", "CSE2025-004"]);

    state.update(Action::SetFilter(FilterKey::Year, "3".to_string()));
    assert_eq!(visible_rolls(&state), ["CSE2025-004"]);

    state.update(Action::Search("ana".to_string()));
    assert!(visible_rolls(&state).is_empty());

    state.update(Action::ResetFilters);
    assert_eq!(visible_rolls(&state).len(), 4);
}

#[test]
fn test_sorting() {
    let mut state = roster();
    state.update(Action::SetSort(SortField::Name, Direction::Asc));
    assert_eq!(
        visible_rolls(&state),
        ["ECE2025-002", "CSE2025-001", "ME2025-003", "CSE2025-004"]
    );

    state.update(Action::SetSort(SortField::Cgpa, Direction::Desc));
    assert_eq!(
        visible_rolls(&state),
        ["ECE2025-002", "CSE2025-001", "CSE2025-004", "ME2025-003"]
    );

    // sorting is a view; insertion order in the store is untouched
    let stored: Vec<_> = state.store().list_all().iter().map(|r| r.roll.clone()).collect();
    assert_eq!(stored, ["CSE2025-001", "ECE2025-002", "ME2025-003", "CSE2025-004"]);
}

#[test]
fn test_duplicate_roll_is_rejected_without_losing_form() {
    let mut state = roster();
    add_student(&mut state, "ME2025-003", "Someone Else", "ME", 1, 5.0);
    assert_eq!(state.store().len(), 4);
    assert_eq!(state.form().name, "Someone Else");
    assert!(state.form().errors.values().any(|m| m == "Roll number must be unique"));
}

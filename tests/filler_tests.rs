mod common;

use std::collections::HashSet;

use common::utils::{descriptor_of, events_of, labeled_descriptor, value_of};
use propace_autofill::dom::dom_model::{Element, FieldIdentity};
use propace_autofill::engine::error::AutofillError;
use propace_autofill::fill::filler::{fill_field, run_fill_pass};
use propace_autofill::matching::mapper::MappingCandidate;
use propace_autofill::trace::logger::TraceLogger;

// =========================================================================
// Text-like fills
// =========================================================================

#[test]
fn text_fill_sets_value_and_fires_framework_events() {
    let input = Element::new("input").with_name("full_name").into_node();
    let field = descriptor_of(&input, 1);

    fill_field(&field, "Jane Doe").expect("text fill succeeds");

    assert_eq!(value_of(&input), "Jane Doe");
    assert_eq!(
        events_of(&input),
        vec!["input".to_string(), "change".to_string()],
        "Reactive frameworks expect input then change"
    );
}

#[test]
fn text_fill_restores_a_read_only_flag() {
    let input = Element::new("input").with_name("locked").into_node();
    let field = descriptor_of(&input, 1);
    input.borrow_mut().read_only = true;

    fill_field(&field, "value").expect("read-only is lifted for the write");

    assert_eq!(value_of(&input), "value");
    assert!(input.borrow().read_only, "Prior read-only state is restored");
}

#[test]
fn textarea_fills_like_a_text_input() {
    let area = Element::new("textarea").with_name("address").into_node();
    let field = descriptor_of(&area, 1);

    fill_field(&field, "12 Canal Road").expect("textarea fill succeeds");
    assert_eq!(value_of(&area), "12 Canal Road");
}

// =========================================================================
// Selects
// =========================================================================

#[test]
fn select_picks_the_first_option_containing_the_value() {
    let select = Element::new("select")
        .with_name("gender")
        .with_options(&[("Male", "Male"), ("Female", "Female")])
        .into_node();
    let field = descriptor_of(&select, 1);

    fill_field(&field, "male").expect("substring match succeeds");

    let el = select.borrow();
    assert_eq!(el.selected_index, Some(0), "First containing option wins");
    assert_eq!(el.value, "Male");
    assert_eq!(el.fired_events, vec!["change".to_string()]);
}

#[test]
fn select_matches_on_option_value_when_text_differs() {
    let select = Element::new("select")
        .with_name("city")
        .with_options(&[("LHE", "Lahore"), ("KHI", "Karachi")])
        .into_node();
    let field = descriptor_of(&select, 1);

    fill_field(&field, "khi").expect("value substring matches");
    assert_eq!(select.borrow().selected_index, Some(1));
}

#[test]
fn select_without_a_matching_option_fails_cleanly() {
    let select = Element::new("select")
        .with_name("gender")
        .with_options(&[("Male", "Male"), ("Female", "Female")])
        .into_node();
    let field = descriptor_of(&select, 1);

    let err = fill_field(&field, "other").unwrap_err();
    assert!(matches!(err, AutofillError::NoMatchingOption { .. }));

    let el = select.borrow();
    assert_eq!(el.selected_index, None, "No partial mutation");
    assert!(el.fired_events.is_empty(), "No notification on failure");
}

// =========================================================================
// Checkboxes and radios
// =========================================================================

#[test]
fn checkbox_accepts_the_truthy_value_table() {
    for (value, expected) in [
        ("true", true),
        ("1", true),
        ("yes", true),
        ("on", true),
        ("YES", true),
        ("no", false),
        ("0", false),
        ("", false),
    ] {
        let checkbox = Element::new("input")
            .with_input_type("checkbox")
            .with_name("agree")
            .into_node();
        let field = descriptor_of(&checkbox, 1);

        fill_field(&field, value).expect("checkbox fill always succeeds");
        assert_eq!(
            checkbox.borrow().checked,
            expected,
            "checkbox value '{}'",
            value
        );
    }
}

#[test]
fn radio_checks_only_its_own_literal_value() {
    let radio = Element::new("input")
        .with_input_type("radio")
        .with_name("gender")
        .with_value("female")
        .into_node();
    let field = descriptor_of(&radio, 1);

    fill_field(&field, "female").expect("matching radio value");
    assert!(radio.borrow().checked);
}

#[test]
fn mismatched_radio_reports_failure_and_stays_unchecked() {
    let radio = Element::new("input")
        .with_input_type("radio")
        .with_name("gender")
        .with_value("female")
        .into_node();
    let field = descriptor_of(&radio, 1);

    let err = fill_field(&field, "male").unwrap_err();
    assert!(matches!(err, AutofillError::RadioValueMismatch { .. }));

    let el = radio.borrow();
    assert!(!el.checked, "Mismatched radio must not be checked");
    assert!(el.fired_events.is_empty());
}

// =========================================================================
// Content-editable and detached elements
// =========================================================================

#[test]
fn content_editable_gets_its_text_set() {
    let node = {
        let mut el = Element::new("div").with_name("bio");
        el.content_editable = true;
        el.into_node()
    };
    let field = descriptor_of(&node, 1);

    fill_field(&field, "Some biography").expect("content-editable fill");
    assert_eq!(node.borrow().text, "Some biography");
}

#[test]
fn detached_element_reports_element_gone() {
    let field = {
        let node = Element::new("input").with_name("ghost").into_node();
        descriptor_of(&node, 1)
        // node dropped here; only the weak handle survives
    };

    let err = fill_field(&field, "value").unwrap_err();
    assert!(matches!(err, AutofillError::ElementDetached { .. }));
}

// =========================================================================
// Greedy consumption loop
// =========================================================================

fn candidate(key: &str, value: &str, field: propace_autofill::FieldDescriptor, score: f32) -> MappingCandidate {
    MappingCandidate {
        data_key: key.to_string(),
        value: value.to_string(),
        field,
        score,
    }
}

#[test]
fn consumption_commits_highest_score_and_skips_conflicts() {
    let input = Element::new("input").with_name("full_name").into_node();
    let field = descriptor_of(&input, 1);

    // Two data keys competing for the same field, best first after sorting.
    let candidates = vec![
        candidate("name", "Jane Doe", field.clone(), 0.9),
        candidate("fatherName", "John Doe", field.clone(), 0.7),
    ];

    let mut used_fields = HashSet::new();
    let mut used_keys = HashSet::new();
    let (filled, records) = run_fill_pass(
        &candidates,
        &mut used_fields,
        &mut used_keys,
        &TraceLogger::disabled(),
    );

    assert_eq!(filled, 1, "Field consumed exactly once");
    assert_eq!(value_of(&input), "Jane Doe", "The 0.9 candidate won");
    assert_eq!(records.len(), 1, "Skipped candidates leave no record");
    assert!(used_fields.contains(&FieldIdentity(1)));
    assert!(used_keys.contains("name"));
    assert!(!used_keys.contains("fatherName"), "Loser key stays available");
}

#[test]
fn consumption_skips_candidates_for_used_data_keys() {
    let a = Element::new("input").with_name("full_name").into_node();
    let b = Element::new("input").with_name("first_name").into_node();

    let candidates = vec![
        candidate("name", "Jane Doe", descriptor_of(&a, 1), 0.9),
        candidate("name", "Jane Doe", descriptor_of(&b, 2), 0.9),
    ];

    let mut used_fields = HashSet::new();
    let mut used_keys = HashSet::new();
    let (filled, _) = run_fill_pass(
        &candidates,
        &mut used_fields,
        &mut used_keys,
        &TraceLogger::disabled(),
    );

    assert_eq!(filled, 1, "One fill per data key");
    assert_eq!(value_of(&a), "Jane Doe");
    assert_eq!(value_of(&b), "", "Second field left alone");
}

#[test]
fn failed_attempt_consumes_nothing_and_the_loop_continues() {
    let radio = Element::new("input")
        .with_input_type("radio")
        .with_name("gender")
        .with_value("female")
        .into_node();
    let text = Element::new("input").with_name("full_name").into_node();

    let candidates = vec![
        candidate("gender", "male", descriptor_of(&radio, 1), 0.9),
        candidate("name", "Jane Doe", descriptor_of(&text, 2), 0.9),
    ];

    let mut used_fields = HashSet::new();
    let mut used_keys = HashSet::new();
    let (filled, records) = run_fill_pass(
        &candidates,
        &mut used_fields,
        &mut used_keys,
        &TraceLogger::disabled(),
    );

    assert_eq!(filled, 1, "Radio failure does not stop the pass");
    assert_eq!(records.len(), 2);
    assert!(!records[0].filled);
    assert!(records[0].error.is_some());
    assert!(records[1].filled);
    assert!(
        !used_keys.contains("gender"),
        "A failed candidate consumes neither key nor field"
    );
    assert!(!used_fields.contains(&FieldIdentity(1)));
}

#[test]
fn pass_over_dangling_descriptor_records_a_failure() {
    let field = labeled_descriptor("gone", "", "");
    let candidates = vec![candidate("name", "Jane", field, 0.7)];

    let mut used_fields = HashSet::new();
    let mut used_keys = HashSet::new();
    let (filled, records) = run_fill_pass(
        &candidates,
        &mut used_fields,
        &mut used_keys,
        &TraceLogger::disabled(),
    );

    assert_eq!(filled, 0);
    assert_eq!(records.len(), 1);
    assert!(!records[0].filled);
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use quotebook_core::errors::QuoteBookError;
use quotebook_core::logging_facility::test_capture::init_test_capture;
use quotebook_core::{log_op_end, log_op_error, log_op_start, MemoryKv, QuoteStore};
use quotebook_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CATEGORY, FIELD_ERR_CODE, FIELD_QUOTE_COUNT,
};

fn fresh_store() -> QuoteStore {
    QuoteStore::initialize(Box::new(MemoryKv::new()), Box::new(MemoryKv::new()))
}

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.events_for(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = QuoteBookError::EmptyField { field: "text" };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_VALIDATION"));
    assert_eq!(error_events[0].level, tracing::Level::ERROR);
}

#[test]
fn test_add_quote_emits_start_and_end() {
    let capture = init_test_capture();
    let mut store = fresh_store();
    let category = "logging-add-category-unique";

    store.add("logged", category).unwrap();

    capture.assert_event_exists("add_quote", EVENT_START);
    let ends = capture.events_for("add_quote", EVENT_END);
    let ours = ends
        .iter()
        .find(|e| e.field(FIELD_CATEGORY) == Some(category))
        .expect("end event for our category");
    assert_eq!(ours.field(FIELD_QUOTE_COUNT), Some("5"));
    assert!(ours.field("duration_ms").is_some());
}

#[test]
fn test_rejected_replace_emits_error_event() {
    let capture = init_test_capture();
    let mut store = fresh_store();

    let _ = store.replace_all(vec![quotebook_core::Quote::new("", "X")]);

    let errors = capture.events_for("replace_all", EVENT_END_ERROR);
    assert!(
        errors
            .iter()
            .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_VALIDATION")),
        "Expected a validation error event"
    );
}

#[test]
fn test_corrupt_collection_is_logged_as_warning() {
    let capture = init_test_capture();
    let local = MemoryKv::with_entries([("quotes", "corrupt-for-logging-test")]);

    let _store = QuoteStore::initialize(Box::new(local), Box::new(MemoryKv::new()));

    let warnings = capture.count_events(|e| {
        e.level == tracing::Level::WARN
            && e
                .field("error")
                .map(|msg| msg.contains("quotes"))
                .unwrap_or(false)
    });
    assert!(warnings >= 1, "Expected a fallback warning");
}

//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a palette response upholds the field-ordering invariant:
/// no populated field after an absent one.
pub fn assert_no_field_holes(json: &serde_json::Value) {
    let obj = json.as_object().expect("palette should be a JSON object");
    let order = ["mainColor", "secondaryColor", "accentColor1", "accentColor2"];

    let mut seen_absent = false;
    for field in order {
        let present = obj.contains_key(field);
        assert!(
            !(present && seen_absent),
            "Field {field} present after an earlier field was absent: {json}"
        );
        if !present {
            seen_absent = true;
        }
    }
}

/// Assert no two populated palette fields hold the same color
pub fn assert_no_duplicate_colors(json: &serde_json::Value) {
    let obj = json.as_object().expect("palette should be a JSON object");
    let mut seen = std::collections::HashSet::new();
    for (field, value) in obj {
        assert!(
            seen.insert(value.to_string()),
            "Duplicate color in field {field}: {json}"
        );
    }
}

// tests/unwrap.rs
//
// Response wrapper stripping and document parsing.
mod common;

use common::{framing, wrap, PREAMBLE, SUFFIX};
use vtrack_dash::config::options::Framing;
use vtrack_dash::core::gviz::{parse_document, read_table, unwrap};
use vtrack_dash::error::ErrorKind;

#[test]
fn wrapper_lengths_match_framing() {
    let f = framing();
    assert_eq!(PREAMBLE.len(), 47);
    assert_eq!(PREAMBLE.len(), f.prefix_len);
    assert_eq!(SUFFIX.len(), f.suffix_len);
}

#[test]
fn unwrap_recovers_exact_json() {
    let json = r#"{"table":{"rows":[{"c":[{"v":"a"},null]}]}}"#;
    let body = wrap(json);
    assert_eq!(unwrap(&body, &framing()).unwrap(), json);
}

#[test]
fn unwrap_rejects_short_body() {
    let err = unwrap("setResponse();", &framing()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
}

#[test]
fn unwrap_rejects_wrong_preamble() {
    let body = format!("{}{{}});", "x".repeat(47));
    let err = unwrap(&body, &framing()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
}

#[test]
fn unwrap_rejects_wrong_suffix() {
    let body = format!("{PREAMBLE}{{}}]]");
    let err = unwrap(&body, &framing()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
}

#[test]
fn empty_markers_slice_by_length_only() {
    let framing = Framing {
        prefix_len: 3,
        suffix_len: 1,
        prefix_marker: String::new(),
        suffix_marker: String::new(),
    };
    assert_eq!(unwrap("abc[1]z", &framing).unwrap(), "[1]");
}

#[test]
fn boundary_inside_a_character_is_rejected() {
    let framing = Framing {
        prefix_len: 1,
        suffix_len: 0,
        prefix_marker: String::new(),
        suffix_marker: String::new(),
    };
    assert!(unwrap("é{}", &framing).is_err());
}

#[test]
fn invalid_json_is_parse_failure() {
    let err = read_table(&wrap("{not json"), &framing()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
}

#[test]
fn missing_rows_is_parse_failure() {
    let err = parse_document(r#"{"status":"ok","table":{"cols":[]}}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);

    let err = parse_document(r#"{"status":"ok"}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseFailure);
}

#[test]
fn error_status_is_not_found() {
    let json = r#"{"version":"0.6","status":"error","errors":[{"reason":"invalid_query","message":"INVALID_QUERY","detailed_message":"Invalid sheet name"}]}"#;
    let err = read_table(&wrap(json), &framing()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("Invalid sheet name"));
}

#[test]
fn typed_values_become_text() {
    let json = r#"{"table":{"rows":[{"c":[{"v":12},{"v":true},{"v":"Date(2025,11,19)","f":"19/12/2025"}]}]}}"#;
    let t = parse_document(json).unwrap();
    let row = &t.rows[0];
    assert_eq!(row.text(0), "12");
    assert_eq!(row.text(1), "true");
    assert_eq!(row.text(2), "Date(2025,11,19)");
    assert_eq!(row.cell(2).unwrap().formatted.as_deref(), Some("19/12/2025"));
    assert_eq!(row.text(9), "");
}

#[test]
fn empty_rows_array_is_an_empty_table() {
    let t = read_table(&wrap(r#"{"table":{"rows":[]}}"#), &framing()).unwrap();
    assert_eq!(t.row_count(), 0);
    assert!(t.header().is_none());
}

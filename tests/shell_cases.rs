use std::collections::HashMap;

use pretty_assertions::assert_eq;

use finstmt_worker::models::ErrorResponse;
use finstmt_worker::routes::parse_download_query;
use finstmt_worker::upload::{json_attachment_filename, validate_upload};

#[test]
fn maps_upload_name_to_json_attachment() {
    assert_eq!(json_attachment_filename(Some("q4-results.pdf")), "q4-results.json");
    assert_eq!(json_attachment_filename(Some("Q4 Results.PDF")), "Q4 Results.json");
    assert_eq!(json_attachment_filename(Some("archive.tar")), "archive.tar.json");
    assert_eq!(json_attachment_filename(Some("  ")), "financial-statements.json");
    assert_eq!(json_attachment_filename(None), "financial-statements.json");
}

#[test]
fn rejects_empty_oversized_and_non_pdf_uploads() {
    let empty = validate_upload(&[], 100).expect_err("empty body should be rejected");
    assert_eq!(empty.status_code(), 400);

    let oversized =
        validate_upload(b"%PDF-1.5 plus padding", 4).expect_err("oversized body should be rejected");
    assert_eq!(oversized.status_code(), 413);
    assert_eq!(oversized.code(), "payload_too_large");

    let not_pdf = validate_upload(b"<html></html>", 100).expect_err("non-PDF should be rejected");
    assert_eq!(not_pdf.status_code(), 400);

    validate_upload(b"%PDF-1.5 minimal", 100).expect("PDF-shaped body should pass");
}

#[test]
fn download_flag_accepts_truthy_spellings() {
    for value in ["true", "1", "yes", " TRUE "] {
        let query = HashMap::from([("download".to_string(), value.to_string())]);
        assert!(parse_download_query(&query), "value {value:?} should enable download");
    }

    let off = HashMap::from([("download".to_string(), "no".to_string())]);
    assert!(!parse_download_query(&off));
    assert!(!parse_download_query(&HashMap::new()));
}

#[test]
fn error_envelope_serializes_code_and_message() {
    let envelope = ErrorResponse {
        code: "bad_request".to_string(),
        message: "upload does not look like a PDF".to_string(),
    };

    let json = serde_json::to_string(&envelope).expect("envelope should serialize");
    assert_eq!(
        json,
        r#"{"code":"bad_request","message":"upload does not look like a PDF"}"#
    );
}

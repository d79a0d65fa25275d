use super::*;

// =============================================================
// Endpoint URLs
// =============================================================

#[test]
fn api_url_joins_origin_and_path() {
    assert_eq!(api_url("/books"), format!("{API_ORIGIN}/books"));
    assert_eq!(api_url("/delete"), format!("{API_ORIGIN}/delete"));
}

#[test]
fn api_origin_has_no_trailing_slash() {
    assert!(!API_ORIGIN.ends_with('/'));
}

// =============================================================
// Failure-body extraction
// =============================================================

#[test]
fn error_from_body_prefers_server_message() {
    let body = r#"{"error":"bad credentials"}"#;
    assert_eq!(error_from_body(body, LOGIN_FAILED), "bad credentials");
}

#[test]
fn error_from_body_falls_back_when_error_field_missing() {
    assert_eq!(error_from_body("{}", LOGIN_FAILED), "Login failed");
}

#[test]
fn error_from_body_falls_back_on_plain_text() {
    // Some backend failure paths write plain text, not JSON.
    assert_eq!(
        error_from_body("No rows affected\n", DELETE_BOOK_ERROR),
        "Error deleting the book"
    );
}

#[test]
fn error_from_body_falls_back_on_empty_body() {
    assert_eq!(
        error_from_body("", FETCH_BOOKS_ERROR),
        "Error occurred while fetching existing data"
    );
}

// =============================================================
// Book-list body decoding
// =============================================================

#[test]
fn parse_books_body_decodes_records() {
    let body = r#"[{"isdn":"1","title":"A","author":"B"}]"#;
    let books = parse_books_body(body).unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].isdn, "1");
    assert_eq!(books[0].title, "A");
    assert_eq!(books[0].author, "B");
}

#[test]
fn parse_books_body_treats_null_as_empty() {
    // The backend encodes an empty table as JSON null.
    assert_eq!(parse_books_body("null").unwrap(), Vec::new());
}

#[test]
fn parse_books_body_decodes_empty_array() {
    assert_eq!(parse_books_body("[]").unwrap(), Vec::new());
}

#[test]
fn parse_books_body_rejects_malformed_json() {
    assert!(parse_books_body("<html>").is_err());
}

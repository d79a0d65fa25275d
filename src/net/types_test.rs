use super::*;

#[test]
fn book_deserializes_documented_field_names() {
    let book: Book = serde_json::from_str(r#"{"isdn":"99","title":"X","author":"Y"}"#).unwrap();
    assert_eq!(
        book,
        Book {
            isdn: "99".to_owned(),
            title: "X".to_owned(),
            author: "Y".to_owned(),
        }
    );
}

#[test]
fn book_serializes_isdn_even_when_empty() {
    // Add submissions send an empty isdn; the backend assigns the real one.
    let book = Book {
        isdn: String::new(),
        title: "X".to_owned(),
        author: "Y".to_owned(),
    };
    let value = serde_json::to_value(&book).unwrap();
    assert_eq!(value, serde_json::json!({"isdn":"","title":"X","author":"Y"}));
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let credentials = Credentials {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
    };
    let value = serde_json::to_value(&credentials).unwrap();
    assert_eq!(value, serde_json::json!({"email":"a@b.com","password":"pw"}));
}

#[test]
fn error_body_tolerates_missing_error_field() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.error.is_none());
}

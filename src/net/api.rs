//! HTTP API helpers for the inventory backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host-side: stubs returning errors, since the endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, String>` where the error is the
//! user-displayable message: the failure body's `error` field when it
//! parses, otherwise a fixed per-operation fallback. Transport and parse
//! failures map to the same fallbacks. All failures are logged at `warn`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;
use super::types::{Book, Credentials};

/// Backend origin; overridable at build time via `BOOKS_API_ORIGIN`.
const API_ORIGIN: &str = match option_env!("BOOKS_API_ORIGIN") {
    Some(origin) => origin,
    None => "http://localhost:8080",
};

/// Fallback when a login failure body carries no message.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback for login transport failures.
pub const LOGIN_ERROR: &str = "Error during login";
/// Fallback when a registration failure body carries no message.
pub const REGISTRATION_FAILED: &str = "Registration failed";
/// Fallback for registration transport failures.
pub const REGISTRATION_ERROR: &str = "Error during registration";
/// Fallback for any list-fetch failure.
pub const FETCH_BOOKS_ERROR: &str = "Error occurred while fetching existing data";
/// Fallback for any add failure.
pub const ADD_BOOK_ERROR: &str = "Error adding the book";
/// Fallback for any delete failure.
pub const DELETE_BOOK_ERROR: &str = "Error deleting the book";

#[cfg(any(test, feature = "csr"))]
fn api_url(path: &str) -> String {
    format!("{API_ORIGIN}{path}")
}

/// Extract the display message from a failure body. Bodies that are not
/// the expected `{error}` JSON (some backend paths emit plain text) yield
/// the fallback.
#[cfg(any(test, feature = "csr"))]
fn error_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| fallback.to_owned())
}

/// Decode a book-list body. The backend encodes an empty table as `null`,
/// which decodes as an empty list.
#[cfg(any(test, feature = "csr"))]
fn parse_books_body(body: &str) -> Result<Vec<Book>, serde_json::Error> {
    serde_json::from_str::<Option<Vec<Book>>>(body).map(Option::unwrap_or_default)
}

/// Submit credentials to `POST /login`. The success body is not inspected.
///
/// # Errors
///
/// Returns the displayable failure message.
pub async fn login(credentials: &Credentials) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        post_credentials("/login", credentials, LOGIN_FAILED, LOGIN_ERROR).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(LOGIN_ERROR.to_owned())
    }
}

/// Submit credentials to `POST /register`. The success body is not
/// inspected.
///
/// # Errors
///
/// Returns the displayable failure message.
pub async fn register(credentials: &Credentials) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        post_credentials("/register", credentials, REGISTRATION_FAILED, REGISTRATION_ERROR).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(REGISTRATION_ERROR.to_owned())
    }
}

/// Fetch the full inventory from `GET /books`.
///
/// # Errors
///
/// Returns the displayable failure message.
pub async fn fetch_books() -> Result<Vec<Book>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/books"))
            .send()
            .await
            .map_err(|e| {
                log::warn!("GET /books transport error: {e}");
                FETCH_BOOKS_ERROR.to_owned()
            })?;
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            log::warn!("GET /books failed with status {}", resp.status());
            return Err(error_from_body(&body, FETCH_BOOKS_ERROR));
        }
        parse_books_body(&body).map_err(|e| {
            log::warn!("GET /books body did not parse: {e}");
            FETCH_BOOKS_ERROR.to_owned()
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(FETCH_BOOKS_ERROR.to_owned())
    }
}

/// Submit a new book to `POST /books`. The response echoes the record
/// with its server-assigned ISDN.
///
/// # Errors
///
/// Returns the displayable failure message.
pub async fn add_book(book: &Book) -> Result<Book, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/books"))
            .json(book)
            .map_err(|e| {
                log::warn!("POST /books encode error: {e}");
                ADD_BOOK_ERROR.to_owned()
            })?
            .send()
            .await
            .map_err(|e| {
                log::warn!("POST /books transport error: {e}");
                ADD_BOOK_ERROR.to_owned()
            })?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            log::warn!("POST /books failed with status {}", resp.status());
            return Err(error_from_body(&body, ADD_BOOK_ERROR));
        }
        resp.json::<Book>().await.map_err(|e| {
            log::warn!("POST /books body did not parse: {e}");
            ADD_BOOK_ERROR.to_owned()
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = book;
        Err(ADD_BOOK_ERROR.to_owned())
    }
}

/// Submit `book` to `POST /delete`; the backend matches on its ISDN. The
/// success body is empty.
///
/// # Errors
///
/// Returns the displayable failure message.
pub async fn delete_book(book: &Book) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&api_url("/delete"))
            .json(book)
            .map_err(|e| {
                log::warn!("POST /delete encode error: {e}");
                DELETE_BOOK_ERROR.to_owned()
            })?
            .send()
            .await
            .map_err(|e| {
                log::warn!("POST /delete transport error: {e}");
                DELETE_BOOK_ERROR.to_owned()
            })?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            log::warn!("POST /delete failed with status {}", resp.status());
            return Err(error_from_body(&body, DELETE_BOOK_ERROR));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = book;
        Err(DELETE_BOOK_ERROR.to_owned())
    }
}

#[cfg(feature = "csr")]
async fn post_credentials(
    path: &str,
    credentials: &Credentials,
    failed: &str,
    transport: &str,
) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(&api_url(path))
        .json(credentials)
        .map_err(|e| {
            log::warn!("POST {path} encode error: {e}");
            transport.to_owned()
        })?
        .send()
        .await
        .map_err(|e| {
            log::warn!("POST {path} transport error: {e}");
            transport.to_owned()
        })?;
    if resp.ok() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    log::warn!("POST {path} failed with status {}", resp.status());
    Err(error_from_body(&body, failed))
}

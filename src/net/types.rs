//! Wire types for the inventory HTTP API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies field for field so serde
//! round-trips stay lossless. The backend enforces no format invariant on
//! any field, and neither does the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login/registration request body.
///
/// Held only in transient form state and serialized for the submit call;
/// never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email; also the account key server-side.
    pub email: String,
    /// Password, sent as-is; hashing and verification are server concerns.
    pub password: String,
}

/// A single inventory record.
///
/// `isdn` is the identifying key for delete operations. No uniqueness or
/// format invariant is enforced client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Identifying key; assigned by the backend on add.
    pub isdn: String,
    pub title: String,
    pub author: String,
}

/// Failure body shape for every endpoint: `{ "error": "..." }`.
///
/// Some backend failure paths emit plain text instead; callers must treat
/// a body that does not parse as this shape as carrying no message.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Server-provided display message, if present.
    pub error: Option<String>,
}

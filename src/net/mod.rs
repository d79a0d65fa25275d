//! Networking modules for the inventory HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls against the backend; `types` defines the
//! wire schema shared by requests, responses, and application state.

pub mod api;
pub mod types;

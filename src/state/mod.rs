//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the screen mode and the shared message slots;
//! `inventory` owns the book list and its request bookkeeping. Pages
//! mutate both through explicit transition methods so the logic stays
//! unit-testable without a browser.

pub mod inventory;
pub mod session;

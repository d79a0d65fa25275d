//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the inventory chrome while reading/writing shared
//! state from Leptos context providers; network orchestration stays in
//! the pages.

pub mod book_table;

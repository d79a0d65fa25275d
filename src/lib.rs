//! # library-client
//!
//! Leptos + WASM single-page client for a remote library inventory
//! service: login, registration, and CRUD management of a book list.
//!
//! This crate contains pages, components, shared application state, and
//! the HTTP API layer. Browser-only code is gated behind the `csr`
//! feature so the crate (and its test suite) also compiles on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs the panic/log hooks and mounts
/// [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting library inventory client");
    leptos::mount::mount_to_body(app::App);
}

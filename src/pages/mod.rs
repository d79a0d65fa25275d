//! Page modules for the three application screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen's orchestration (form state, network calls,
//! state transitions) and delegates shared rendering details to
//! `components`.

pub mod inventory;
pub mod login;
pub mod register;

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_logged_out_on_login_screen() {
    let state = SessionState::default();
    assert_eq!(state.screen, Screen::LoggedOut(AuthScreen::Login));
    assert!(state.error.is_none());
    assert!(state.notice.is_none());
}

// =============================================================
// Login flow
// =============================================================

#[test]
fn login_success_shows_inventory_and_clears_prior_error() {
    let mut state = SessionState::default();
    state.report_error("bad credentials");
    state.login_succeeded();
    assert_eq!(state.screen, Screen::LoggedIn);
    assert!(state.error.is_none());
}

#[test]
fn login_failure_displays_message_without_changing_screen() {
    let mut state = SessionState::default();
    state.report_error("bad credentials");
    assert_eq!(state.screen, Screen::LoggedOut(AuthScreen::Login));
    assert_eq!(state.error.as_deref(), Some("bad credentials"));
}

#[test]
fn report_error_overwrites_previous_message() {
    let mut state = SessionState::default();
    state.report_error("first");
    state.report_error("second");
    assert_eq!(state.error.as_deref(), Some("second"));
}

#[test]
fn report_error_clears_stale_notice() {
    let mut state = SessionState::default();
    state.registration_succeeded();
    state.report_error("bad credentials");
    assert!(state.notice.is_none());
}

// =============================================================
// Registration flow
// =============================================================

#[test]
fn show_registration_switches_screen_and_clears_error() {
    let mut state = SessionState::default();
    state.report_error("bad credentials");
    state.show_registration();
    assert_eq!(state.screen, Screen::LoggedOut(AuthScreen::Registration));
    assert!(state.error.is_none());
}

#[test]
fn registration_success_returns_to_login_with_notice() {
    let mut state = SessionState::default();
    state.show_registration();
    state.report_error("email taken");
    state.registration_succeeded();
    assert_eq!(state.screen, Screen::LoggedOut(AuthScreen::Login));
    assert!(state.error.is_none());
    assert_eq!(
        state.notice.as_deref(),
        Some("Registration successful! You can now log in.")
    );
}

#[test]
fn show_login_returns_from_registration() {
    let mut state = SessionState::default();
    state.show_registration();
    state.show_login();
    assert_eq!(state.screen, Screen::LoggedOut(AuthScreen::Login));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_returns_to_login_and_clears_messages() {
    let mut state = SessionState::default();
    state.login_succeeded();
    state.report_error("Error deleting the book");
    state.logout();
    assert_eq!(state.screen, Screen::LoggedOut(AuthScreen::Login));
    assert!(state.error.is_none());
    assert!(state.notice.is_none());
}

//! Session state: which screen is visible and the shared message slots.
//!
//! DESIGN
//! ======
//! The screen mode is a tagged variant rather than independent booleans,
//! so "logged in while showing registration" is unrepresentable. Every
//! successful transition clears both message slots; a failure overwrites
//! the error slot and leaves the screen unchanged.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Screens reachable while unauthenticated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    /// Email + password login form.
    #[default]
    Login,
    /// Email + password registration form.
    Registration,
}

/// Top-level UI mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Unauthenticated; shows one of the auth forms.
    LoggedOut(AuthScreen),
    /// Authenticated; shows the inventory table.
    LoggedIn,
}

impl Default for Screen {
    fn default() -> Self {
        Self::LoggedOut(AuthScreen::Login)
    }
}

/// Session state owned by the app shell and shared through context.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Currently visible screen.
    pub screen: Screen,
    /// Most recent failure message from whichever page is active.
    pub error: Option<String>,
    /// Transient success notice shown on the login screen after
    /// registration.
    pub notice: Option<String>,
}

impl SessionState {
    /// Successful login: show the inventory and clear stale messages.
    pub fn login_succeeded(&mut self) {
        self.screen = Screen::LoggedIn;
        self.clear_messages();
    }

    /// Successful registration: back to the login form with a
    /// confirmation notice.
    pub fn registration_succeeded(&mut self) {
        self.screen = Screen::LoggedOut(AuthScreen::Login);
        self.clear_messages();
        self.notice = Some("Registration successful! You can now log in.".to_owned());
    }

    /// Navigate from the login form to the registration form.
    pub fn show_registration(&mut self) {
        self.screen = Screen::LoggedOut(AuthScreen::Registration);
        self.clear_messages();
    }

    /// Navigate from the registration form back to the login form.
    pub fn show_login(&mut self) {
        self.screen = Screen::LoggedOut(AuthScreen::Login);
        self.clear_messages();
    }

    /// Log out and return to the login form. Inventory state is reset by
    /// the page that triggers this.
    pub fn logout(&mut self) {
        self.screen = Screen::LoggedOut(AuthScreen::Login);
        self.clear_messages();
    }

    /// Record a failure message, overwriting any previous message. The
    /// screen does not change.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.notice = None;
    }

    fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }
}

//! Root application shell: shared state contexts and screen dispatch.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the session and inventory signals and renders exactly one
//! screen for the current mode. Pages communicate only through these
//! contexts; there is no router and no persistence across reloads.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::inventory::InventoryPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::inventory::InventoryState;
use crate::state::session::{AuthScreen, Screen, SessionState};

/// Root application component.
///
/// Provides the shared state contexts, renders the message banner, and
/// switches between the login, registration, and inventory screens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let inventory = RwSignal::new(InventoryState::default());

    provide_context(session);
    provide_context(inventory);

    view! {
        <Title text="Library Inventory"/>

        <div class="app-container">
            <Show when=move || session.get().error.is_some()>
                <p class="error-message">{move || session.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || session.get().notice.is_some()>
                <p class="notice-message">{move || session.get().notice.unwrap_or_default()}</p>
            </Show>
            {move || match session.get().screen {
                Screen::LoggedIn => view! { <InventoryPage/> }.into_any(),
                Screen::LoggedOut(AuthScreen::Login) => view! { <LoginPage/> }.into_any(),
                Screen::LoggedOut(AuthScreen::Registration) => {
                    view! { <RegisterPage/> }.into_any()
                }
            }}
        </div>
    }
}

//! Registration page: email + password against `POST /register`.

use leptos::prelude::*;

use crate::net::types::Credentials;
use crate::state::session::SessionState;

/// Registration form. On success the session returns to the login screen
/// with a confirmation notice; the form (and its field contents) is
/// discarded with the transition.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&credentials).await {
                Ok(()) => session.update(|s| s.registration_succeeded()),
                Err(message) => session.update(|s| s.report_error(message)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-form">
            <h2>"Registration"</h2>
            <form on:submit=on_submit>
                <label>"Email:"</label>
                <input
                    type="text"
                    name="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <br/>
                <label>"Password:"</label>
                <input
                    type="password"
                    name="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <br/>
                <button type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
            </form>
            <p>
                "Already have an account? "
                <button on:click=move |_| session.update(|s| s.show_login())>
                    "Login"
                </button>
            </p>
        </div>
    }
}

//! Inventory page: list, add, delete, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing screen. It fetches the book list
//! once per mount and coordinates the add/delete flows against the
//! shared inventory state. Failures surface both inline and in the
//! session error slot.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;

use crate::components::book_table::BookTable;
use crate::net::types::Book;
use crate::state::inventory::InventoryState;
use crate::state::session::SessionState;

/// Build the outgoing record for an add submission; the backend assigns
/// the ISDN.
fn outgoing_book(title: &str, author: &str) -> Book {
    Book {
        isdn: String::new(),
        title: title.to_owned(),
        author: author.to_owned(),
    }
}

/// Inventory screen: add form, logout, and the book table.
#[component]
pub fn InventoryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let inventory = expect_context::<RwSignal<InventoryState>>();

    let title = RwSignal::new(String::new());
    let author = RwSignal::new(String::new());

    // One list fetch per mount; remounting after logout starts fresh.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        let seq = inventory.try_update(|s| s.begin_fetch()).unwrap_or_default();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_books().await {
                Ok(books) => inventory.update(|s| s.apply_fetch_success(seq, books)),
                Err(message) => {
                    session.update(|s| s.report_error(message.clone()));
                    inventory.update(|s| s.apply_fetch_error(seq, message));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = seq;
    });

    let on_add = move |_| {
        if !inventory.try_update(InventoryState::begin_add).unwrap_or(false) {
            return;
        }
        let book = outgoing_book(&title.get(), &author.get());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_book(&book).await {
                Ok(added) => {
                    inventory.update(|s| s.apply_add_success(added));
                    title.set(String::new());
                    author.set(String::new());
                }
                Err(message) => {
                    session.update(|s| s.report_error(message.clone()));
                    inventory.update(|s| s.apply_add_error(message));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = book;
    };

    let on_delete = Callback::new(move |book: Book| {
        if !inventory
            .try_update(|s| s.begin_delete(&book.isdn))
            .unwrap_or(false)
        {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_book(&book).await {
                Ok(()) => inventory.update(|s| s.apply_delete_success(&book.isdn)),
                Err(message) => {
                    session.update(|s| s.report_error(message.clone()));
                    inventory.update(|s| s.apply_delete_error(&book.isdn, message));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = book;
    });

    let on_logout = move |_| {
        inventory.set(InventoryState::default());
        session.update(|s| s.logout());
    };

    view! {
        <div class="inventory-page">
            <h1>"Library Inventory"</h1>
            <div class="form-container">
                <label>
                    "Title:"
                    <input
                        type="text"
                        name="title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Author:"
                    <input
                        type="text"
                        name="author"
                        prop:value=move || author.get()
                        on:input=move |ev| author.set(event_target_value(&ev))
                    />
                </label>
                <button on:click=on_add disabled=move || inventory.get().add_pending>
                    "Add Book"
                </button>
                <button on:click=on_logout>"Logout"</button>
            </div>
            <Show when=move || inventory.get().error.is_some()>
                <p class="error-message">{move || inventory.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !inventory.get().loading
                fallback=move || view! { <p>"Loading..."</p> }
            >
                <div class="table-container">
                    <h2>"Book List:"</h2>
                    <BookTable on_delete=on_delete/>
                </div>
            </Show>
        </div>
    }
}

//! Inventory table: one row per book with an editable ISDN cell.
//!
//! DESIGN
//! ======
//! The ISDN cell is an input bound to local state only; edits never reach
//! the backend, and any later fetch overwrites them. Deletes are
//! delegated to the page through a callback so network orchestration
//! stays out of presentation code. Rows are keyed by index so typing in
//! an ISDN cell does not remount the input.

use leptos::prelude::*;

use crate::net::types::Book;
use crate::state::inventory::InventoryState;

/// The book list table. Renders a placeholder row when the list is empty.
#[component]
pub fn BookTable(on_delete: Callback<Book>) -> impl IntoView {
    let inventory = expect_context::<RwSignal<InventoryState>>();

    view! {
        <table class="book-table">
            <thead>
                <tr>
                    <th>"ISDN"</th>
                    <th>"Title"</th>
                    <th>"Author"</th>
                    <th>"Delete"</th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !inventory.get().books.is_empty()
                    fallback=|| {
                        view! {
                            <tr>
                                <td colspan="4">"No books available"</td>
                            </tr>
                        }
                    }
                >
                    <For
                        each=move || 0..inventory.get().books.len()
                        key=|index| *index
                        children=move |index| view! { <BookRow index=index on_delete=on_delete/> }
                    />
                </Show>
            </tbody>
        </table>
    }
}

/// One table row. The ISDN cell writes local edits straight back to the
/// shared inventory state; the delete button hands the current record
/// (including any local ISDN edit) to the page.
#[component]
fn BookRow(index: usize, on_delete: Callback<Book>) -> impl IntoView {
    let inventory = expect_context::<RwSignal<InventoryState>>();
    let book = move || {
        inventory
            .get()
            .books
            .get(index)
            .cloned()
            .unwrap_or_default()
    };
    let delete_pending = move || inventory.get().pending_deletes.contains(&book().isdn);

    view! {
        <tr>
            <td>
                <input
                    type="text"
                    prop:value=move || book().isdn
                    on:input=move |ev| {
                        inventory.update(|s| s.edit_isdn(index, event_target_value(&ev)));
                    }
                />
            </td>
            <td>{move || book().title}</td>
            <td>{move || book().author}</td>
            <td>
                <button
                    disabled=delete_pending
                    on:click=move |_| on_delete.run(book())
                >
                    "Delete Book"
                </button>
            </td>
        </tr>
    }
}

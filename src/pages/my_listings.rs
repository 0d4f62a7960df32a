//! My Listings page
//!
//! Shows the signed-in seller's book listings bucketed into
//! Active/Sold/Pending tabs, with a per-listing sold-status toggle.
//! All view state lives in a single [`ListingsState`] snapshot driven
//! by reducer events, so the page itself is only wiring.

use dioxus::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::auth;
use crate::components::{ListingCard, ListingCardSkeleton};
use crate::routes::Route;
use crate::state::{ListingsEvent, ListingsState, Tab};
use crate::types::Book;

/// My Listings page component
#[component]
pub fn MyListings() -> Element {
    let mut state = use_signal(ListingsState::default);
    let navigator = use_navigator();

    // Initial load
    use_effect(move || {
        spawn(async move {
            load_listings(state, navigator).await;
        });
    });

    let handle_toggle = move |(id, next_status): (String, String)| {
        spawn(async move {
            toggle_sold_status(state, navigator, id, next_status).await;
        });
    };

    let snapshot = state.read().clone();
    let cards: Vec<(String, Book, bool)> = snapshot
        .visible()
        .into_iter()
        .enumerate()
        .map(|(i, book)| {
            let key = book.id.clone().unwrap_or_else(|| i.to_string());
            let updating = snapshot.is_updating(book.id.as_deref());
            (key, book.clone(), updating)
        })
        .collect();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            // Top bar
            header {
                class: "bg-white border-b border-gray-200 sticky top-0 z-10",
                div {
                    class: "max-w-2xl mx-auto px-4 py-3 flex items-center justify-between",
                    button {
                        r#type: "button",
                        class: "w-8 h-8 flex items-center justify-center rounded-full text-gray-600 hover:bg-gray-100",
                        onclick: move |_| {
                            navigator.go_back();
                        },
                        "\u{2190}"
                    }
                    h1 { class: "text-lg font-semibold text-gray-900", "My Listings" }
                    div { class: "w-8" }
                }
            }

            // Tabs
            div {
                class: "bg-white border-b border-gray-200",
                div {
                    class: "max-w-2xl mx-auto px-4 flex gap-1",
                    for tab in Tab::variants() {
                        {
                            let tab = *tab;
                            let is_active = snapshot.tab == tab;
                            rsx! {
                                button {
                                    key: "{tab:?}",
                                    r#type: "button",
                                    class: if is_active {
                                        "px-4 py-2.5 text-sm font-medium border-b-2 border-amber-700 text-amber-700"
                                    } else {
                                        "px-4 py-2.5 text-sm font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-700"
                                    },
                                    onclick: move |_| state.write().apply(ListingsEvent::TabSelected(tab)),
                                    "{tab.label()}"
                                }
                            }
                        }
                    }
                }
            }

            // Content: loading, error, empty, or the filtered listings
            main {
                class: "max-w-2xl mx-auto px-4 py-6",

                if snapshot.loading {
                    div {
                        class: "space-y-4",
                        for i in 0..3 {
                            ListingCardSkeleton { key: "{i}" }
                        }
                    }
                } else if let Some(err) = snapshot.error.clone() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg text-center",
                        p { class: "mb-3", "{err}" }
                        button {
                            r#type: "button",
                            class: "px-4 py-2 bg-amber-700 text-white text-sm rounded-lg hover:bg-amber-800",
                            onclick: move |_| {
                                spawn(async move {
                                    load_listings(state, navigator).await;
                                });
                            },
                            "Retry"
                        }
                    }
                } else if cards.is_empty() {
                    div {
                        class: "text-center py-16 text-gray-500",
                        "No listings"
                    }
                } else {
                    div {
                        class: "space-y-4",
                        for (key, book, updating) in cards {
                            ListingCard {
                                key: "{key}",
                                book,
                                updating,
                                on_toggle: handle_toggle,
                            }
                        }
                    }
                }
            }

            // New-listing FAB
            button {
                r#type: "button",
                class: "fixed bottom-6 right-6 w-14 h-14 rounded-full bg-amber-700 text-white text-2xl shadow-lg hover:bg-amber-800",
                onclick: move |_| {
                    navigator.push(Route::SellBook {});
                },
                "+"
            }
        }
    }
}

/// Fetch the seller's listings and fold the outcome into view state.
///
/// A 401 sends the user to login; every exit path clears the loading
/// flag via the reducer.
async fn load_listings(mut state: Signal<ListingsState>, navigator: Navigator) {
    state.write().apply(ListingsEvent::FetchStarted);

    let client = match ApiClient::from_session() {
        Ok(client) => client,
        Err(err) => {
            state.write().apply(ListingsEvent::FetchFailed(err.to_string()));
            return;
        }
    };

    match client.my_books().await {
        Ok(books) => state.write().apply(ListingsEvent::FetchSucceeded(books)),
        Err(err) => {
            let unauthorized = matches!(err, ApiError::Unauthorized(_));
            state.write().apply(ListingsEvent::FetchFailed(err.to_string()));
            if unauthorized {
                navigator.push(Route::Login {});
            }
        }
    }
}

/// Toggle one listing's sold status, then resynchronize from the
/// backend. There is no optimistic local patch: the cached listings
/// only change through the refetch.
async fn toggle_sold_status(
    mut state: Signal<ListingsState>,
    navigator: Navigator,
    book_id: String,
    next_status: String,
) {
    if book_id.is_empty() {
        return;
    }

    // A missing credential goes straight to login, no request made.
    if auth::read_token().is_none() {
        navigator.push(Route::Login {});
        return;
    }

    state
        .write()
        .apply(ListingsEvent::ToggleStarted(book_id.clone()));

    let result = match ApiClient::from_session() {
        Ok(client) => client.set_sold_status(&book_id, &next_status).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => load_listings(state, navigator).await,
        Err(err) => notify(&err.to_string()),
    }

    // Cleared regardless of how the update or the refetch went.
    state.write().apply(ListingsEvent::ToggleFinished);
}

/// Blocking notification for mutation failures.
fn notify(message: &str) {
    #[cfg(feature = "web")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
        return;
    }
    tracing::error!("{message}");
}

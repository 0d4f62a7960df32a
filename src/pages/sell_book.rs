//! Sell-a-book page

use dioxus::prelude::*;

use crate::routes::Route;

/// Create-listing placeholder page
#[component]
pub fn SellBook() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex items-center justify-center px-4",
            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full text-center",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "List a book" }
                p { class: "text-gray-600 text-sm mb-4", "The listing form is coming soon." }
                Link {
                    to: Route::MyListings {},
                    class: "text-amber-700 hover:text-amber-800 text-sm font-medium",
                    "\u{2190} Back to My Listings"
                }
            }
        }
    }
}

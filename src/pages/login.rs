//! Login page
//!
//! The real sign-in flow lives in the storefront shell; this route is
//! the redirect target when the session credential is missing or the
//! backend answers 401.

use dioxus::prelude::*;

/// Login placeholder page
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",
            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full text-center",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Sign in required" }
                p {
                    class: "text-gray-600 text-sm",
                    "Your session has expired. Sign in again to manage your listings."
                }
            }
        }
    }
}

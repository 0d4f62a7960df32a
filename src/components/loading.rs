//! Loading components

use dioxus::prelude::*;

/// Skeleton loader shaped like a listing card
#[component]
pub fn ListingCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-4 flex gap-4 animate-pulse",
            div { class: "w-24 h-32 bg-gray-200 rounded-lg shrink-0" }
            div {
                class: "flex-1 min-w-0",
                div {
                    class: "flex items-center justify-between mb-2",
                    div { class: "h-5 w-2/5 bg-gray-200 rounded" }
                    div { class: "h-5 w-16 bg-gray-200 rounded-full" }
                }
                div { class: "h-4 w-1/3 bg-gray-200 rounded mb-3" }
                div { class: "h-5 w-20 bg-gray-200 rounded mb-4" }
                div { class: "h-8 w-28 bg-gray-200 rounded-lg mb-4" }
                div {
                    class: "flex justify-between",
                    div { class: "h-4 w-16 bg-gray-200 rounded" }
                    div { class: "h-4 w-24 bg-gray-200 rounded" }
                }
            }
        }
    }
}

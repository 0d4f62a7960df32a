//! Listing card component

use dioxus::prelude::*;

use crate::state::{classify, Tab};
use crate::types::Book;

/// Fallback shown when a listing has no image or its image fails to load.
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/120x160?text=Book";

/// Props for ListingCard
#[derive(Props, Clone, PartialEq)]
pub struct ListingCardProps {
    pub book: Book,
    /// Whether a sold-status update for this listing is in flight.
    pub updating: bool,
    /// Called with (listing id, next soldstatus) when the toggle is clicked.
    pub on_toggle: EventHandler<(String, String)>,
}

/// Card displaying a single listing with its sold-status toggle
#[component]
pub fn ListingCard(props: ListingCardProps) -> Element {
    let on_toggle = props.on_toggle;
    let updating = props.updating;
    let book = &props.book;

    let mut image_failed = use_signal(|| false);

    let tab = classify(book);
    let badge = badge_styles(tab);
    let badge_label = tab.label().to_uppercase();

    let image_src = if image_failed() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        book.image
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    };

    let button_label = if updating {
        "Updating..."
    } else if book.is_sold_out() {
        "Mark Instock"
    } else {
        "Mark Soldout"
    };

    let toggle_id = book.id.clone().unwrap_or_default();
    let next_status = book.next_sold_status().to_string();

    let condition = book.condition.clone().unwrap_or_default();
    let location = book.location.clone().unwrap_or_default();
    let category_line = match (book.category.as_deref(), book.subcategory.as_deref()) {
        (Some(category), Some(subcategory)) => format!("{category} \u{2022} {subcategory}"),
        (Some(category), None) => category.to_string(),
        (None, Some(subcategory)) => subcategory.to_string(),
        (None, None) => String::new(),
    };

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-4 flex gap-4 hover:shadow-md transition-shadow",

            // Thumbnail
            div {
                class: "w-24 h-32 shrink-0 overflow-hidden rounded-lg bg-gray-100",
                img {
                    class: "w-full h-full object-cover",
                    src: "{image_src}",
                    alt: "{book.name}",
                    onerror: move |_| image_failed.set(true),
                }
            }

            div {
                class: "flex-1 min-w-0 flex flex-col",

                // Name + tab badge
                div {
                    class: "flex items-start justify-between gap-2 mb-1",
                    h3 {
                        class: "text-sm font-semibold text-gray-900 truncate",
                        title: "{book.name}",
                        "{book.name}"
                    }
                    span {
                        class: "px-2 py-0.5 rounded-full text-xs font-semibold shrink-0 {badge.bg} {badge.text}",
                        "{badge_label}"
                    }
                }

                // Category / subcategory
                if !category_line.is_empty() {
                    p { class: "text-xs text-gray-500 mb-1", "{category_line}" }
                }

                // Price
                p { class: "text-base font-bold text-gray-900 mb-3", "\u{20b9}{book.price_text()}" }

                // Sold-status toggle
                div {
                    class: "mb-3",
                    button {
                        r#type: "button",
                        class: "px-3 py-1.5 bg-amber-700 text-white text-sm rounded-lg hover:bg-amber-800 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: updating,
                        onclick: move |_| on_toggle.call((toggle_id.clone(), next_status.clone())),
                        "{button_label}"
                    }
                }

                // Condition + location
                div {
                    class: "mt-auto flex items-center justify-between text-xs text-gray-500",
                    span { "{condition}" }
                    span { "{location}" }
                }
            }
        }
    }
}

// Badge styling per tab, matching the storefront palette
struct BadgeStyles {
    bg: &'static str,
    text: &'static str,
}

fn badge_styles(tab: Tab) -> BadgeStyles {
    match tab {
        Tab::Active => BadgeStyles {
            bg: "bg-green-100",
            text: "text-green-700",
        },
        Tab::Sold => BadgeStyles {
            bg: "bg-gray-200",
            text: "text-gray-600",
        },
        Tab::Pending => BadgeStyles {
            bg: "bg-amber-100",
            text: "text-amber-700",
        },
    }
}

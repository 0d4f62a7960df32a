//! Reusable UI components

mod listing_card;
mod loading;

pub use listing_card::*;
pub use loading::*;

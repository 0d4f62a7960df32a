//! Application pages

mod login;
mod my_listings;
mod sell_book;

pub use login::*;
pub use my_listings::*;
pub use sell_book::*;

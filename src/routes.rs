//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{Login, MyListings, SellBook};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MyListings {},

    #[route("/login")]
    Login {},

    #[route("/sellbook")]
    SellBook {},
}

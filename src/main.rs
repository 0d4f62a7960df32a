//! BookMart - seller listings web frontend
//!
//! Client-side Dioxus web application for managing a seller's book
//! listings. It talks to the existing BookMart REST API.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! API_BASE_URL=http://localhost:8080/api dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! API_BASE_URL=https://api.bookmart.example dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod config;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // The API base is baked in at compile time; a missing value is
    // surfaced in the UI as a configuration error, not a panic.
    config::init_from_env();

    dioxus::launch(app::App);
}

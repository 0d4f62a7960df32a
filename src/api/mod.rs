//! REST client for communicating with the BookMart API server

mod client;

pub use client::*;

//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use pages::{Comparison, Dashboard, Detail, Settings};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/stocks/:ticker")]
    Detail { ticker: String },
    #[route("/compare")]
    Comparison {},
    #[route("/settings")]
    Settings {},
}

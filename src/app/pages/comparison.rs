//! Comparison page component.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// Side-by-side sector and stock comparison view.
#[component]
pub fn Comparison() -> Element {
    rsx! {
        Layout {
            title: "Comparison".to_string(),
            nav_active: "compare".to_string(),
            h1 { "Comparison" }
            p { class: "placeholder", "Sector and stock comparison charts are under construction." }
        }
    }
}

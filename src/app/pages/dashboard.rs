//! Dashboard page component.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// Sector dashboard landing page.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            nav_active: "dashboard".to_string(),
            h1 { "Sector Dashboard" }
            p { class: "placeholder", "Sector heatmap and market overview are under construction." }
        }
    }
}

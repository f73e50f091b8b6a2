//! Navigation header with theme toggle and mobile menu.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "dashboard", "compare")
    pub active: String,
}

/// Sticky header bar: brand, page links, theme toggle, GitHub link.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let nav_link_class = |page: &str| {
        if props.active == page {
            "nav-link active".to_string()
        } else {
            "nav-link".to_string()
        }
    };

    let mobile_menu_class = if menu_open() {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                // Brand
                Link { class: "brand", to: Route::Dashboard {}, "K-SectorRadar" }

                // Desktop navigation
                div { class: "nav-links",
                    Link { class: nav_link_class("dashboard"), to: Route::Dashboard {}, "Dashboard" }
                    Link { class: nav_link_class("compare"), to: Route::Comparison {}, "Comparison" }
                    Link { class: nav_link_class("settings"), to: Route::Settings {}, "Settings" }
                    ThemeToggle {}
                    a {
                        class: "nav-link",
                        href: "https://github.com",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "GitHub"
                    }
                }

                // Mobile menu button
                button {
                    class: "menu-button",
                    r#type: "button",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "sr-only", "Toggle menu" }
                    if menu_open() {
                        // X icon
                        svg { class: "icon", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
                        }
                    } else {
                        // Hamburger icon
                        svg { class: "icon", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                            path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
                        }
                    }
                }
            }

            // Mobile menu
            div { class: "{mobile_menu_class}", id: "mobile-menu",
                Link { class: nav_link_class("dashboard"), to: Route::Dashboard {}, onclick: move |_| menu_open.set(false), "Dashboard" }
                Link { class: nav_link_class("compare"), to: Route::Comparison {}, onclick: move |_| menu_open.set(false), "Comparison" }
                Link { class: nav_link_class("settings"), to: Route::Settings {}, onclick: move |_| menu_open.set(false), "Settings" }
            }
        }
    }
}

//! Shared hamburger navigation menu.
//!
//! The `hamburger` / `nav-links` class names and the `active` toggle are
//! the contract the site stylesheet keys on.

use dioxus::prelude::*;

/// The site's standard nav entries.
pub fn site_links() -> Vec<(String, String)> {
    vec![
        ("首頁".to_string(), "/".to_string()),
        ("數據儀表板".to_string(), "/dashboard".to_string()),
        ("立即諮詢".to_string(), "/chat".to_string()),
    ]
}

#[derive(Props, Clone, PartialEq)]
pub struct NavMenuProps {
    /// Nav entries as (label, href) pairs.
    pub links: Vec<(String, String)>,
}

#[component]
pub fn NavMenu(props: NavMenuProps) -> Element {
    let mut open = use_signal(|| false);
    let hamburger_class = if open() { "hamburger active" } else { "hamburger" };
    let links_class = if open() { "nav-links active" } else { "nav-links" };

    rsx! {
        nav {
            div {
                class: "{hamburger_class}",
                onclick: move |_| open.set(!open()),
                span {}
                span {}
                span {}
            }
            ul {
                class: "{links_class}",
                for (label, href) in props.links.iter() {
                    li {
                        key: "{href}",
                        a { href: "{href}", "{label}" }
                    }
                }
            }
        }
    }
}

//! Fraud awareness home page
//!
//! Pure presentation: a looping carousel of common fraud topics and a
//! clickable showcase of the site's features. The card strip is rendered
//! twice so the CSS animation wraps seamlessly, and the animation
//! duration scales with the card count so adding a card never changes
//! the scroll speed.

use dioxus::prelude::*;

use faw_ui::components::{site_links, NavMenu};

/// Card width plus horizontal margin, matching the stylesheet.
const CARD_WIDTH_PX: f64 = 330.0;
/// Carousel scroll speed.
const SCROLL_SPEED_PX_PER_S: f64 = 100.0;

/// Carousel topics: common fraud methods and a one-line warning sign.
const CARDS: &[(&str, &str)] = &[
    ("假投資詐騙", "保證獲利、穩賺不賠的投資群組，多半是詐騙。"),
    ("網路購物詐騙", "一頁式廣告、價格遠低於行情的賣場要提高警覺。"),
    ("假冒親友借錢", "換號碼、急著借錢的「親友」，先用原號碼確認。"),
    ("解除分期付款", "自稱客服要求操作 ATM 解除設定，一律是詐騙。"),
    ("假檢警詐騙", "檢警不會要求監管帳戶或交付存款。"),
    ("打工求職詐騙", "要求先繳費、交付帳戶的工作千萬別碰。"),
];

/// Feature showcase: (label, content key) pairs; the key binds the list
/// item to its `content-image` panel.
const FEATURES: &[(&str, &str)] = &[
    ("智慧問答", "chat"),
    ("縣市統計", "stats"),
    ("詐騙地圖", "map"),
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fraud-home-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        NavMenu { links: site_links() }
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            TopicCarousel {}
            FeatureShowcase {}
        }
    }
}

/// The looping topic carousel.
#[component]
fn TopicCarousel() -> Element {
    let duration_s = CARDS.len() as f64 * CARD_WIDTH_PX / SCROLL_SPEED_PX_PER_S;
    let strip_style = format!("animation-duration: {duration_s}s;");

    rsx! {
        div {
            style: "overflow: hidden;",
            div {
                class: "carousel",
                style: "{strip_style}",
                // Two copies of the strip; the animation wraps at the
                // first copy's end.
                for pass in 0..2 {
                    for (title, blurb) in CARDS.iter() {
                        div {
                            key: "{pass}-{title}",
                            class: "card",
                            h4 { "{title}" }
                            p { "{blurb}" }
                        }
                    }
                }
            }
        }
    }
}

/// Clickable feature list with one active content panel at a time.
#[component]
fn FeatureShowcase() -> Element {
    let mut active = use_signal(|| 0usize);

    rsx! {
        div {
            style: "display: flex; gap: 24px; margin-top: 32px;",
            ul {
                class: "interaction-list",
                for (i, (label, target)) in FEATURES.iter().enumerate() {
                    {
                        let item_class = if i == active() { "active" } else { "" };
                        rsx! {
                            li {
                                key: "{target}",
                                class: "{item_class}",
                                "data-target": "{target}",
                                onclick: move |_| active.set(i),
                                "{label}"
                            }
                        }
                    }
                }
            }
            div {
                for (i, (_, target)) in FEATURES.iter().enumerate() {
                    {
                        let panel_class = if i == active() {
                            "content-image active"
                        } else {
                            "content-image"
                        };
                        let image_src = format!("./static/img/{target}.png");
                        rsx! {
                            div {
                                key: "{target}",
                                class: "{panel_class}",
                                "data-content": "{target}",
                                img {
                                    src: "{image_src}",
                                    alt: "{target}",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

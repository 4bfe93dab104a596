//! Fraud Q&A chat widget
//!
//! Stateless per message: the user bubble is appended optimistically,
//! geolocation is attempted best-effort, and the question is POSTed to
//! the Q&A endpoint with coordinates when granted and without them
//! otherwise — the question always reaches the backend. A failed POST
//! appends the generic error bubble; the transcript only ever grows.

use dioxus::prelude::*;

use faw_api::{client, geolocation};
use faw_stats::payload::AskRequest;
use faw_ui::components::{site_links, NavMenu};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("fraud-chat-root"))
        .launch(App);
}

/// Who produced a transcript bubble.
#[derive(Clone, Copy, PartialEq)]
enum Sender {
    User,
    Bot,
}

/// One transcript bubble.
#[derive(Clone, PartialEq)]
struct ChatMessage {
    sender: Sender,
    body: String,
    timestamp: String,
}

/// zh-TW wall-clock timestamp for a bubble.
fn current_time() -> String {
    js_sys::Date::new_0().to_locale_time_string("zh-TW").into()
}

/// Keep the newest message in view.
fn scroll_chat_to_bottom() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(chatbox) = document.get_element_by_id("chatbox") {
        chatbox.set_scroll_top(chatbox.scroll_height());
    }
}

#[component]
fn App() -> Element {
    let mut messages: Signal<Vec<ChatMessage>> = use_signal(Vec::new);
    let mut input = use_signal(String::new);

    // Page-load location telemetry, fire-and-forget.
    use_effect(move || {
        spawn(async move {
            match geolocation::current_position().await {
                Ok((latitude, longitude)) => client::report_location(latitude, longitude),
                Err(reason) => log::warn!("page-load geolocation unavailable: {reason}"),
            }
        });
    });

    // Scroll after every transcript change.
    use_effect(move || {
        let _count = messages.read().len();
        scroll_chat_to_bottom();
    });

    let mut send_question = move || {
        let question = input.peek().trim().to_string();
        if question.is_empty() {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("請輸入問題！");
            }
            return;
        }
        input.set(String::new());
        messages.write().push(ChatMessage {
            sender: Sender::User,
            body: question.clone(),
            timestamp: current_time(),
        });

        spawn(async move {
            let request = match geolocation::current_position().await {
                Ok((latitude, longitude)) => {
                    AskRequest::with_location(question, latitude, longitude)
                }
                Err(reason) => {
                    // Denied or failed geolocation downgrades to a
                    // coordinate-less request, never a dropped question.
                    log::warn!("geolocation unavailable, sending without coordinates: {reason}");
                    AskRequest::without_location(question)
                }
            };

            let reply = match client::ask_question(&request).await {
                Ok(response) => ChatMessage {
                    sender: Sender::Bot,
                    body: response.answer,
                    timestamp: current_time(),
                },
                Err(e) => {
                    log::error!("ask request failed: {e}");
                    ChatMessage {
                        sender: Sender::Bot,
                        body: "⚠️ 發生錯誤".to_string(),
                        timestamp: current_time(),
                    }
                }
            };
            messages.write().push(reply);
        });
    };

    rsx! {
        NavMenu { links: site_links() }
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                id: "chatbox",
                class: "chatbox",
                style: "height: 480px; overflow-y: auto; padding: 12px; background: #f7f7f7; border-radius: 8px;",
                for (i, message) in messages.read().iter().enumerate() {
                    MessageBubble { key: "{i}", message: message.clone() }
                }
            }

            div {
                style: "display: flex; gap: 8px; margin-top: 12px;",
                input {
                    id: "questionInput",
                    r#type: "text",
                    placeholder: "請輸入您的問題...",
                    style: "flex: 1; padding: 8px 12px; border: 1px solid #ccc; border-radius: 8px;",
                    value: "{input}",
                    oninput: move |e| input.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            send_question();
                        }
                    },
                }
                button {
                    style: "padding: 8px 20px; background: #009999; color: #fff; border: none; border-radius: 8px; cursor: pointer;",
                    onclick: move |_| send_question(),
                    "送出"
                }
            }
        }
    }
}

/// One chat bubble. Newlines in the body render as line breaks.
#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let class = match message.sender {
        Sender::User => "msg user",
        Sender::Bot => "msg bot",
    };

    rsx! {
        div {
            class: "{class}",
            if message.sender == Sender::Bot {
                div { class: "avatar" }
            }
            div {
                class: "bubble",
                for (i, line) in message.body.lines().enumerate() {
                    if i > 0 {
                        br {}
                    }
                    "{line}"
                }
            }
            div { class: "timestamp", "{message.timestamp}" }
            if message.sender == Sender::User {
                div { class: "read-receipt", "已讀" }
            }
        }
    }
}

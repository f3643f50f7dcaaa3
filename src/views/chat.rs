use crate::lifecycle::use_scope_token;
use crate::types::{ChatMessage, Role};
use crate::views::shared::{copy_to_clipboard, download_conversation, format_message_timestamp};
use dioxus::prelude::*;
use std::time::Duration;

const COPIED_HIGHLIGHT: Duration = Duration::from_secs(2);

#[component]
pub fn ChatOutput(messages: Vec<ChatMessage>, loading: bool, on_clear: EventHandler<()>) -> Element {
    let token = use_scope_token();
    let mut copied_index = use_signal(|| Option::<usize>::None);

    let on_copy = EventHandler::new(move |(index, text): (usize, String)| {
        if let Err(err) = copy_to_clipboard(text) {
            tracing::error!("Failed to copy text: {err}");
            return;
        }
        copied_index.set(Some(index));
        let token = token.clone();
        spawn(async move {
            tokio::time::sleep(COPIED_HIGHLIGHT).await;
            token.guard(|| {
                if copied_index() == Some(index) {
                    copied_index.set(None);
                }
            });
        });
    });

    let export = messages.clone();
    let on_download = move |_| match download_conversation(&export) {
        Ok(path) => tracing::info!(path = %path.display(), "conversation downloaded"),
        Err(err) => tracing::error!("Failed to download conversation: {err}"),
    };

    let copied = copied_index();

    rsx! {
        div { class: "chat-output",
            div { class: "chat-toolbar",
                h3 { class: "section-title", "Conversation" }
                if !messages.is_empty() {
                    div { class: "hstack",
                        button {
                            class: "btn btn-outline btn-sm",
                            r#type: "button",
                            onclick: move |_| on_clear.call(()),
                            "Clear"
                        }
                        button {
                            class: "btn btn-outline btn-sm",
                            r#type: "button",
                            onclick: on_download,
                            "Download"
                        }
                    }
                }
            }
            div { id: "chat-list", class: "chat-list",
                if messages.is_empty() {
                    div { class: "chat-empty",
                        p { class: "text-muted", "No messages yet. Start a conversation to see responses here." }
                    }
                } else {
                    for (i, msg) in messages.iter().enumerate() {
                        ChatBubble {
                            key: "{msg.id}",
                            message: msg.clone(),
                            highlighted: copied == Some(i),
                            on_copy: move |text: String| on_copy.call((i, text)),
                        }
                    }
                }
                if loading {
                    div { class: "thinking",
                        div { class: "thinking-dots",
                            span { class: "dot" }
                            span { class: "dot" }
                            span { class: "dot" }
                        }
                        span { class: "text-muted", "AI is thinking..." }
                    }
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage, highlighted: bool, on_copy: EventHandler<String>) -> Element {
    let role = message.role;
    let row_class = match role {
        Role::User => "message-row user",
        Role::Assistant | Role::System => "message-row assistant",
    };
    let highlight = if highlighted { "copied" } else { "" };
    let stamp = format_message_timestamp(message.timestamp);
    let payload = message.content.clone();

    rsx! {
        div { class: row_class,
            div { class: format_args!("bubble {} {}", role.css_class(), highlight),
                div { class: "bubble-header",
                    span { class: "bubble-author", "{role.label()}" }
                    span { class: "message-timestamp", "{stamp}" }
                }
                div { class: "bubble-body", "{message.content}" }
                div { class: "bubble-controls",
                    button {
                        class: "action-btn",
                        aria_label: "Copy message",
                        onclick: move |_| on_copy.call(payload.clone()),
                        "Copy"
                    }
                }
            }
        }
    }
}

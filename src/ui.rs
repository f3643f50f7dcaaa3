use crate::api::Catalog;
use crate::config::AppConfig;
use crate::lifecycle::use_scope_token;
use crate::state::{ChatSession, ValueSource};
use crate::theme::theme_definition;
use crate::types::{AIModel, ModelParameters, PartialParameters, ThemeMode};
use crate::views::shared::current_time;
use crate::views::{ChatOutput, ModelSelector, ParametersPanel, PromptEditor};
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| Catalog::from_config(&config));

    let theme = use_signal(|| config.theme);

    rsx! {
        ThemeStyles { theme }
        main { class: "page",
            AppHeader { theme }
            Workspace { reply_latency_ms: config.reply_latency.as_millis() as u64 }
            footer { class: "page-footer",
                p { "AI Interface Prototype - Built with Rust and Dioxus" }
            }
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let definition = theme_definition(theme());
    rsx! {
        header { class: "header",
            h1 { class: "header-title", "AI Interface Prototype" }
            button {
                class: "btn btn-outline",
                r#type: "button",
                onclick: move |_| {
                    let next = theme().toggled();
                    tracing::debug!(?next, "theme toggled");
                    theme.set(next);
                },
                "{definition.toggle_label}"
            }
        }
    }
}

/// Wires selector, editor, parameters and transcript together and simulates
/// the model round trip.
#[component]
fn Workspace(reply_latency_ms: u64) -> Element {
    let token = use_scope_token();
    let mut selected_model = use_signal(|| Option::<AIModel>::None);
    let mut prompt = use_signal(String::new);
    let mut parameters = use_signal(ModelParameters::default);
    let mut session = use_signal(ChatSession::new);
    let initial_parameters = use_hook(|| PartialParameters::from(*parameters.peek()));

    let submit = move |_| {
        let text = prompt();
        let model = selected_model();
        let params = parameters();
        let Some(reply) =
            session.with_mut(|s| s.submit(&text, model.as_ref(), &params, current_time()))
        else {
            return;
        };
        prompt.set(String::new());

        let token = token.clone();
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(reply_latency_ms)).await;
            token.guard(|| session.with_mut(|s| s.complete(reply, current_time())));
        });
    };

    let snapshot = session();
    let can_send = snapshot.can_submit(&prompt(), selected_model().as_ref());

    rsx! {
        div { class: "workspace",
            div { class: "workspace-main",
                div { class: "card",
                    ModelSelector { on_select: move |model: AIModel| selected_model.set(Some(model)) }
                }
                div { class: "card",
                    PromptEditor {
                        value: ValueSource::External(prompt()),
                        on_change: move |text: String| prompt.set(text),
                    }
                    div { class: "send-row",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: !can_send,
                            onclick: submit,
                            "Send"
                        }
                    }
                }
                div { class: "card card-chat",
                    ChatOutput {
                        messages: snapshot.messages().to_vec(),
                        loading: snapshot.is_pending(),
                        on_clear: move |_| {
                            tracing::info!("conversation cleared");
                            session.with_mut(|s| s.clear());
                        },
                    }
                }
            }
            div { class: "card workspace-side",
                ParametersPanel {
                    model: selected_model(),
                    on_change: move |next: ModelParameters| parameters.set(next),
                    initial_parameters,
                }
            }
        }
    }
}

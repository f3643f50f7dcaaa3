use crate::api::Catalog;
use crate::lifecycle::use_scope_token;
use crate::state::{LoadState, ModelMenu};
use crate::types::AIModel;
use dioxus::prelude::*;

#[component]
pub fn ModelSelector(on_select: EventHandler<AIModel>, selected_model_id: Option<String>) -> Element {
    let catalog = use_context::<Catalog>();
    let token = use_scope_token();
    let mut state = use_signal(|| LoadState::<ModelMenu>::Loading);

    use_hook(move || {
        spawn(async move {
            let result = catalog.models().await;
            token.guard(|| match result {
                Ok(models) => {
                    tracing::info!(count = models.len(), "models loaded");
                    let menu = ModelMenu::resolve(models, selected_model_id.as_deref());
                    let default = menu.selected().cloned();
                    state.set(LoadState::Ready(menu));
                    if let Some(model) = default {
                        on_select.call(model);
                    }
                }
                Err(err) => {
                    tracing::error!("model catalog failed: {err}");
                    state.set(LoadState::Failed(err.to_string()));
                }
            });
        })
    });

    let choose = move |id: String| {
        let chosen = state.with_mut(|load| match load {
            LoadState::Ready(menu) => menu.choose(&id),
            _ => None,
        });
        if let Some(model) = chosen {
            tracing::info!(model = %model.id, "model selected");
            on_select.call(model);
        }
    };

    let menu = match state() {
        LoadState::Loading => {
            return rsx! {
                div { class: "model-selector",
                    div { class: "selector-placeholder", div { class: "placeholder-bar" } }
                }
            };
        }
        LoadState::Failed(message) => {
            return rsx! {
                div { class: "model-selector",
                    div { class: "selector-error", "Error: {message}" }
                }
            };
        }
        LoadState::Ready(menu) => menu,
    };

    let is_open = menu.is_open();
    let arrow_class = if is_open { "selector-arrow open" } else { "selector-arrow" };

    rsx! {
        div { class: "model-selector",
            button {
                class: "selector-button",
                r#type: "button",
                aria_haspopup: "listbox",
                aria_expanded: "{is_open}",
                onclick: move |_| {
                    state.with_mut(|load| {
                        if let LoadState::Ready(menu) = load {
                            menu.toggle();
                        }
                    });
                },
                div { class: "selector-current",
                    if let Some(model) = menu.selected() {
                        span { class: "selector-name", "{model.name}" }
                        span { class: "selector-provider", "{model.provider}" }
                    }
                }
                span { class: arrow_class, "▾" }
            }
            if is_open {
                div {
                    class: "dropdown-backdrop",
                    onclick: move |_| {
                        state.with_mut(|load| {
                            if let LoadState::Ready(menu) = load {
                                menu.dismiss();
                            }
                        });
                    },
                }
                ul { class: "selector-list", role: "listbox",
                    for model in menu.models().iter() {
                        ModelOption {
                            key: "{model.id}",
                            selected: menu.is_selected(&model.id),
                            model: model.clone(),
                            on_choose: choose,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ModelOption(model: AIModel, selected: bool, on_choose: EventHandler<String>) -> Element {
    let class = if selected {
        "selector-option selected"
    } else {
        "selector-option"
    };
    let id = model.id.clone();
    rsx! {
        li {
            class,
            role: "option",
            aria_selected: "{selected}",
            onclick: move |_| on_choose.call(id.clone()),
            span { class: "selector-name", "{model.name}" }
            span { class: "selector-provider", "{model.provider}" }
            span { class: "selector-description", "{model.description}" }
        }
    }
}

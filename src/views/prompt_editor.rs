use crate::api::Catalog;
use crate::lifecycle::use_scope_token;
use crate::state::editor::LibraryStatus;
use crate::state::{ModalSize, TemplateDraft, TemplateLibrary, ValueSource, can_save_prompt};
use crate::types::PromptTemplate;
use crate::views::modal::Modal;
use crate::views::shared::{current_time, format_template_date};
use dioxus::prelude::*;

#[component]
pub fn PromptEditor(value: ValueSource<String>, on_change: EventHandler<String>) -> Element {
    let catalog = use_context::<Catalog>();
    let token = use_scope_token();
    let mut text = use_signal(|| value.seed());
    let mut library = use_signal(TemplateLibrary::default);
    let mut load_open = use_signal(|| false);
    let mut save_open = use_signal(|| false);
    let mut draft = use_signal(TemplateDraft::default);

    use_hook(move || {
        spawn(async move {
            let result = catalog.templates().await;
            token.guard(|| match result {
                Ok(templates) => {
                    tracing::info!(count = templates.len(), "templates loaded");
                    library.with_mut(|lib| lib.loaded(templates));
                }
                Err(err) => {
                    tracing::error!("template catalog failed: {err}");
                    library.with_mut(|lib| lib.failed(err.to_string()));
                }
            });
        })
    });

    let current = value.resolve(&text());
    let update = {
        let value = value.clone();
        move |next: String| {
            text.with_mut(|slot| value.commit(slot, next.clone()));
            on_change.call(next);
        }
    };

    let on_pick = {
        let mut update = update.clone();
        move |template: PromptTemplate| {
            tracing::info!(template = %template.id, "template loaded into editor");
            update(template.content);
            load_open.set(false);
        }
    };

    let confirm_save = {
        let content = current.clone();
        move |_| {
            let form = draft();
            if !form.can_confirm() {
                return;
            }
            library.with_mut(|lib| {
                let template = form.into_template(&content, lib.templates(), current_time());
                tracing::info!(template = %template.id, "template saved for this session");
                lib.add(template);
            });
            save_open.set(false);
            draft.set(TemplateDraft::default());
        }
    };

    let lib = library();
    let form = draft();
    let load_body = match lib.status() {
        LibraryStatus::Loading => rsx! {
            div { class: "spinner-wrap", div { class: "spinner" } }
        },
        LibraryStatus::Failed(message) => rsx! {
            div { class: "text-error", "{message}" }
        },
        LibraryStatus::Ready => rsx! {
            div { class: "template-grid",
                for template in lib.templates().iter() {
                    TemplateCard {
                        key: "{template.id}",
                        template: template.clone(),
                        on_pick: on_pick.clone(),
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "prompt-editor",
            div { class: "editor-toolbar",
                label { r#for: "prompt-editor", class: "field-label", "Prompt Editor" }
                div { class: "hstack",
                    button {
                        class: "btn btn-outline btn-sm",
                        r#type: "button",
                        disabled: lib.is_loading(),
                        onclick: move |_| load_open.set(true),
                        "Load Template"
                    }
                    button {
                        class: "btn btn-outline btn-sm",
                        r#type: "button",
                        disabled: !can_save_prompt(&current),
                        onclick: move |_| save_open.set(true),
                        "Save Template"
                    }
                }
            }
            textarea {
                id: "prompt-editor",
                class: "editor-input",
                aria_label: "Prompt editor",
                placeholder: "Enter your prompt here...",
                value: "{current}",
                oninput: {
                    let mut update = update.clone();
                    move |evt: FormEvent| update(evt.value())
                },
            }

            Modal {
                is_open: load_open(),
                on_close: move |_| load_open.set(false),
                title: "Load Template",
                size: ModalSize::Lg,
                {load_body}
            }

            Modal {
                is_open: save_open(),
                on_close: move |_| save_open.set(false),
                title: "Save Template",
                size: ModalSize::Md,
                footer: rsx! {
                    div { class: "modal-actions",
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: move |_| save_open.set(false),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: !form.can_confirm(),
                            onclick: confirm_save,
                            "Save"
                        }
                    }
                },
                div { class: "form-stack",
                    div {
                        label { r#for: "template-name", class: "field-label", "Template Name" }
                        input {
                            r#type: "text",
                            id: "template-name",
                            class: "text-input",
                            placeholder: "Enter template name",
                            value: "{form.name}",
                            oninput: move |evt| draft.with_mut(|d| d.name = evt.value()),
                        }
                    }
                    div {
                        label { r#for: "template-description", class: "field-label", "Description" }
                        textarea {
                            id: "template-description",
                            class: "text-input",
                            placeholder: "Enter template description",
                            rows: "3",
                            value: "{form.description}",
                            oninput: move |evt| draft.with_mut(|d| d.description = evt.value()),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TemplateCard(template: PromptTemplate, on_pick: EventHandler<PromptTemplate>) -> Element {
    let updated = format_template_date(template.updated_at);
    let picked = template.clone();
    rsx! {
        div {
            class: "template-card",
            onclick: move |_| on_pick.call(picked.clone()),
            h3 { class: "template-name", "{template.name}" }
            p { class: "text-muted", "{template.description}" }
            p { class: "template-meta", "Last updated: {updated}" }
        }
    }
}

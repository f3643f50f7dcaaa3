use crate::state::{DismissPolicy, ModalInteraction, ModalSize, ScrollLock};
use crate::views::shared::DocumentBody;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Overlay dialog. Nothing is mounted while `is_open` is false.
#[component]
pub fn Modal(
    is_open: bool,
    on_close: EventHandler<()>,
    title: String,
    children: Element,
    footer: Option<Element>,
    #[props(default)] size: ModalSize,
    #[props(default = true)] close_on_esc: bool,
    #[props(default = true)] close_on_outside_click: bool,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let policy = DismissPolicy {
        close_on_esc,
        close_on_outside_click,
    };
    rsx! {
        ModalDialog {
            on_close,
            title,
            footer,
            size,
            policy,
            {children}
        }
    }
}

#[component]
fn ModalDialog(
    on_close: EventHandler<()>,
    title: String,
    children: Element,
    #[props(!optional)] footer: Option<Element>,
    size: ModalSize,
    policy: DismissPolicy,
) -> Element {
    let scroll_lock = use_hook(|| Rc::new(RefCell::new(Some(ScrollLock::engage(DocumentBody)))));
    use_drop(move || {
        scroll_lock.borrow_mut().take();
    });

    let dispatch = move |interaction: ModalInteraction| {
        if policy.should_close(&interaction) {
            on_close.call(());
        }
    };

    let footer = footer.map(|content| {
        rsx! {
            div { class: "modal-footer", {content} }
        }
    });

    rsx! {
        div {
            class: "modal-overlay",
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: "modal-title",
            tabindex: "-1",
            onmounted: move |evt| async move {
                if let Err(err) = evt.set_focus(true).await {
                    tracing::debug!("could not focus dialog: {err:?}");
                }
            },
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    dispatch(ModalInteraction::EscapeKey);
                } else {
                    dispatch(ModalInteraction::OtherKey);
                }
            },
            onclick: move |_| dispatch(ModalInteraction::OverlayClick),
            div {
                class: size.css_class(),
                style: "max-width: {size.max_width()};",
                onclick: move |evt| {
                    evt.stop_propagation();
                    dispatch(ModalInteraction::PanelClick);
                },
                div { class: "modal-header",
                    h2 { id: "modal-title", class: "modal-title", "{title}" }
                    button {
                        class: "btn btn-ghost modal-close",
                        r#type: "button",
                        aria_label: "Close modal",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            dispatch(ModalInteraction::CloseButton);
                        },
                        "✕"
                    }
                }
                div { class: "modal-body", {children} }
                {footer}
            }
        }
    }
}

use crate::state::{SliderRange, ValueSource, parse_slider_input, slider_id};
use dioxus::prelude::*;

#[component]
pub fn Slider(
    range: SliderRange,
    value: ValueSource<f64>,
    on_change: EventHandler<f64>,
    label: Option<String>,
    #[props(default = true)] show_value: bool,
    id: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut local = use_signal(|| value.seed());
    let external = use_hook(|| value.is_external());
    if external != value.is_external() {
        tracing::warn!(
            label = label.as_deref().unwrap_or_default(),
            "slider switched value source after mount"
        );
    }

    let current = value.resolve(&local());
    let percentage = range.fill_percent(current);
    let display = range.format(current);
    let element_id = slider_id(id.as_deref(), label.as_deref());
    let aria_label = label.clone().unwrap_or_else(|| "Slider".to_string());

    rsx! {
        div { class: "slider",
            if let Some(text) = label.as_ref() {
                div { class: "slider-header",
                    label { r#for: "{element_id}", class: "slider-label", "{text}" }
                    if show_value {
                        span { class: "slider-value", "{display}" }
                    }
                }
            }
            div { class: "slider-control",
                div { class: "slider-track" }
                div { class: "slider-fill", style: "width: {percentage}%;" }
                input {
                    r#type: "range",
                    id: "{element_id}",
                    min: "{range.min}",
                    max: "{range.max}",
                    step: "{range.step}",
                    value: "{current}",
                    disabled,
                    aria_label: "{aria_label}",
                    aria_valuemin: "{range.min}",
                    aria_valuemax: "{range.max}",
                    aria_valuenow: "{current}",
                    oninput: move |evt| {
                        let raw = evt.value();
                        let Some(next) = parse_slider_input(&raw) else {
                            tracing::warn!(%raw, "ignoring unparseable slider input");
                            return;
                        };
                        local.with_mut(|slot| value.commit(slot, next));
                        on_change.call(next);
                    },
                }
            }
        }
    }
}

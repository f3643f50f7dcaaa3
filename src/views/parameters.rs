use crate::state::{ParameterField, ValueSource};
use crate::types::{AIModel, ModelParameters, PartialParameters};
use crate::views::slider::Slider;
use dioxus::prelude::*;

/// Five sliders folded into one [`ModelParameters`] record. The full record
/// is reported on every change, including the model-driven rebase.
#[component]
pub fn ParametersPanel(
    model: ReadOnlySignal<Option<AIModel>>,
    on_change: EventHandler<ModelParameters>,
    initial_parameters: Option<PartialParameters>,
) -> Element {
    let mut params = use_signal(|| {
        let seed_model = model.peek().clone();
        ModelParameters::seeded(initial_parameters.unwrap_or_default(), seed_model.as_ref())
    });

    use_effect(move || {
        if let Some(active) = model() {
            tracing::debug!(model = %active.id, "rebasing parameters");
            params.with_mut(|p| p.rebase_on(&active));
        }
    });

    use_effect(move || on_change.call(params()));

    let active = model();
    let current = params();

    rsx! {
        div { class: "parameters-panel",
            h3 { class: "section-title", "Model Parameters" }
            div { class: "slider-stack",
                for field in ParameterField::ALL {
                    Slider {
                        key: "{field.label()}",
                        label: field.label().to_string(),
                        range: field.range(active.as_ref()),
                        value: ValueSource::External(current.get(field)),
                        on_change: move |next: f64| {
                            let ceiling = model.peek().clone();
                            params.with_mut(|p| p.set(field, next, ceiling.as_ref()));
                        },
                    }
                }
            }
            div { class: "parameter-legend",
                h4 { class: "legend-title", "Parameter Descriptions" }
                ul {
                    for field in ParameterField::ALL {
                        li {
                            strong { "{field.label()}:" }
                            " {field.description()}"
                        }
                    }
                }
            }
        }
    }
}

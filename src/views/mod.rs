pub mod chat;
pub mod modal;
pub mod model_selector;
pub mod parameters;
pub mod prompt_editor;
pub mod shared;
pub mod slider;

pub use chat::ChatOutput;
pub use modal::Modal;
pub use model_selector::ModelSelector;
pub use parameters::ParametersPanel;
pub use prompt_editor::PromptEditor;
pub use slider::Slider;

/// Drives a headless dom until spawned tasks and effects go quiet.
#[cfg(test)]
pub(crate) async fn settle(dom: &mut dioxus::prelude::VirtualDom) {
    use dioxus::dioxus_core::NoOpMutations;

    for _ in 0..8 {
        let pending =
            tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work()).await;
        if pending.is_err() {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

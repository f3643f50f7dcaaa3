//! Renderer-independent state behind the views.
//!
//! Components in `views` hold these values in signals and call into them from
//! event handlers, so every rule about clamping, selection or message order
//! lives here and is tested without a UI runtime.
pub mod editor;
pub mod modal;
pub mod parameters;
pub mod selector;
pub mod session;
pub mod slider;
pub mod transcript;
pub mod value_source;

pub use editor::{TemplateDraft, TemplateLibrary, can_save_prompt};
pub use modal::{DismissPolicy, ModalInteraction, ModalSize, ScrollHost, ScrollLock};
pub use parameters::ParameterField;
pub use selector::{LoadState, ModelMenu};
pub use session::{ChatSession, PendingReply};
pub use slider::{SliderRange, parse_slider_input, slider_id};
pub use value_source::ValueSource;

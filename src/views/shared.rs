use crate::state::ScrollHost;
use crate::state::transcript;
use crate::types::ChatMessage;
use dioxus::prelude::*;
use std::path::PathBuf;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[hour repr:12 padding:zero]:[minute padding:zero]:[second padding:zero] [period case:upper]"
);
const TEMPLATE_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard is not supported on this platform")]
    Unsupported,
}

pub fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

fn to_local(datetime: OffsetDateTime) -> OffsetDateTime {
    match UtcOffset::current_local_offset() {
        Ok(offset) => datetime.to_offset(offset),
        Err(_) => datetime,
    }
}

pub fn format_message_timestamp(timestamp: OffsetDateTime) -> String {
    to_local(timestamp)
        .format(MESSAGE_TIME_FORMAT)
        .unwrap_or_default()
}

pub fn format_template_date(timestamp: OffsetDateTime) -> String {
    to_local(timestamp)
        .format(TEMPLATE_DATE_FORMAT)
        .unwrap_or_default()
}

pub fn copy_to_clipboard(text: String) -> Result<(), ClipboardError> {
    #[cfg(any(feature = "desktop", feature = "mobile"))]
    {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))
    }
    #[cfg(not(any(feature = "desktop", feature = "mobile")))]
    {
        let _ = text;
        Err(ClipboardError::Unsupported)
    }
}

/// Writes the transcript into the user's download directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn download_conversation(messages: &[ChatMessage]) -> std::io::Result<PathBuf> {
    let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
    transcript::write_export(&dir, messages, to_local(current_time()).date())
}

#[cfg(target_arch = "wasm32")]
pub fn download_conversation(_messages: &[ChatMessage]) -> std::io::Result<PathBuf> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "downloads are not available in the browser build",
    ))
}

/// The document body of the running webview.
pub struct DocumentBody;

impl ScrollHost for DocumentBody {
    fn set_scroll_locked(&self, locked: bool) {
        let overflow = if locked { "hidden" } else { "unset" };
        document::eval(&format!("document.body.style.overflow = '{overflow}';"));
    }
}

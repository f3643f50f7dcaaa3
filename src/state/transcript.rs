use crate::types::{ChatMessage, Role};
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

const EXPORT_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

fn export_role(role: Role) -> &'static str {
    match role {
        Role::User => "USER",
        Role::Assistant => "ASSISTANT",
        Role::System => "SYSTEM",
    }
}

/// Plain-text rendering used by the Download button.
pub fn export_conversation(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}", export_role(msg.role), msg.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn export_file_name(date: Date) -> String {
    let stamp = date
        .format(EXPORT_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string());
    format!("conversation-{stamp}.txt")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_export(
    dir: &std::path::Path,
    messages: &[ChatMessage],
    date: Date,
) -> std::io::Result<std::path::PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(date));
    std::fs::write(&path, export_conversation(messages))?;
    Ok(path)
}

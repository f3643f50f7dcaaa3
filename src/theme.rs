use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_label: "Dark Mode",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_label: "Light Mode",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f9fafb;
    --color-bg-card: #ffffff;
    --color-bg-overlay: rgba(0, 0, 0, 0.5);
    --color-text-primary: #111827;
    --color-text-muted: #6b7280;
    --color-border: #e5e7eb;
    --color-input-border: #d1d5db;
    --color-input-bg: #ffffff;
    --color-surface-muted: #f3f4f6;
    --color-accent: #2563eb;
    --color-accent-soft: #eff6ff;
    --color-track: #e5e7eb;
    --color-chat-user-bg: #2563eb;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #f3f4f6;
    --color-chat-assistant-text: #1f2937;
    --color-chat-system-bg: #d1d5db;
    --color-error-bg: #fef2f2;
    --color-error-text: #991b1b;
    --color-error-border: #fca5a5;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #111827;
    --color-bg-card: #1f2937;
    --color-bg-overlay: rgba(0, 0, 0, 0.6);
    --color-text-primary: #f9fafb;
    --color-text-muted: #9ca3af;
    --color-border: #374151;
    --color-input-border: #4b5563;
    --color-input-bg: #1f2937;
    --color-surface-muted: #374151;
    --color-accent: #3b82f6;
    --color-accent-soft: #1e3a8a;
    --color-track: #374151;
    --color-chat-user-bg: #2563eb;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #1f2937;
    --color-chat-assistant-text: #e5e7eb;
    --color-chat-system-bg: #374151;
    --color-error-bg: #7f1d1d;
    --color-error-text: #fecaca;
    --color-error-border: #991b1b;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert_eq!(theme_definition(ThemeMode::Light).toggle_label, "Dark Mode");
        assert_eq!(theme_definition(ThemeMode::Dark).toggle_label, "Light Mode");
    }
}

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "AI Assistant",
            Role::System => "System",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AIModel {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub description: String,
    pub max_tokens: u32,
    pub default_temperature: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    pub content: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelParameters {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

/// Caller-supplied seed for [`ModelParameters`]; absent fields take defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialParameters {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f64>,
    pub frequency_penalty: Option<f64>,
    pub presence_penalty: Option<f64>,
}

impl From<ModelParameters> for PartialParameters {
    fn from(params: ModelParameters) -> Self {
        Self {
            temperature: Some(params.temperature),
            max_tokens: Some(params.max_tokens),
            top_p: Some(params.top_p),
            frequency_penalty: Some(params.frequency_penalty),
            presence_penalty: Some(params.presence_penalty),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_uses_camel_case_fields() {
        let raw = r#"{
            "id": "gpt-4",
            "name": "GPT-4",
            "provider": "OpenAI",
            "description": "Advanced reasoning and comprehension",
            "maxTokens": 8192,
            "defaultTemperature": 0.7
        }"#;
        let model: AIModel = serde_json::from_str(raw).unwrap();
        assert_eq!(model.max_tokens, 8192);
        assert_eq!(model.default_temperature, 0.7);
    }

    #[test]
    fn template_timestamps_parse_as_rfc3339() {
        let raw = r#"{
            "id": "1",
            "name": "General Assistant",
            "content": "{{input}}",
            "description": "Default",
            "createdAt": "2023-01-15T10:30:00Z",
            "updatedAt": "2023-03-05T09:45:00Z"
        }"#;
        let template: PromptTemplate = serde_json::from_str(raw).unwrap();
        assert_eq!(template.created_at.year(), 2023);
        assert!(template.updated_at > template.created_at);
    }

    #[test]
    fn theme_toggle_flips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}

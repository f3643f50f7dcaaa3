use crate::types::{AIModel, PromptTemplate};
use once_cell::sync::Lazy;
use time::macros::datetime;

static MODELS: Lazy<Vec<AIModel>> = Lazy::new(|| {
    vec![
        model(
            "gpt-3.5",
            "GPT-3.5",
            "OpenAI",
            "Fast and efficient for most tasks",
            4096,
            0.7,
        ),
        model(
            "gpt-4",
            "GPT-4",
            "OpenAI",
            "Advanced reasoning and comprehension",
            8192,
            0.7,
        ),
        model(
            "claude-2",
            "Claude 2",
            "Anthropic",
            "Balanced performance with nuanced understanding",
            100_000,
            0.5,
        ),
        model(
            "llama-2",
            "Llama 2",
            "Meta",
            "Open-source model with strong capabilities",
            4096,
            0.6,
        ),
        model(
            "mistral-7b",
            "Mistral 7B",
            "Mistral AI",
            "Efficient open-source model with good performance",
            8192,
            0.7,
        ),
    ]
});

static TEMPLATES: Lazy<Vec<PromptTemplate>> = Lazy::new(|| {
    vec![
        PromptTemplate {
            id: "1".into(),
            name: "General Assistant".into(),
            content: "You are a helpful, friendly AI assistant. Answer the following question: {{input}}".into(),
            description: "Default assistant template for general questions".into(),
            created_at: datetime!(2023-01-15 10:30:00 UTC),
            updated_at: datetime!(2023-01-15 10:30:00 UTC),
        },
        PromptTemplate {
            id: "2".into(),
            name: "Code Explainer".into(),
            content: "Explain the following code in simple terms:\n```\n{{input}}\n```".into(),
            description: "Helps understand code snippets with clear explanations".into(),
            created_at: datetime!(2023-02-20 14:15:00 UTC),
            updated_at: datetime!(2023-03-05 09:45:00 UTC),
        },
        PromptTemplate {
            id: "3".into(),
            name: "Creative Writer".into(),
            content: "Write a creative short story about {{input}}. Make it engaging and approximately 300 words.".into(),
            description: "Generates creative short stories based on a topic".into(),
            created_at: datetime!(2023-03-10 16:20:00 UTC),
            updated_at: datetime!(2023-03-10 16:20:00 UTC),
        },
        PromptTemplate {
            id: "4".into(),
            name: "Data Analyst".into(),
            content: "Analyze the following data and provide insights:\n{{input}}".into(),
            description: "Helps analyze data and extract meaningful insights".into(),
            created_at: datetime!(2023-04-05 11:10:00 UTC),
            updated_at: datetime!(2023-04-25 13:40:00 UTC),
        },
        PromptTemplate {
            id: "5".into(),
            name: "Email Composer".into(),
            content: "Write a professional email for the following purpose:\n{{input}}".into(),
            description: "Creates professional email drafts for various purposes".into(),
            created_at: datetime!(2023-05-12 08:30:00 UTC),
            updated_at: datetime!(2023-05-12 08:30:00 UTC),
        },
    ]
});

fn model(
    id: &str,
    name: &str,
    provider: &str,
    description: &str,
    max_tokens: u32,
    default_temperature: f64,
) -> AIModel {
    AIModel {
        id: id.to_string(),
        name: name.to_string(),
        provider: provider.to_string(),
        description: description.to_string(),
        max_tokens,
        default_temperature,
    }
}

pub fn builtin_models() -> &'static [AIModel] {
    &MODELS
}

pub fn builtin_templates() -> &'static [PromptTemplate] {
    &TEMPLATES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn model_ids_are_unique() {
        let ids: HashSet<_> = builtin_models().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), builtin_models().len());
    }

    #[test]
    fn models_have_positive_token_ceilings() {
        assert!(builtin_models().iter().all(|m| m.max_tokens > 0));
    }

    #[test]
    fn templates_carry_input_placeholder() {
        assert_eq!(builtin_templates().len(), 5);
        assert!(
            builtin_templates()
                .iter()
                .all(|t| t.content.contains("{{input}}"))
        );
    }
}

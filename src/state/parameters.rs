use crate::state::SliderRange;
use crate::types::{AIModel, ModelParameters, PartialParameters};

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TOP_P: f64 = 1.0;
/// Max Tokens slider ceiling while no model is selected.
pub const FALLBACK_TOKEN_CEILING: u32 = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterField {
    Temperature,
    MaxTokens,
    TopP,
    FrequencyPenalty,
    PresencePenalty,
}

impl ParameterField {
    pub const ALL: [ParameterField; 5] = [
        ParameterField::Temperature,
        ParameterField::MaxTokens,
        ParameterField::TopP,
        ParameterField::FrequencyPenalty,
        ParameterField::PresencePenalty,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParameterField::Temperature => "Temperature",
            ParameterField::MaxTokens => "Max Tokens",
            ParameterField::TopP => "Top P",
            ParameterField::FrequencyPenalty => "Frequency Penalty",
            ParameterField::PresencePenalty => "Presence Penalty",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ParameterField::Temperature => {
                "Controls randomness. Lower values make responses more focused and deterministic."
            }
            ParameterField::MaxTokens => "Maximum length of the generated response.",
            ParameterField::TopP => {
                "Controls diversity via nucleus sampling. Lower values make responses more focused."
            }
            ParameterField::FrequencyPenalty => {
                "Reduces repetition of token sequences by penalizing based on frequency."
            }
            ParameterField::PresencePenalty => {
                "Reduces repetition by penalizing tokens that have already appeared."
            }
        }
    }

    pub fn range(self, model: Option<&AIModel>) -> SliderRange {
        match self {
            ParameterField::Temperature
            | ParameterField::FrequencyPenalty
            | ParameterField::PresencePenalty => SliderRange::new(0.0, 2.0).with_step(0.01),
            ParameterField::TopP => SliderRange::new(0.0, 1.0).with_step(0.01),
            ParameterField::MaxTokens => {
                let ceiling = model.map_or(FALLBACK_TOKEN_CEILING, |m| m.max_tokens);
                SliderRange::new(1.0, f64::from(ceiling)).with_step(1.0)
            }
        }
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self::seeded(PartialParameters::default(), None)
    }
}

impl ModelParameters {
    pub fn seeded(initial: PartialParameters, model: Option<&AIModel>) -> Self {
        Self {
            temperature: initial.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: initial
                .max_tokens
                .or_else(|| model.map(|m| m.max_tokens))
                .unwrap_or(DEFAULT_MAX_TOKENS)
                .max(1),
            top_p: initial.top_p.unwrap_or(DEFAULT_TOP_P),
            frequency_penalty: initial.frequency_penalty.unwrap_or(0.0),
            presence_penalty: initial.presence_penalty.unwrap_or(0.0),
        }
    }

    /// Adopts a newly selected model: temperature resets to its default and
    /// max tokens is lowered to its ceiling. Max tokens is never raised and
    /// never drops below 1.
    pub fn rebase_on(&mut self, model: &AIModel) {
        self.temperature = model.default_temperature;
        self.max_tokens = self.max_tokens.min(model.max_tokens).max(1);
    }

    pub fn get(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::Temperature => self.temperature,
            ParameterField::MaxTokens => f64::from(self.max_tokens),
            ParameterField::TopP => self.top_p,
            ParameterField::FrequencyPenalty => self.frequency_penalty,
            ParameterField::PresencePenalty => self.presence_penalty,
        }
    }

    /// Writes `value` clamped to the field's slider range.
    pub fn set(&mut self, field: ParameterField, value: f64, model: Option<&AIModel>) {
        let value = field.range(model).clamp(value);
        match field {
            ParameterField::Temperature => self.temperature = value,
            // Range is [1, u32 ceiling] after the clamp.
            ParameterField::MaxTokens => self.max_tokens = value.round() as u32,
            ParameterField::TopP => self.top_p = value,
            ParameterField::FrequencyPenalty => self.frequency_penalty = value,
            ParameterField::PresencePenalty => self.presence_penalty = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: &str, max_tokens: u32, default_temperature: f64) -> AIModel {
        AIModel {
            id: id.into(),
            name: id.to_uppercase(),
            provider: "Test".into(),
            description: String::new(),
            max_tokens,
            default_temperature,
        }
    }

    #[test]
    fn seeds_fill_missing_fields_with_defaults() {
        let params = ModelParameters::seeded(
            PartialParameters {
                top_p: Some(0.9),
                ..Default::default()
            },
            None,
        );
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_tokens, 2048);
        assert_eq!(params.top_p, 0.9);
        assert_eq!(params.frequency_penalty, 0.0);
        assert_eq!(params.presence_penalty, 0.0);
    }

    #[test]
    fn seed_takes_token_ceiling_from_model() {
        let params = ModelParameters::seeded(PartialParameters::default(), Some(&model("a", 8192, 0.7)));
        assert_eq!(params.max_tokens, 8192);
    }

    #[test]
    fn model_switch_clamp_is_not_restorative() {
        let mut params = ModelParameters::seeded(
            PartialParameters {
                max_tokens: Some(4096),
                ..Default::default()
            },
            None,
        );
        params.rebase_on(&model("small", 2048, 0.5));
        assert_eq!(params.max_tokens, 2048);
        assert_eq!(params.temperature, 0.5);

        params.rebase_on(&model("large", 8192, 0.7));
        assert_eq!(params.max_tokens, 2048);
        assert_eq!(params.temperature, 0.7);
    }

    #[test]
    fn model_switch_resets_edited_temperature() {
        let gpt4 = model("gpt-4", 8192, 0.7);
        let mut params = ModelParameters::default();
        params.set(ParameterField::Temperature, 1.5, Some(&gpt4));
        params.rebase_on(&model("claude-2", 100_000, 0.5));
        assert_eq!(params.temperature, 0.5);
    }

    #[test]
    fn set_clamps_to_slider_range() {
        let llama = model("llama-2", 4096, 0.6);
        let mut params = ModelParameters::default();
        params.set(ParameterField::MaxTokens, 9000.0, Some(&llama));
        assert_eq!(params.max_tokens, 4096);
        params.set(ParameterField::MaxTokens, 0.0, Some(&llama));
        assert_eq!(params.max_tokens, 1);
        params.set(ParameterField::TopP, 1.4, Some(&llama));
        assert_eq!(params.top_p, 1.0);
        params.set(ParameterField::PresencePenalty, 0.25, Some(&llama));
        assert_eq!(params.get(ParameterField::PresencePenalty), 0.25);
    }

    #[test]
    fn zero_ceiling_model_keeps_max_tokens_positive() {
        let broken = model("broken", 0, 0.4);
        let mut params = ModelParameters::seeded(PartialParameters::default(), Some(&broken));
        assert_eq!(params.max_tokens, 1);

        params.rebase_on(&broken);
        assert_eq!(params.max_tokens, 1);
        params.set(ParameterField::MaxTokens, 10.0, Some(&broken));
        assert_eq!(params.max_tokens, 1);
    }

    #[test]
    fn token_slider_tracks_model_ceiling() {
        assert_eq!(ParameterField::MaxTokens.range(None).max, 4096.0);
        let claude = model("claude-2", 100_000, 0.5);
        assert_eq!(ParameterField::MaxTokens.range(Some(&claude)).max, 100_000.0);
        assert_eq!(ParameterField::MaxTokens.range(Some(&claude)).precision(), 0);
        assert_eq!(ParameterField::Temperature.range(None).precision(), 2);
    }
}

use crate::types::{AIModel, ChatMessage, ModelParameters, Role};
use time::OffsetDateTime;

/// Transcript of the page plus bookkeeping for the simulated reply.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
    generation: u64,
    next_seq: u64,
}

/// Snapshot taken at submit time; turned into the assistant message once the
/// simulated latency has elapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingReply {
    generation: u64,
    model_name: String,
    temperature: f64,
    max_tokens: u32,
    prompt: String,
}

impl PendingReply {
    pub fn response_text(&self) -> String {
        format!(
            "This is a simulated response from {} with temperature {} and max tokens {}.\n\n\
             Your prompt was: \"{}\"\n\n\
             In a real implementation, this would connect to the actual AI model API and return a genuine response based on your prompt and the selected parameters.",
            self.model_name, self.temperature, self.max_tokens, self.prompt
        )
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn can_submit(&self, prompt: &str, model: Option<&AIModel>) -> bool {
        !prompt.trim().is_empty() && model.is_some() && !self.pending
    }

    /// Appends the user message and returns the reply to deliver later, or
    /// `None` when the submission is not allowed.
    pub fn submit(
        &mut self,
        prompt: &str,
        model: Option<&AIModel>,
        parameters: &ModelParameters,
        now: OffsetDateTime,
    ) -> Option<PendingReply> {
        if !self.can_submit(prompt, model) {
            return None;
        }
        let model = model?;

        self.push(Role::User, prompt.to_string(), now);
        self.pending = true;
        tracing::info!(model = %model.id, "prompt submitted");

        Some(PendingReply {
            generation: self.generation,
            model_name: model.name.clone(),
            temperature: parameters.temperature,
            max_tokens: parameters.max_tokens,
            prompt: prompt.to_string(),
        })
    }

    /// Appends the assistant message for `reply`. Replies issued before the
    /// last [`clear`](Self::clear) are dropped. Returns whether it was appended.
    pub fn complete(&mut self, reply: PendingReply, now: OffsetDateTime) -> bool {
        if reply.generation != self.generation {
            tracing::debug!("discarding reply for a cleared conversation");
            return false;
        }
        self.push(Role::Assistant, reply.response_text(), now);
        self.pending = false;
        true
    }

    pub fn clear(&mut self) {
        self.messages = Vec::new();
        self.pending = false;
        self.generation += 1;
    }

    fn push(&mut self, role: Role, content: String, now: OffsetDateTime) {
        let millis = now.unix_timestamp_nanos() / 1_000_000;
        let id = format!("{millis}-{}", self.next_seq);
        self.next_seq += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            timestamp: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_models;
    use time::macros::datetime;

    fn gpt4() -> AIModel {
        builtin_models()
            .iter()
            .find(|m| m.id == "gpt-4")
            .cloned()
            .unwrap()
    }

    #[test]
    fn blank_prompt_or_missing_model_is_rejected() {
        let mut session = ChatSession::new();
        let params = ModelParameters::default();
        let now = datetime!(2024-01-01 0:00 UTC);
        assert!(session.submit("   ", Some(&gpt4()), &params, now).is_none());
        assert!(session.submit("Hello", None, &params, now).is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn second_submit_waits_for_reply() {
        let mut session = ChatSession::new();
        let params = ModelParameters::default();
        let now = datetime!(2024-01-01 0:00 UTC);
        let model = gpt4();
        let reply = session.submit("one", Some(&model), &params, now).unwrap();
        assert!(session.submit("two", Some(&model), &params, now).is_none());

        session.complete(reply, now);
        assert!(session.submit("two", Some(&model), &params, now).is_some());
    }

    #[test]
    fn message_ids_are_unique_within_a_millisecond() {
        let mut session = ChatSession::new();
        let now = datetime!(2024-01-01 0:00 UTC);
        let reply = session
            .submit("hi", Some(&gpt4()), &ModelParameters::default(), now)
            .unwrap();
        session.complete(reply, now);
        let ids: Vec<_> = session.messages().iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn response_text_formats_whole_numbers_plainly() {
        let reply = PendingReply {
            generation: 0,
            model_name: "Llama 2".into(),
            temperature: 1.0,
            max_tokens: 4096,
            prompt: "Hi".into(),
        };
        assert!(
            reply
                .response_text()
                .starts_with("This is a simulated response from Llama 2 with temperature 1 and max tokens 4096.")
        );
    }
}

use crate::types::PromptTemplate;
use time::OffsetDateTime;

pub fn can_save_prompt(text: &str) -> bool {
    !text.trim().is_empty()
}

/// The fetched catalog plus templates saved during this session.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateLibrary {
    templates: Vec<PromptTemplate>,
    status: LibraryStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LibraryStatus {
    Loading,
    Ready,
    Failed(String),
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self {
            templates: Vec::new(),
            status: LibraryStatus::Loading,
        }
    }
}

impl TemplateLibrary {
    pub fn templates(&self) -> &[PromptTemplate] {
        &self.templates
    }

    pub fn status(&self) -> &LibraryStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LibraryStatus::Loading
    }

    /// Installs the fetched catalog ahead of anything saved while it loaded.
    pub fn loaded(&mut self, fetched: Vec<PromptTemplate>) {
        let saved = std::mem::replace(&mut self.templates, fetched);
        self.templates.extend(saved);
        self.status = LibraryStatus::Ready;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.status = LibraryStatus::Failed(message.into());
    }

    pub fn add(&mut self, template: PromptTemplate) {
        self.templates.push(template);
    }

    pub fn find(&self, id: &str) -> Option<&PromptTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }
}

/// Name/description form of the save dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateDraft {
    pub name: String,
    pub description: String,
}

impl TemplateDraft {
    pub fn can_confirm(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Builds the template for `content`, with an id unused in `existing`.
    pub fn into_template(
        self,
        content: &str,
        existing: &[PromptTemplate],
        now: OffsetDateTime,
    ) -> PromptTemplate {
        PromptTemplate {
            id: unique_template_id(existing, now),
            name: self.name,
            content: content.to_string(),
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// `temp-{unix millis}`, bumped past any id already taken.
pub fn unique_template_id(existing: &[PromptTemplate], now: OffsetDateTime) -> String {
    let mut millis = now.unix_timestamp_nanos() / 1_000_000;
    loop {
        let candidate = format!("temp-{millis}");
        if !existing.iter().any(|template| template.id == candidate) {
            return candidate;
        }
        millis += 1;
    }
}

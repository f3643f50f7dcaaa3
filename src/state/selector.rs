use crate::types::AIModel;

/// Progress of a one-shot fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelMenu {
    models: Vec<AIModel>,
    selected: Option<AIModel>,
    open: bool,
}

impl ModelMenu {
    /// Builds the menu from a fetched catalog and picks the default: the
    /// preferred id when present in the list, otherwise the first model.
    pub fn resolve(models: Vec<AIModel>, preferred_id: Option<&str>) -> Self {
        let selected = preferred_id
            .and_then(|id| models.iter().find(|model| model.id == id))
            .or_else(|| models.first())
            .cloned();
        Self {
            models,
            selected,
            open: false,
        }
    }

    pub fn models(&self) -> &[AIModel] {
        &self.models
    }

    pub fn selected(&self) -> Option<&AIModel> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|model| model.id == id)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Selects `id`, closes the list and returns the model to report.
    pub fn choose(&mut self, id: &str) -> Option<AIModel> {
        let model = self.models.iter().find(|model| model.id == id)?.clone();
        self.selected = Some(model.clone());
        self.open = false;
        Some(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_models;

    #[test]
    fn defaults_to_first_model() {
        let menu = ModelMenu::resolve(builtin_models().to_vec(), None);
        assert_eq!(menu.selected().map(|m| m.id.as_str()), Some("gpt-3.5"));
        assert!(!menu.is_open());
    }

    #[test]
    fn honours_preferred_id() {
        let menu = ModelMenu::resolve(builtin_models().to_vec(), Some("claude-2"));
        assert_eq!(menu.selected().map(|m| m.name.as_str()), Some("Claude 2"));
    }

    #[test]
    fn unknown_preferred_id_falls_back_to_first() {
        let menu = ModelMenu::resolve(builtin_models().to_vec(), Some("gpt-9"));
        assert!(menu.is_selected("gpt-3.5"));
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let menu = ModelMenu::resolve(Vec::new(), None);
        assert!(menu.selected().is_none());
    }

    #[test]
    fn choosing_closes_the_list() {
        let mut menu = ModelMenu::resolve(builtin_models().to_vec(), None);
        menu.toggle();
        assert!(menu.is_open());

        let chosen = menu.choose("mistral-7b").unwrap();
        assert_eq!(chosen.max_tokens, 8192);
        assert!(menu.is_selected("mistral-7b"));
        assert!(!menu.is_open());
    }

    #[test]
    fn choosing_unknown_id_changes_nothing() {
        let mut menu = ModelMenu::resolve(builtin_models().to_vec(), None);
        menu.toggle();
        assert!(menu.choose("missing").is_none());
        assert!(menu.is_open());
        assert!(menu.is_selected("gpt-3.5"));
    }

    #[test]
    fn dismiss_closes_without_selecting() {
        let mut menu = ModelMenu::resolve(builtin_models().to_vec(), None);
        menu.toggle();
        menu.dismiss();
        assert!(!menu.is_open());
        assert!(menu.is_selected("gpt-3.5"));
    }
}

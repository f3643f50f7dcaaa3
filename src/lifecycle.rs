use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Liveness flag for a component scope.
///
/// Spawned work holds a clone and checks [`ScopeToken::is_live`] before
/// writing any state. The owning component retires the token when it
/// unmounts.
#[derive(Clone, Debug)]
pub struct ScopeToken {
    live: Arc<AtomicBool>,
}

impl Default for ScopeToken {
    fn default() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl ScopeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn retire(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Runs `update` only while the scope is still mounted.
    pub fn guard<R>(&self, update: impl FnOnce() -> R) -> Option<R> {
        if self.is_live() {
            Some(update())
        } else {
            tracing::debug!("dropping state update for unmounted scope");
            None
        }
    }
}

#[cfg(feature = "dioxus")]
pub fn use_scope_token() -> ScopeToken {
    use dioxus::prelude::{use_drop, use_hook};

    let token = use_hook(ScopeToken::new);
    let on_drop = token.clone();
    use_drop(move || on_drop.retire());
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_live() {
        assert!(ScopeToken::new().is_live());
    }

    #[test]
    fn retire_is_visible_through_clones() {
        let token = ScopeToken::new();
        let pending = token.clone();
        token.retire();
        assert!(!pending.is_live());
        assert_eq!(pending.guard(|| 1), None);
    }

    #[test]
    fn guard_runs_while_live() {
        let token = ScopeToken::new();
        let mut writes = 0;
        token.guard(|| writes += 1);
        assert_eq!(writes, 1);
    }
}

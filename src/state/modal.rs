#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub fn max_width(self) -> &'static str {
        match self {
            ModalSize::Sm => "24rem",
            ModalSize::Md => "28rem",
            ModalSize::Lg => "32rem",
            ModalSize::Xl => "36rem",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ModalSize::Sm => "modal-panel modal-sm",
            ModalSize::Md => "modal-panel modal-md",
            ModalSize::Lg => "modal-panel modal-lg",
            ModalSize::Xl => "modal-panel modal-xl",
        }
    }
}

/// Something the user did while a dialog was open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalInteraction {
    EscapeKey,
    OtherKey,
    OverlayClick,
    PanelClick,
    CloseButton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissPolicy {
    pub close_on_esc: bool,
    pub close_on_outside_click: bool,
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self {
            close_on_esc: true,
            close_on_outside_click: true,
        }
    }
}

impl DismissPolicy {
    pub fn should_close(&self, interaction: &ModalInteraction) -> bool {
        match interaction {
            ModalInteraction::EscapeKey => self.close_on_esc,
            ModalInteraction::OverlayClick => self.close_on_outside_click,
            ModalInteraction::CloseButton => true,
            ModalInteraction::PanelClick | ModalInteraction::OtherKey => false,
        }
    }
}

/// The page whose scrolling a dialog suspends.
pub trait ScrollHost {
    fn set_scroll_locked(&self, locked: bool);
}

/// Holds the page scroll lock for as long as it lives.
pub struct ScrollLock<H: ScrollHost> {
    host: H,
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn engage(host: H) -> Self {
        host.set_scroll_locked(true);
        Self { host }
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.set_scroll_locked(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingHost(Rc<RefCell<Vec<bool>>>);

    impl ScrollHost for RecordingHost {
        fn set_scroll_locked(&self, locked: bool) {
            self.0.borrow_mut().push(locked);
        }
    }

    #[test]
    fn default_policy_closes_on_escape_and_outside_click() {
        let policy = DismissPolicy::default();
        assert!(policy.should_close(&ModalInteraction::EscapeKey));
        assert!(policy.should_close(&ModalInteraction::OverlayClick));
        assert!(policy.should_close(&ModalInteraction::CloseButton));
    }

    #[test]
    fn inside_click_and_other_keys_never_close() {
        let policy = DismissPolicy::default();
        assert!(!policy.should_close(&ModalInteraction::PanelClick));
        assert!(!policy.should_close(&ModalInteraction::OtherKey));
    }

    #[test]
    fn disabled_dismissals_are_respected() {
        let policy = DismissPolicy {
            close_on_esc: false,
            close_on_outside_click: false,
        };
        assert!(!policy.should_close(&ModalInteraction::EscapeKey));
        assert!(!policy.should_close(&ModalInteraction::OverlayClick));
        assert!(policy.should_close(&ModalInteraction::CloseButton));
    }

    #[test]
    fn scroll_lock_releases_on_drop() {
        let host = RecordingHost::default();
        {
            let _lock = ScrollLock::engage(host.clone());
            assert_eq!(*host.0.borrow(), vec![true]);
        }
        assert_eq!(*host.0.borrow(), vec![true, false]);
    }

    #[test]
    fn sizes_map_to_increasing_widths() {
        let widths: Vec<_> = [ModalSize::Sm, ModalSize::Md, ModalSize::Lg, ModalSize::Xl]
            .iter()
            .map(|size| size.max_width().trim_end_matches("rem").parse::<u32>().unwrap())
            .collect();
        assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ModalSize::default(), ModalSize::Md);
    }
}

/// Where a widget's displayed value comes from.
///
/// `Owned` widgets keep their own copy, seeded once. `External` widgets show
/// whatever the parent passes on each render and never write locally; the
/// parent learns about edits through the change callback in both cases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueSource<T> {
    Owned(T),
    External(T),
}

impl<T: Clone> ValueSource<T> {
    /// Owned source starting at `default`, or `fallback` when none is given.
    pub fn owned_or(default: Option<T>, fallback: T) -> Self {
        ValueSource::Owned(default.unwrap_or(fallback))
    }

    pub fn is_external(&self) -> bool {
        matches!(self, ValueSource::External(_))
    }

    /// Initial value for the widget's local slot.
    pub fn seed(&self) -> T {
        match self {
            ValueSource::Owned(value) | ValueSource::External(value) => value.clone(),
        }
    }

    pub fn resolve(&self, local: &T) -> T {
        match self {
            ValueSource::External(value) => value.clone(),
            ValueSource::Owned(_) => local.clone(),
        }
    }

    /// Stores `next` in the local slot when the widget owns its value.
    /// Returns whether the slot changed.
    pub fn commit(&self, local: &mut T, next: T) -> bool {
        match self {
            ValueSource::Owned(_) => {
                *local = next;
                true
            }
            ValueSource::External(_) => false,
        }
    }
}

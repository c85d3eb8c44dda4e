//! Inputs to and outputs of the selection state machine.

use std::collections::BTreeSet;

use almanac_calendar::DayKey;

/// Modifier keys held during a day click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    /// Ctrl, or the platform equivalent (Cmd on macOS).
    pub ctrl: bool,
    /// Shift.
    pub shift: bool,
}

impl ClickModifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };
    /// Ctrl held.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };
    /// Shift held.
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
    };
}

/// Which branch of the click algorithm ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// The selection was replaced by the clicked day.
    Single,
    /// The clicked day was toggled.
    Multi,
    /// The span from the anchor to the clicked day was added.
    Range,
}

impl SelectionKind {
    /// Returns `true` if the update merges into the previous selection.
    pub fn is_additive(self) -> bool {
        !matches!(self, Self::Single)
    }
}

/// The selection after a change, and how it relates to the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    keys: BTreeSet<DayKey>,
    additive: bool,
}

impl SelectionChanged {
    /// Creates a change notification for `keys`.
    pub fn new(keys: BTreeSet<DayKey>, additive: bool) -> Self {
        Self { keys, additive }
    }

    /// Returns the full selection after the change.
    pub fn keys(&self) -> &BTreeSet<DayKey> {
        &self.keys
    }

    /// Returns `true` if a host filter should be merged rather than replaced.
    pub fn additive(&self) -> bool {
        self.additive
    }

    /// Returns `true` if nothing is selected after the change.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Notification emitted by every selection mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The selection changed.
    Changed(SelectionChanged),
    /// The selection was explicitly cleared.
    Cleared,
}

impl SelectionEvent {
    /// Returns the selected keys carried by the event; empty for `Cleared`.
    pub fn keys(&self) -> Vec<DayKey> {
        match self {
            Self::Changed(changed) => changed.keys.iter().copied().collect(),
            Self::Cleared => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_additivity() {
        assert!(!SelectionKind::Single.is_additive());
        assert!(SelectionKind::Multi.is_additive());
        assert!(SelectionKind::Range.is_additive());
    }

    #[test]
    fn modifier_constants() {
        assert_eq!(ClickModifiers::default(), ClickModifiers::NONE);
        assert!(ClickModifiers::CTRL.ctrl && !ClickModifiers::CTRL.shift);
        assert!(ClickModifiers::SHIFT.shift && !ClickModifiers::SHIFT.ctrl);
    }

    #[test]
    fn event_keys() {
        let key = DayKey::from_ymd(2024, 3, 1).unwrap();
        let event = SelectionEvent::Changed(SelectionChanged::new(BTreeSet::from([key]), false));
        assert_eq!(event.keys(), vec![key]);
        assert!(SelectionEvent::Cleared.keys().is_empty());
    }
}

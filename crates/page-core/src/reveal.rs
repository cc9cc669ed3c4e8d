//! Reveal-on-scroll rules.
//!
//! The browser's intersection observer decides *when* an element crosses the
//! threshold; this module decides what the page does about it.

use crate::constants::{OBSERVER_ROOT_MARGIN, VISIBILITY_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Add the marker on entry, remove it on exit.
    Toggle,
    /// Add the marker on entry and never remove it.
    OneShot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Add,
    Remove,
    Keep,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: VISIBILITY_THRESHOLD,
            root_margin: OBSERVER_ROOT_MARGIN,
        }
    }
}

impl ObserverConfig {
    /// Whether the visible fraction of an element meets the threshold.
    pub fn crosses(&self, intersection_ratio: f64) -> bool {
        intersection_ratio >= self.threshold
    }

    /// What to do with an observer entry. Decided from the ratio, since the
    /// browser reports `isIntersecting` for any overlap at all.
    pub fn action_for(&self, mode: RevealMode, intersection_ratio: f64) -> RevealAction {
        reveal_action(mode, self.crosses(intersection_ratio))
    }
}

#[inline]
pub fn reveal_action(mode: RevealMode, is_intersecting: bool) -> RevealAction {
    match (is_intersecting, mode) {
        (true, _) => RevealAction::Add,
        (false, RevealMode::Toggle) => RevealAction::Remove,
        (false, RevealMode::OneShot) => RevealAction::Keep,
    }
}

impl RevealMode {
    /// Once revealed, a one-shot element can stop being observed.
    pub fn unobserve_after_reveal(self) -> bool {
        matches!(self, RevealMode::OneShot)
    }
}

//! Card visibility state and the sinks it is applied to

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::card::CardId;

/// Whether a card is shown in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Shown, keeping its place in the layout flow
    #[default]
    Visible,
    /// Removed from layout
    Hidden,
}

impl Visibility {
    /// Map a match result onto a visibility
    pub fn from_match(matched: bool) -> Self {
        if matched {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    /// Inline `display` value for this state
    pub fn css_display(&self) -> &'static str {
        match self {
            Visibility::Visible => "initial",
            Visibility::Hidden => "none",
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Visible => f.pad("visible"),
            Visibility::Hidden => f.pad("hidden"),
        }
    }
}

/// One (card, visibility) decision produced by the matching step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityUpdate {
    pub card: CardId,
    pub visibility: Visibility,
}

impl VisibilityUpdate {
    pub fn new(card: CardId, visibility: Visibility) -> Self {
        Self { card, visibility }
    }
}

/// Destination for visibility decisions
///
/// The rendering layer implements this; the matching logic never touches it.
pub trait VisibilitySink {
    fn set_visibility(&mut self, card: &CardId, visibility: Visibility);
}

/// Records every decision in order
impl VisibilitySink for Vec<VisibilityUpdate> {
    fn set_visibility(&mut self, card: &CardId, visibility: Visibility) {
        self.push(VisibilityUpdate::new(card.clone(), visibility));
    }
}

/// Current display state of every card, keyed by id
///
/// Cards that were never evaluated are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    states: HashMap<CardId, Visibility>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visibility of a card, defaulting to visible
    pub fn get(&self, card: &CardId) -> Visibility {
        self.states.get(card).copied().unwrap_or_default()
    }

    /// Number of cards explicitly hidden
    pub fn hidden_count(&self) -> usize {
        self.states.values().filter(|v| !v.is_visible()).count()
    }

    /// Forget every decision; all cards become visible again
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

impl VisibilitySink for VisibilityMap {
    fn set_visibility(&mut self, card: &CardId, visibility: Visibility) {
        self.states.insert(card.clone(), visibility);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_display_values() {
        assert_eq!(Visibility::Visible.css_display(), "initial");
        assert_eq!(Visibility::Hidden.css_display(), "none");
    }

    #[test]
    fn test_map_defaults_to_visible() {
        let map = VisibilityMap::new();
        assert_eq!(map.get(&CardId::new("unknown")), Visibility::Visible);
    }

    #[test]
    fn test_map_overwrites_previous_state() {
        let mut map = VisibilityMap::new();
        let id = CardId::new("PC01");

        map.set_visibility(&id, Visibility::Hidden);
        assert_eq!(map.get(&id), Visibility::Hidden);
        assert_eq!(map.hidden_count(), 1);

        map.set_visibility(&id, Visibility::Visible);
        assert_eq!(map.get(&id), Visibility::Visible);
        assert_eq!(map.hidden_count(), 0);
    }

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut log: Vec<VisibilityUpdate> = Vec::new();
        log.set_visibility(&CardId::new("a"), Visibility::Hidden);
        log.set_visibility(&CardId::new("b"), Visibility::Visible);

        assert_eq!(log[0].card.as_str(), "a");
        assert_eq!(log[1].visibility, Visibility::Visible);
    }
}

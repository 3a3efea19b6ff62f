use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::TrackId;

/// Explicit open/closed overrides per track, owned by the host and passed
/// into every layout pass. A track without an entry uses its level
/// default (projects open, tasks and subtasks closed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleState {
    overrides: HashMap<TrackId, bool>,
}

impl ToggleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective open state for a track.
    pub fn is_open(&self, id: TrackId) -> bool {
        self.overrides
            .get(&id)
            .copied()
            .unwrap_or_else(|| id.default_open())
    }

    /// Flip the effective state of a track. A first toggle on an
    /// untouched track records the negation of its level default.
    pub fn toggle(&mut self, id: TrackId) {
        let open = self.is_open(id);
        self.overrides.insert(id, !open);
    }

    /// Drop all overrides, restoring level defaults everywhere.
    pub fn reset(&mut self) {
        self.overrides.clear();
    }
}

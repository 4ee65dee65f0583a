#![forbid(unsafe_code)]

//! Normalized, identity-keyed slider data.
//!
//! # Invariants
//!
//! 1. Each id list and its map form a bijection (`handle_ids`/`handles`,
//!    `tooltip_ids`/`tooltips`, `interval_ids`/`intervals`).
//! 2. `interval_ids.len() == handle_ids.len() + 1`.
//! 3. Iteration order always comes from the id lists, never from map order.
//!
//! `Data` produced by [`options_to_data`](crate::convert::options_to_data)
//! satisfies all three. The model re-checks them on every proposal.

use std::collections::{BTreeSet, HashMap};

use crate::id::{HandleId, IntervalId, TooltipId};
use crate::options::{Grid, Orientation, TooltipFormatter};

/// A group of tooltips the renderer found overlapping after layout.
pub type CollisionGroup = BTreeSet<TooltipId>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "state-persistence", serde(rename_all = "camelCase"))]
pub struct Data {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub orientation: Orientation,
    pub css_class: String,
    #[cfg_attr(feature = "state-persistence", serde(skip))]
    pub tooltip_formatter: TooltipFormatter,

    pub handles: HashMap<HandleId, f64>,
    pub handle_ids: Vec<HandleId>,
    /// Handle currently being dragged.
    pub active_handle_id: Option<HandleId>,

    pub tooltips: HashMap<TooltipId, bool>,
    pub tooltip_ids: Vec<TooltipId>,
    /// Reported by the renderer after each layout pass.
    pub tooltip_collisions: Vec<CollisionGroup>,

    pub intervals: HashMap<IntervalId, bool>,
    pub interval_ids: Vec<IntervalId>,

    pub grid: Grid,
}

impl Default for Data {
    fn default() -> Self {
        crate::convert::options_to_data(&crate::config::Defaults::default().options())
    }
}

impl Data {
    /// Handle values in handle order. Handles missing from the map are skipped.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.handle_ids
            .iter()
            .filter_map(|id| self.handles.get(id).copied())
            .collect()
    }

    /// Value of one handle.
    #[must_use]
    pub fn handle_value(&self, id: &HandleId) -> Option<f64> {
        self.handles.get(id).copied()
    }

    /// Position of a handle in `handle_ids`.
    #[must_use]
    pub fn handle_index(&self, id: &HandleId) -> Option<usize> {
        self.handle_ids.iter().position(|h| h == id)
    }

    /// Visibility of the interval at `index` in `interval_ids`.
    ///
    /// Out-of-range indices and unmapped ids read as hidden.
    #[must_use]
    pub fn interval_visible_at(&self, index: usize) -> bool {
        self.interval_ids
            .get(index)
            .and_then(|id| self.intervals.get(id))
            .copied()
            .unwrap_or(false)
    }

    /// Whether the tooltip appears in any reported collision group.
    #[must_use]
    pub fn has_collision(&self, id: &TooltipId) -> bool {
        self.tooltip_collisions.iter().any(|group| group.contains(id))
    }

    /// `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

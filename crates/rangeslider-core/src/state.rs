#![forbid(unsafe_code)]

//! Render-only view model.
//!
//! A [`State`] is recomputed from [`Data`](crate::data::Data) after every
//! commit and never mutated in place. Positions are percentages of the
//! `[min, max]` span.

use std::fmt;

use crate::id::{Endpoint, HandleId, IntervalId, TooltipId};
use crate::options::Orientation;

/// Kind of rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Track,
    Handle,
    Tooltip,
    /// Synthetic tooltip standing in for a run of colliding tooltips.
    MergedTooltip,
    Interval,
    Grid,
}

impl Role {
    /// Role name as used in class suffixes and `data-role` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Handle => "handle",
            Self::Tooltip => "tooltip",
            Self::MergedTooltip => "tooltip-merged",
            Self::Interval => "interval",
            Self::Grid => "grid",
        }
    }

    /// `"{prefix}__{role}"`. Merged tooltips share the tooltip class.
    #[must_use]
    pub fn css_class(self, prefix: &str) -> String {
        let role = match self {
            Self::MergedTooltip => Self::Tooltip,
            other => other,
        };
        format!("{prefix}__{}", role.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub orientation: Orientation,
    pub css_class: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Handle {
    pub id: HandleId,
    pub orientation: Orientation,
    pub position: f64,
    pub is_active: bool,
    pub css_class: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Tooltip {
    pub id: TooltipId,
    /// Handles whose values this tooltip shows (several for a merged tooltip).
    pub handle_ids: Vec<HandleId>,
    pub content: String,
    pub orientation: Orientation,
    /// Set on base tooltips that belong to a reported collision group.
    pub has_collisions: bool,
    pub is_visible: bool,
    pub position: f64,
    pub css_class: String,
    pub role: Role,
}

impl Tooltip {
    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.role == Role::MergedTooltip
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub id: IntervalId,
    pub from: f64,
    pub to: f64,
    /// Bounding endpoints, start then end.
    pub bounds: (Endpoint, Endpoint),
    pub orientation: Orientation,
    pub is_visible: bool,
    pub css_class: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct GridView {
    pub orientation: Orientation,
    pub is_visible: bool,
    pub num_cells: Vec<u32>,
    pub css_class: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub css_class: String,
    pub track: Track,
    pub handles: Vec<Handle>,
    /// Base tooltips in handle order, followed by merged tooltips.
    pub tooltips: Vec<Tooltip>,
    pub intervals: Vec<Interval>,
    pub grid: GridView,
}

impl State {
    /// Tooltips a renderer should draw: merged tooltips plus visible base
    /// tooltips that no merged tooltip covers.
    pub fn displayed_tooltips(&self) -> impl Iterator<Item = &Tooltip> {
        self.tooltips
            .iter()
            .filter(|t| t.is_merged() || (t.is_visible && !t.has_collisions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_classes() {
        assert_eq!(Role::Handle.css_class("range-slider"), "range-slider__handle");
        assert_eq!(Role::MergedTooltip.css_class("rs"), "rs__tooltip");
        assert_eq!(Role::MergedTooltip.as_str(), "tooltip-merged");
        assert_eq!(Role::Track.to_string(), "track");
    }
}

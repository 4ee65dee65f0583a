#![forbid(unsafe_code)]

//! Built-in defaults and fill values.
//!
//! [`Defaults`] is the single place the slider's fallback configuration lives:
//! the values used when a key is absent from raw options, the fill values for
//! padding short per-handle lists, and the data the model falls back to when
//! construction input fails integrity.

use crate::options::{GridOption, OneOrMany, Options, Orientation, TooltipFormatter};

/// Default class prefix.
pub const DEFAULT_CSS_CLASS: &str = "range-slider";

/// Default grid cell count.
pub const DEFAULT_GRID_CELLS: u32 = 5;

/// Fallback configuration.
///
/// The default instance is internally consistent: converting its
/// [`options`](Self::options) yields data that passes every integrity check.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    /// Handle values.
    pub value: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub orientation: Orientation,
    pub css_class: String,
    /// Fill for tooltip slots missing from a short list.
    pub tooltip_fill: bool,
    /// Fill for interval slots missing from a short list.
    pub interval_fill: bool,
    pub grid_is_visible: bool,
    pub grid_num_cells: Vec<u32>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            value: vec![50.0],
            min: 0.0,
            max: 100.0,
            step: 1.0,
            orientation: Orientation::Horizontal,
            css_class: DEFAULT_CSS_CLASS.to_owned(),
            tooltip_fill: true,
            interval_fill: false,
            grid_is_visible: false,
            grid_num_cells: vec![DEFAULT_GRID_CELLS],
        }
    }
}

impl Defaults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill value for padded tooltip slots.
    #[must_use]
    pub fn tooltip_fill(mut self, fill: bool) -> Self {
        self.tooltip_fill = fill;
        self
    }

    /// Set the fill value for padded interval slots.
    #[must_use]
    pub fn interval_fill(mut self, fill: bool) -> Self {
        self.interval_fill = fill;
        self
    }

    /// Set the default grid cell counts.
    #[must_use]
    pub fn grid_num_cells(mut self, cells: Vec<u32>) -> Self {
        self.grid_num_cells = cells;
        self
    }

    /// Set the default class prefix.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// The default options.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            value: OneOrMany::Many(self.value.clone()),
            min: self.min,
            max: self.max,
            step: self.step,
            orientation: self.orientation,
            css_class: self.css_class.clone(),
            tooltips: OneOrMany::One(self.tooltip_fill),
            tooltip_formatter: TooltipFormatter::Plain,
            intervals: OneOrMany::One(self.interval_fill),
            grid: GridOption::Toggle(self.grid_is_visible),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_mirror_defaults() {
        let options = Defaults::default().options();
        assert_eq!(options.value, OneOrMany::Many(vec![50.0]));
        assert_eq!(options.min, 0.0);
        assert_eq!(options.max, 100.0);
        assert_eq!(options.step, 1.0);
        assert_eq!(options.css_class, "range-slider");
        assert_eq!(options.grid, GridOption::Toggle(false));
    }

    #[test]
    fn builder_overrides_fill_values() {
        let defaults = Defaults::new()
            .tooltip_fill(false)
            .interval_fill(true)
            .grid_num_cells(vec![2, 3]);
        assert!(!defaults.tooltip_fill);
        assert!(defaults.interval_fill);
        assert_eq!(defaults.grid_num_cells, vec![2, 3]);
    }
}

#![forbid(unsafe_code)]

//! Public configuration surface.
//!
//! [`Options`] is what embedding code hands to the slider. Scalars and lists
//! are both accepted for the per-handle fields; normalization into
//! [`Data`](crate::data::Data) lifts scalars to one-element lists and pads
//! short lists.

use std::fmt;
use std::sync::Arc;

/// Axis the slider is laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "state-persistence", serde(rename_all = "lowercase"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Accepted spellings, in declaration order.
    pub const NAMES: [&'static str; 2] = ["horizontal", "vertical"];

    /// Exact, case-sensitive parse. Surrounding whitespace is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }

    /// The option spelling of this orientation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// The side positions are measured from.
    #[must_use]
    pub const fn origin(self) -> Origin {
        match self {
            Self::Horizontal => Origin::Left,
            Self::Vertical => Origin::Bottom,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge of the track that corresponds to `0%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Left,
    Bottom,
}

impl Origin {
    /// CSS property name for this edge.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Bottom => "bottom",
        }
    }
}

/// Either a single value or an ordered list of values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "state-persistence", serde(untagged))]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Clone> OneOrMany<T> {
    /// Lift to a list; a scalar becomes a one-element list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            Self::One(v) => vec![v.clone()],
            Self::Many(vs) => vs.clone(),
        }
    }
}

impl<T> OneOrMany<T> {
    /// Number of entries after lifting.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(vs) => vs.len(),
        }
    }

    /// True only for an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! one_or_many_from {
    ($($ty:ty),*) => {$(
        impl From<$ty> for OneOrMany<$ty> {
            fn from(value: $ty) -> Self {
                Self::One(value)
            }
        }

        impl From<Vec<$ty>> for OneOrMany<$ty> {
            fn from(values: Vec<$ty>) -> Self {
                Self::Many(values)
            }
        }
    )*};
}

one_or_many_from!(f64, bool);

/// Scale marks drawn along the track.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "state-persistence", serde(rename_all = "camelCase"))]
pub struct Grid {
    pub is_visible: bool,
    /// Cell count per grid level; every entry is positive.
    pub num_cells: Vec<u32>,
}

impl Grid {
    #[must_use]
    pub fn new(is_visible: bool, num_cells: Vec<u32>) -> Self {
        Self {
            is_visible,
            num_cells,
        }
    }
}

/// Grid configuration as accepted in [`Options`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "state-persistence", serde(untagged))]
pub enum GridOption {
    /// Show or hide the grid with the default cell counts.
    Toggle(bool),
    Custom(Grid),
}

impl GridOption {
    /// Resolve against the default cell counts.
    #[must_use]
    pub fn resolve(&self, default_cells: &[u32]) -> Grid {
        match self {
            Self::Toggle(is_visible) => Grid::new(*is_visible, default_cells.to_vec()),
            Self::Custom(grid) => grid.clone(),
        }
    }
}

impl From<bool> for GridOption {
    fn from(is_visible: bool) -> Self {
        Self::Toggle(is_visible)
    }
}

impl From<Grid> for GridOption {
    fn from(grid: Grid) -> Self {
        Self::Custom(grid)
    }
}

/// Callback type for custom tooltip formatting.
pub type FormatFn = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Turns a handle value into tooltip text.
///
/// Equality is identity: two custom formatters are equal only when they
/// share the same allocation.
#[derive(Clone, Default)]
pub enum TooltipFormatter {
    /// `Display` formatting of the number (`50`, `2.5`).
    #[default]
    Plain,
    Custom(FormatFn),
}

impl TooltipFormatter {
    /// Wrap a formatting closure.
    #[must_use]
    pub fn custom(format: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(format))
    }

    /// Format one value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Plain => format!("{value}"),
            Self::Custom(format) => format(value),
        }
    }
}

impl PartialEq for TooltipFormatter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Plain, Self::Plain) => true,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for TooltipFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("TooltipFormatter::Plain"),
            Self::Custom(_) => f.write_str("TooltipFormatter::Custom(..)"),
        }
    }
}

/// User-facing slider configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "state-persistence", serde(rename_all = "camelCase"))]
pub struct Options {
    /// One value per handle.
    pub value: OneOrMany<f64>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub orientation: Orientation,
    /// Class prefix for every rendered element.
    pub css_class: String,
    /// Tooltip visibility per handle; padded when shorter than `value`.
    pub tooltips: OneOrMany<bool>,
    #[cfg_attr(feature = "state-persistence", serde(skip))]
    pub tooltip_formatter: TooltipFormatter,
    /// Interval visibility, one more entry than handles; padded when short.
    pub intervals: OneOrMany<bool>,
    pub grid: GridOption,
}

impl Default for Options {
    fn default() -> Self {
        crate::config::Defaults::default().options()
    }
}

impl Options {
    /// Replace the handle values.
    #[must_use]
    pub fn value(mut self, value: impl Into<OneOrMany<f64>>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the lower bound.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Set the upper bound.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set the step granularity.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the layout axis.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the class prefix.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Set tooltip visibility.
    #[must_use]
    pub fn tooltips(mut self, tooltips: impl Into<OneOrMany<bool>>) -> Self {
        self.tooltips = tooltips.into();
        self
    }

    /// Set the tooltip formatter.
    #[must_use]
    pub fn tooltip_formatter(mut self, formatter: TooltipFormatter) -> Self {
        self.tooltip_formatter = formatter;
        self
    }

    /// Set interval visibility.
    #[must_use]
    pub fn intervals(mut self, intervals: impl Into<OneOrMany<bool>>) -> Self {
        self.intervals = intervals.into();
        self
    }

    /// Set grid configuration.
    #[must_use]
    pub fn grid(mut self, grid: impl Into<GridOption>) -> Self {
        self.grid = grid.into();
        self
    }
}

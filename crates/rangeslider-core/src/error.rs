#![forbid(unsafe_code)]

//! Error types for both validation tiers.
//!
//! | Tier | Type | Raised by | Effect |
//! |------|------|-----------|--------|
//! | Structural | [`OptionsError`] | [`validators`](crate::validators) | Options rejected before any `Data` is built |
//! | Cross-field | [`IntegrityError`] | [`integrity`](crate::integrity) | Proposal rejected, prior `Data` kept |
//!
//! Both tiers accumulate: callers receive every violation from one pass.

use std::fmt;

use serde_json::Value;

use crate::id::HandleId;

/// Keys of the raw options object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Value,
    Min,
    Max,
    Step,
    Orientation,
    CssClass,
    Tooltips,
    Intervals,
    Grid,
}

impl OptionKey {
    /// Keys that must be present and valid.
    pub const REQUIRED: [Self; 6] = [
        Self::Value,
        Self::Min,
        Self::Max,
        Self::Step,
        Self::Orientation,
        Self::Tooltips,
    ];

    /// The key as spelled in the raw options object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Min => "min",
            Self::Max => "max",
            Self::Step => "step",
            Self::Orientation => "orientation",
            Self::CssClass => "cssClass",
            Self::Tooltips => "tooltips",
            Self::Intervals => "intervals",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RangeSliderOptions[\"{}\"]", self.as_str())
    }
}

/// Coarse type of a raw JSON value, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Missing,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    #[must_use]
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Bool,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "undefined",
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One malformed field in raw options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The whole input is not an object.
    NotAnObject { found: JsonKind },
    NotANumber { key: OptionKey, found: JsonKind },
    /// Expected a number or a non-empty list of numbers.
    NotANumberOrListOfNumbers { key: OptionKey, found: JsonKind },
    NotABooleanOrListOfBooleans { key: OptionKey, found: JsonKind },
    /// A string outside the accepted set.
    NotOneOf {
        key: OptionKey,
        expected: &'static [&'static str],
        found: String,
    },
    /// Grid is neither a boolean nor `{isVisible, numCells}`.
    InvalidGridShape { found: JsonKind },
    /// Class prefix must start with a letter followed by letters, digits, `_` or `-`.
    InvalidCssClass { found: String },
}

impl OptionsError {
    /// The offending key, when the error concerns a single field.
    #[must_use]
    pub fn key(&self) -> Option<OptionKey> {
        match self {
            Self::NotAnObject { .. } => None,
            Self::NotANumber { key, .. }
            | Self::NotANumberOrListOfNumbers { key, .. }
            | Self::NotABooleanOrListOfBooleans { key, .. }
            | Self::NotOneOf { key, .. } => Some(*key),
            Self::InvalidGridShape { .. } => Some(OptionKey::Grid),
            Self::InvalidCssClass { .. } => Some(OptionKey::CssClass),
        }
    }
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { found } => write!(
                f,
                "RangeSliderOptions should be an object with keys: value, min, max, step, orientation, tooltips, but {found} given instead"
            ),
            Self::NotANumber { key, found } => {
                write!(f, "{key} should be a number, but {found} given instead")
            }
            Self::NotANumberOrListOfNumbers { key, found } => write!(
                f,
                "{key} should be a number or a non-empty list of numbers, but {found} given instead"
            ),
            Self::NotABooleanOrListOfBooleans { key, found } => write!(
                f,
                "{key} should be a boolean or a list of booleans, but {found} given instead"
            ),
            Self::NotOneOf {
                key,
                expected,
                found,
            } => write!(
                f,
                "{key} should be one of: {}, but {found} given instead",
                expected.join(", ")
            ),
            Self::InvalidGridShape { found } => write!(
                f,
                "{} should be a boolean or an object with keys: isVisible, numCells, but {found} given instead",
                OptionKey::Grid
            ),
            Self::InvalidCssClass { found } => write!(
                f,
                "{} should start with a letter followed by letters, digits, '_' or '-', but {found:?} given instead",
                OptionKey::CssClass
            ),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Which id list / map pair an [`IntegrityError::IdMismatch`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Handle,
    Tooltip,
    Interval,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Handle => "handle",
            Self::Tooltip => "tooltip",
            Self::Interval => "interval",
        })
    }
}

/// One violated cross-field invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrityError {
    /// `min`, `max` or `step` is NaN or infinite.
    NotFinite { key: OptionKey, value: f64 },
    /// `min <= max` does not hold.
    MinIsGreaterThanMax { min: f64, max: f64 },
    /// Some handle values fall outside `[min, max]`.
    ValueNotInRange {
        handles: Vec<HandleId>,
        min: f64,
        max: f64,
    },
    /// `0 <= step <= max - min` does not hold.
    StepNotInRange { step: f64, span: f64 },
    /// Tooltip count is neither 1 nor the handle count.
    TooltipsDoNotMatchValues { tooltips: usize, values: usize },
    /// Interval count is not handle count + 1.
    IntervalsDoNotMatchValues { intervals: usize, values: usize },
    /// An id list and its map are not a bijection.
    IdMismatch { kind: IdKind },
    /// The active handle is not one of the slider's handles.
    UnknownActiveHandle { id: HandleId },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { key, value } => {
                write!(f, "{key} should be a finite number, but {value} given instead")
            }
            Self::MinIsGreaterThanMax { min, max } => {
                write!(f, "(min <= max) violated: min={min}, max={max}")
            }
            Self::ValueNotInRange { handles, min, max } => {
                write!(f, "(min <= value <= max) violated for [")?;
                for (i, id) in handles.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{id}")?;
                }
                write!(f, "] with min={min}, max={max}")
            }
            Self::StepNotInRange { step, span } => {
                write!(f, "(0 <= step <= max - min) violated: step={step}, max - min={span}")
            }
            Self::TooltipsDoNotMatchValues { tooltips, values } => write!(
                f,
                "(tooltips.length == 1 || tooltips.length == value.length) violated: {tooltips} tooltips, {values} values"
            ),
            Self::IntervalsDoNotMatchValues { intervals, values } => write!(
                f,
                "(intervals.length == value.length + 1) violated: {intervals} intervals, {values} values"
            ),
            Self::IdMismatch { kind } => {
                write!(f, "{kind} ids do not match {kind} entries one to one")
            }
            Self::UnknownActiveHandle { id } => {
                write!(f, "active handle {id} is not among the handle ids")
            }
        }
    }
}

impl std::error::Error for IntegrityError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_kind_classification() {
        assert_eq!(JsonKind::of(None), JsonKind::Missing);
        assert_eq!(JsonKind::of(Some(&json!(null))), JsonKind::Null);
        assert_eq!(JsonKind::of(Some(&json!([1]))), JsonKind::Array);
        assert_eq!(JsonKind::of(Some(&json!({}))).as_str(), "object");
    }

    #[test]
    fn options_error_messages_name_the_field() {
        let err = OptionsError::NotANumber {
            key: OptionKey::Min,
            found: JsonKind::String,
        };
        assert_eq!(
            err.to_string(),
            "RangeSliderOptions[\"min\"] should be a number, but string given instead"
        );
        assert_eq!(err.key(), Some(OptionKey::Min));
        assert_eq!(
            OptionsError::NotAnObject {
                found: JsonKind::Null
            }
            .key(),
            None
        );
    }

    #[test]
    fn integrity_error_messages() {
        let err = IntegrityError::ValueNotInRange {
            handles: vec![HandleId::new(0), HandleId::new(2)],
            min: 0.0,
            max: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "(min <= value <= max) violated for [handle_0, handle_2] with min=0, max=10"
        );
        let err = IntegrityError::IdMismatch {
            kind: IdKind::Tooltip,
        };
        assert_eq!(err.to_string(), "tooltip ids do not match tooltip entries one to one");
        let err = IntegrityError::NotFinite {
            key: OptionKey::Min,
            value: f64::NEG_INFINITY,
        };
        assert_eq!(
            err.to_string(),
            "RangeSliderOptions[\"min\"] should be a finite number, but -inf given instead"
        );
        let err = IntegrityError::UnknownActiveHandle {
            id: HandleId::new(4),
        };
        assert_eq!(err.to_string(), "active handle handle_4 is not among the handle ids");
    }
}

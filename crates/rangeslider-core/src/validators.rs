#![forbid(unsafe_code)]

//! Structural validation of raw options.
//!
//! Raw options arrive as an untyped [`serde_json::Value`]. Each `check_*`
//! function classifies one field and either returns the typed value or a
//! single [`OptionsError`]. [`check_range_slider_options`] runs every field
//! check and reports all failures at once.
//!
//! No cross-field rules live here (`min <= max` and friends belong to
//! [`integrity`](crate::integrity)).

use serde_json::{Map, Value};

use crate::config::Defaults;
use crate::error::{JsonKind, OptionKey, OptionsError};
use crate::options::{Grid, GridOption, OneOrMany, Options, Orientation, TooltipFormatter};

fn finite_number(v: &Value) -> Option<f64> {
    v.as_f64().filter(|n| n.is_finite())
}

fn number_field(key: OptionKey, v: Option<&Value>) -> Result<f64, OptionsError> {
    v.and_then(finite_number).ok_or(OptionsError::NotANumber {
        key,
        found: JsonKind::of(v),
    })
}

fn value_field(v: Option<&Value>) -> Result<OneOrMany<f64>, OptionsError> {
    let err = || OptionsError::NotANumberOrListOfNumbers {
        key: OptionKey::Value,
        found: JsonKind::of(v),
    };
    match v {
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(finite_number)
            .collect::<Option<Vec<_>>>()
            .map(OneOrMany::Many)
            .ok_or_else(err),
        Some(other) => finite_number(other).map(OneOrMany::One).ok_or_else(err),
        None => Err(err()),
    }
}

fn flags_field(key: OptionKey, v: Option<&Value>) -> Result<OneOrMany<bool>, OptionsError> {
    let err = || OptionsError::NotABooleanOrListOfBooleans {
        key,
        found: JsonKind::of(v),
    };
    match v {
        Some(Value::Bool(b)) => Ok(OneOrMany::One(*b)),
        Some(Value::Array(items)) => items
            .iter()
            .map(Value::as_bool)
            .collect::<Option<Vec<_>>>()
            .map(OneOrMany::Many)
            .ok_or_else(err),
        _ => Err(err()),
    }
}

fn orientation_field(v: Option<&Value>) -> Result<Orientation, OptionsError> {
    v.and_then(Value::as_str)
        .and_then(Orientation::parse)
        .ok_or_else(|| OptionsError::NotOneOf {
            key: OptionKey::Orientation,
            expected: &Orientation::NAMES,
            found: v.map_or_else(|| JsonKind::Missing.to_string(), Value::to_string),
        })
}

fn positive_cell_count(v: &Value) -> Option<u32> {
    v.as_u64()
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
}

fn grid_object(obj: &Map<String, Value>) -> Option<Grid> {
    if obj.len() != 2 {
        return None;
    }
    let is_visible = obj.get("isVisible")?.as_bool()?;
    let num_cells = obj
        .get("numCells")?
        .as_array()?
        .iter()
        .map(positive_cell_count)
        .collect::<Option<Vec<_>>>()?;
    Some(Grid::new(is_visible, num_cells))
}

fn grid_field(v: Option<&Value>) -> Result<GridOption, OptionsError> {
    let grid = match v {
        Some(Value::Bool(b)) => Some(GridOption::Toggle(*b)),
        Some(Value::Object(obj)) => grid_object(obj).map(GridOption::Custom),
        _ => None,
    };
    grid.ok_or(OptionsError::InvalidGridShape {
        found: JsonKind::of(v),
    })
}

/// True for `letter (letter | digit | '_' | '-')*`.
#[must_use]
pub fn is_css_class(raw: &str) -> bool {
    let mut chars = raw.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn css_class_field(v: Option<&Value>) -> Result<String, OptionsError> {
    match v.and_then(Value::as_str) {
        Some(raw) if is_css_class(raw) => Ok(raw.to_owned()),
        _ => Err(OptionsError::InvalidCssClass {
            found: v.map_or_else(|| JsonKind::Missing.to_string(), Value::to_string),
        }),
    }
}

/// A finite number or a non-empty list of finite numbers.
pub fn check_value(v: &Value) -> Result<OneOrMany<f64>, OptionsError> {
    value_field(Some(v))
}

/// A finite number.
pub fn check_min(v: &Value) -> Result<f64, OptionsError> {
    number_field(OptionKey::Min, Some(v))
}

/// A finite number.
pub fn check_max(v: &Value) -> Result<f64, OptionsError> {
    number_field(OptionKey::Max, Some(v))
}

/// A finite number.
pub fn check_step(v: &Value) -> Result<f64, OptionsError> {
    number_field(OptionKey::Step, Some(v))
}

/// Exactly `"horizontal"` or `"vertical"`; no trimming.
pub fn check_orientation(v: &Value) -> Result<Orientation, OptionsError> {
    orientation_field(Some(v))
}

/// A boolean or a list of booleans of any length.
pub fn check_tooltips(v: &Value) -> Result<OneOrMany<bool>, OptionsError> {
    flags_field(OptionKey::Tooltips, Some(v))
}

/// A boolean or a list of booleans of any length.
pub fn check_intervals(v: &Value) -> Result<OneOrMany<bool>, OptionsError> {
    flags_field(OptionKey::Intervals, Some(v))
}

/// A boolean, or exactly `{isVisible: bool, numCells: [positive int, ..]}`.
pub fn check_grid(v: &Value) -> Result<GridOption, OptionsError> {
    grid_field(Some(v))
}

/// A string matching `letter (letter | digit | '_' | '-')*`.
pub fn check_css_class(v: &Value) -> Result<String, OptionsError> {
    css_class_field(Some(v))
}

fn keep<T>(errors: &mut Vec<OptionsError>, result: Result<T, OptionsError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

/// Validate a whole raw options object using the built-in defaults.
pub fn check_range_slider_options(v: &Value) -> Result<Options, Vec<OptionsError>> {
    check_range_slider_options_with(v, &Defaults::default())
}

/// Validate a whole raw options object.
///
/// `value`, `min`, `max`, `step`, `orientation` and `tooltips` are required.
/// `cssClass`, `intervals` and `grid` are validated when present and taken
/// from `defaults` otherwise. Every failing field contributes one error.
/// The formatter is always [`TooltipFormatter::Plain`]; JSON cannot carry one.
pub fn check_range_slider_options_with(
    v: &Value,
    defaults: &Defaults,
) -> Result<Options, Vec<OptionsError>> {
    let Some(obj) = v.as_object() else {
        return Err(vec![OptionsError::NotAnObject {
            found: JsonKind::of(Some(v)),
        }]);
    };

    let mut errors = Vec::new();
    let value = keep(&mut errors, value_field(obj.get("value")));
    let min = keep(&mut errors, number_field(OptionKey::Min, obj.get("min")));
    let max = keep(&mut errors, number_field(OptionKey::Max, obj.get("max")));
    let step = keep(&mut errors, number_field(OptionKey::Step, obj.get("step")));
    let orientation = keep(&mut errors, orientation_field(obj.get("orientation")));
    let tooltips = keep(
        &mut errors,
        flags_field(OptionKey::Tooltips, obj.get("tooltips")),
    );
    let css_class = match obj.get("cssClass") {
        Some(raw) => keep(&mut errors, css_class_field(Some(raw))),
        None => Some(defaults.css_class.clone()),
    };
    let intervals = match obj.get("intervals") {
        Some(raw) => keep(&mut errors, flags_field(OptionKey::Intervals, Some(raw))),
        None => Some(OneOrMany::One(defaults.interval_fill)),
    };
    let grid = match obj.get("grid") {
        Some(raw) => keep(&mut errors, grid_field(Some(raw))),
        None => Some(GridOption::Toggle(defaults.grid_is_visible)),
    };

    match (
        value,
        min,
        max,
        step,
        orientation,
        tooltips,
        css_class,
        intervals,
        grid,
    ) {
        (
            Some(value),
            Some(min),
            Some(max),
            Some(step),
            Some(orientation),
            Some(tooltips),
            Some(css_class),
            Some(intervals),
            Some(grid),
        ) => Ok(Options {
            value,
            min,
            max,
            step,
            orientation,
            css_class,
            tooltips,
            tooltip_formatter: TooltipFormatter::Plain,
            intervals,
            grid,
        }),
        _ => {
            crate::warn!(
                errors = errors.len(),
                summary = %crate::logging::Summary(&errors),
                "options rejected"
            );
            Err(errors)
        }
    }
}

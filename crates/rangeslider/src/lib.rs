#![forbid(unsafe_code)]

//! Range slider public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the core types and offers [`RangeSlider`], which takes raw
//! JSON options through validation, normalization and the integrity check
//! before handing them to the model.

use std::fmt;

use rangeslider_core::logging::Summary;
use serde_json::Value;

// --- Core re-exports -------------------------------------------------------

pub use rangeslider_core::config::Defaults;
pub use rangeslider_core::convert::{data_to_options, data_to_state, options_to_data};
pub use rangeslider_core::data::{CollisionGroup, Data};
pub use rangeslider_core::error::{IntegrityError, OptionKey, OptionsError};
pub use rangeslider_core::id::{Endpoint, HandleId, IntervalId, TooltipId};
pub use rangeslider_core::integrity::check_data_integrity;
pub use rangeslider_core::model::{Model, ModelObserver, Proposal, Subscription, Update};
pub use rangeslider_core::options::{
    Grid, GridOption, OneOrMany, Options, Orientation, Origin, TooltipFormatter,
};
pub use rangeslider_core::state::{GridView, Handle, Interval, Role, State, Tooltip, Track};
pub use rangeslider_core::validators::check_range_slider_options;

pub use rangeslider_core as core;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for range slider configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Raw options were malformed.
    Options(Vec<OptionsError>),
    /// Options were well-formed but inconsistent.
    Integrity(Vec<IntegrityError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(errors) => write!(f, "invalid options: {}", Summary(errors)),
            Self::Integrity(errors) => write!(f, "inconsistent options: {}", Summary(errors)),
        }
    }
}

impl std::error::Error for Error {}

impl From<Vec<OptionsError>> for Error {
    fn from(errors: Vec<OptionsError>) -> Self {
        Self::Options(errors)
    }
}

impl From<Vec<IntegrityError>> for Error {
    fn from(errors: Vec<IntegrityError>) -> Self {
        Self::Integrity(errors)
    }
}

/// Standard result type for range slider APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Controller -----------------------------------------------------------

/// A configured slider: the model plus the configuration boundary.
#[derive(Debug, Default)]
pub struct RangeSlider {
    model: Model,
}

impl RangeSlider {
    /// Build from typed options.
    pub fn new(options: &Options) -> Result<Self> {
        let model = Model::try_from_data(options_to_data(options))?;
        Ok(Self { model })
    }

    /// Build from raw options.
    ///
    /// ```
    /// use rangeslider::RangeSlider;
    /// use serde_json::json;
    ///
    /// let slider = RangeSlider::from_json(&json!({
    ///     "value": [20, 80],
    ///     "min": 0,
    ///     "max": 100,
    ///     "step": 1,
    ///     "orientation": "horizontal",
    ///     "tooltips": true,
    /// }))
    /// .unwrap();
    /// assert_eq!(slider.state().handles.len(), 2);
    /// ```
    pub fn from_json(raw: &Value) -> Result<Self> {
        Self::new(&check_range_slider_options(raw)?)
    }

    /// Replace the configuration with raw options.
    ///
    /// On any error the current configuration is kept.
    pub fn apply_json(&mut self, raw: &Value) -> Result<&Data> {
        let options = check_range_slider_options(raw)?;
        Ok(self.model.apply_options(&options)?)
    }

    /// Replace the configuration with typed options.
    pub fn apply_options(&mut self, options: &Options) -> Result<&Data> {
        Ok(self.model.apply_options(options)?)
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.model.state()
    }

    #[must_use]
    pub fn options(&self) -> Options {
        self.model.options()
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Data, Error, HandleId, Model, ModelObserver, Options, Orientation, Proposal, RangeSlider,
        Result, State, TooltipId, Update,
    };

    pub use crate::core;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(min: f64) -> Value {
        json!({
            "value": [20, 80],
            "min": min,
            "max": 100,
            "step": 10,
            "orientation": "vertical",
            "tooltips": [true, false],
            "intervals": [false, true, false],
        })
    }

    #[test]
    fn from_json_builds_model() {
        let slider = RangeSlider::from_json(&raw(0.0)).unwrap();
        let state = slider.state();
        assert_eq!(state.handles.len(), 2);
        assert_eq!(state.track.orientation, Orientation::Vertical);
        assert_eq!(slider.options().tooltips, OneOrMany::Many(vec![true, false]));
    }

    #[test]
    fn malformed_json_reports_every_field() {
        let err = RangeSlider::from_json(&json!({ "min": "a", "orientation": "up" })).unwrap_err();
        let Error::Options(errors) = &err else {
            panic!("expected options errors, got {err:?}");
        };
        let keys: Vec<_> = errors.iter().filter_map(OptionsError::key).collect();
        assert!(keys.contains(&OptionKey::Value));
        assert!(keys.contains(&OptionKey::Min));
        assert!(keys.contains(&OptionKey::Orientation));
        assert!(err.to_string().starts_with("invalid options: "));
    }

    #[test]
    fn inconsistent_json_reports_integrity() {
        let err = RangeSlider::from_json(&raw(500.0)).unwrap_err();
        assert!(matches!(
            &err,
            Error::Integrity(errors)
                if errors.contains(&IntegrityError::MinIsGreaterThanMax { min: 500.0, max: 100.0 })
        ));
    }

    #[test]
    fn apply_json_keeps_configuration_on_error() {
        let mut slider = RangeSlider::from_json(&raw(0.0)).unwrap();
        assert!(slider.apply_json(&raw(500.0)).is_err());
        assert!(slider.apply_json(&json!([1, 2])).is_err());
        assert_eq!(slider.model().data().values(), vec![20.0, 80.0]);

        let applied = slider.apply_json(&json!({
            "value": 35,
            "min": 0,
            "max": 50,
            "step": 5,
            "orientation": "horizontal",
            "tooltips": false,
        }));
        assert_eq!(applied.map(Data::values), Ok(vec![35.0]));
        assert_eq!(slider.state().handles[0].position, 70.0);
    }

    #[test]
    fn model_mut_drives_updates() {
        let mut slider = RangeSlider::default();
        slider.model_mut().move_handle(&HandleId::new(0), 73.0);
        assert_eq!(slider.model().data().values(), vec![73.0]);
    }
}

#![forbid(unsafe_code)]

//! Core: options validation, normalized data, integrity rules, conversions,
//! and the propose/commit model behind a multi-handle range slider.
//!
//! ```text
//! serde_json::Value ──validators──▶ Options ──convert──▶ Data ──convert──▶ State
//!                                                         ▲
//!                                          Model (propose → integrity → commit)
//! ```

pub mod config;
pub mod convert;
pub mod data;
pub mod error;
pub mod id;
pub mod integrity;
pub mod logging;
pub mod model;
pub mod options;
pub mod position;
pub mod state;
pub mod validators;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};

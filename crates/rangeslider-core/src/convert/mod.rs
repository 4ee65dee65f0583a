#![forbid(unsafe_code)]

//! Pure conversions between the three representations.
//!
//! ```text
//! Options ──options_to_data──▶ Data ──data_to_state──▶ State
//!    ▲                          │
//!    └──────data_to_options─────┘
//! ```
//!
//! None of these functions fail: inputs are expected to have passed
//! [`validators`](crate::validators) (for options) or
//! [`integrity`](crate::integrity) (for data). Lookup misses fall back to
//! safe values instead of panicking.

mod data;
mod state;

pub use data::{data_to_options, options_to_data, options_to_data_with};
pub use state::data_to_state;

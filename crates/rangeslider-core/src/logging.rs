#![forbid(unsafe_code)]

//! Logging shim.
//!
//! The pipeline logs through `crate::debug!`, `crate::trace!`, `crate::warn!`
//! and `crate::debug_span!`. With the `tracing` feature these are the
//! `tracing` macros; without it they expand to nothing (spans to
//! [`NoopSpan`]), so call sites carry no `cfg` attributes.
//!
//! | Event | Level | Fields |
//! |-------|-------|--------|
//! | options rejected | warn | `errors`, `summary` |
//! | proposal | trace | `fields` |
//! | data committed | debug | `handles` |
//! | proposal rejected | warn | `errors`, `summary` |
//! | collisions reported | trace | `groups` |
//! | `rangeslider.derive_state` span | debug | `handles` |

use std::fmt;

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Expands to nothing without the `tracing` feature.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing without the `tracing` feature.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing without the `tracing` feature.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// Yields a [`NoopSpan`](crate::logging::NoopSpan) without the `tracing` feature.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Stand-in for `tracing::Span`.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Stand-in for `tracing::span::Entered`.
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;

/// One-line rendering of an error list for a log field.
///
/// Formats lazily, so a disabled level costs nothing.
pub struct Summary<'a, E>(pub &'a [E]);

impl<E: fmt::Display> fmt::Display for Summary<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, error) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntegrityError;

    #[test]
    fn summary_joins_messages() {
        let errors = [
            IntegrityError::MinIsGreaterThanMax {
                min: 5.0,
                max: 1.0,
            },
            IntegrityError::StepNotInRange {
                step: 1.0,
                span: -4.0,
            },
        ];
        let text = Summary(&errors).to_string();
        assert_eq!(text.matches("; ").count(), 1);
        assert!(text.starts_with(&errors[0].to_string()));
        assert_eq!(Summary::<IntegrityError>(&[]).to_string(), "");
    }

    #[test]
    fn debug_span_enters() {
        let span = crate::debug_span!("rangeslider.test", handles = 1);
        let _guard = span.enter();
    }
}

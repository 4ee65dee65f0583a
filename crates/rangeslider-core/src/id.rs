#![forbid(unsafe_code)]

//! Identity types for handles, tooltips and intervals.
//!
//! Ids are assigned once per slot when options are normalized (`handle_0`,
//! `handle_1`, ...) and survive value-only updates. Changing the number of
//! handles regenerates the whole set.

use std::fmt;

macro_rules! slot_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "state-persistence", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Prefix shared by every generated id of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Id for the slot at `index`.
            #[must_use]
            pub fn new(index: usize) -> Self {
                Self(make_id($prefix, index))
            }

            /// Wrap an arbitrary id string.
            #[must_use]
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// The id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }
    };
}

slot_id!(
    /// Identity of one draggable value marker.
    HandleId,
    "handle"
);
slot_id!(
    /// Identity of the label attached to a handle.
    TooltipId,
    "tooltip"
);
slot_id!(
    /// Identity of a track segment between two consecutive positions.
    IntervalId,
    "interval"
);

impl TooltipId {
    /// Id of the `index`-th merged tooltip produced for a collision run.
    #[must_use]
    pub fn merged(index: usize) -> Self {
        Self(make_id("tooltip-merged", index))
    }
}

/// Builds `"{prefix}_{index}"`.
#[must_use]
pub fn make_id(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index}")
}

/// Generates `count` sequential ids.
pub(crate) fn sequential<T>(count: usize, make: impl Fn(usize) -> T) -> Vec<T> {
    (0..count).map(make).collect()
}

/// One end of an interval: either a track boundary or a handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    /// The `0%` end of the track.
    TrackStart,
    /// A handle position.
    Handle(HandleId),
    /// The `100%` end of the track.
    TrackEnd,
}

impl Endpoint {
    /// The handle id, if this endpoint is a handle.
    #[must_use]
    pub fn handle_id(&self) -> Option<&HandleId> {
        match self {
            Self::Handle(id) => Some(id),
            Self::TrackStart | Self::TrackEnd => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrackStart => f.write_str("first"),
            Self::Handle(id) => write!(f, "{id}"),
            Self::TrackEnd => f.write_str("last"),
        }
    }
}

#![forbid(unsafe_code)]

//! Cross-field integrity of normalized data.
//!
//! Every check runs; violations accumulate. The model commits a candidate
//! only when [`check_data_integrity`] returns `Ok`.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::data::Data;
use crate::error::{IdKind, IntegrityError, OptionKey};
use crate::id::HandleId;

fn bounds_are_finite(data: &Data) -> Vec<IntegrityError> {
    [
        (OptionKey::Min, data.min),
        (OptionKey::Max, data.max),
        (OptionKey::Step, data.step),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_finite())
    .map(|(key, value)| IntegrityError::NotFinite { key, value })
    .collect()
}

fn min_not_greater_than_max(data: &Data) -> Option<IntegrityError> {
    (data.min > data.max).then_some(IntegrityError::MinIsGreaterThanMax {
        min: data.min,
        max: data.max,
    })
}

fn values_in_range(data: &Data) -> Option<IntegrityError> {
    let outside: Vec<HandleId> = data
        .handle_ids
        .iter()
        .filter(|id| {
            data.handle_value(id)
                .is_some_and(|v| !(data.min..=data.max).contains(&v))
        })
        .cloned()
        .collect();
    (!outside.is_empty()).then(|| IntegrityError::ValueNotInRange {
        handles: outside,
        min: data.min,
        max: data.max,
    })
}

fn step_in_range(data: &Data) -> Option<IntegrityError> {
    let span = data.span();
    (!(0.0..=span).contains(&data.step)).then_some(IntegrityError::StepNotInRange {
        step: data.step,
        span,
    })
}

fn tooltips_match_values(data: &Data) -> Option<IntegrityError> {
    let tooltips = data.tooltip_ids.len();
    let values = data.handle_ids.len();
    (tooltips != 1 && tooltips != values)
        .then_some(IntegrityError::TooltipsDoNotMatchValues { tooltips, values })
}

fn intervals_match_values(data: &Data) -> Option<IntegrityError> {
    let intervals = data.interval_ids.len();
    let values = data.handle_ids.len();
    (intervals != values + 1)
        .then_some(IntegrityError::IntervalsDoNotMatchValues { intervals, values })
}

/// True when `ids` has no duplicates and names exactly the keys of `map`.
fn is_bijection<K: Eq + Hash, V>(ids: &[K], map: &HashMap<K, V>) -> bool {
    let unique: HashSet<&K> = ids.iter().collect();
    unique.len() == ids.len() && ids.len() == map.len() && ids.iter().all(|id| map.contains_key(id))
}

fn ids_match_entries(data: &Data) -> Vec<IntegrityError> {
    [
        (IdKind::Handle, is_bijection(&data.handle_ids, &data.handles)),
        (IdKind::Tooltip, is_bijection(&data.tooltip_ids, &data.tooltips)),
        (IdKind::Interval, is_bijection(&data.interval_ids, &data.intervals)),
    ]
    .into_iter()
    .filter(|(_, ok)| !ok)
    .map(|(kind, _)| IntegrityError::IdMismatch { kind })
    .collect()
}

fn active_handle_is_known(data: &Data) -> Option<IntegrityError> {
    data.active_handle_id
        .as_ref()
        .filter(|id| !data.handle_ids.contains(id))
        .map(|id| IntegrityError::UnknownActiveHandle { id: id.clone() })
}

/// Run every integrity check over `data`.
///
/// Checks, in order: `min`, `max` and `step` are finite; `min <= max`;
/// every value within `[min, max]`; `0 <= step <= max - min`; tooltip count
/// is 1 or the handle count; interval count is handle count + 1; each id
/// list is a bijection with its map; the active handle, if any, is a known
/// handle. With finite bounds, NaN or infinite values fail the range check.
pub fn check_data_integrity(data: &Data) -> Result<(), Vec<IntegrityError>> {
    let mut errors = bounds_are_finite(data);
    errors.extend(
        [
            min_not_greater_than_max(data),
            values_in_range(data),
            step_in_range(data),
            tooltips_match_values(data),
            intervals_match_values(data),
        ]
        .into_iter()
        .flatten(),
    );
    errors.extend(ids_match_entries(data));
    errors.extend(active_handle_is_known(data));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#![forbid(unsafe_code)]

//! `Options ⇄ Data`.

use crate::config::Defaults;
use crate::data::Data;
use crate::id::{self, HandleId, IntervalId, TooltipId};
use crate::options::{GridOption, OneOrMany, Options};
use crate::position::snap_and_bound;

/// Resize `items` to `len`, filling new slots with `fill`.
///
/// Lists longer than `len` are cut; a padded slot never repeats a given value.
fn fill_to<T: Clone>(mut items: Vec<T>, len: usize, fill: T) -> Vec<T> {
    items.resize(len, fill);
    items
}

/// Normalize options with the built-in defaults.
#[must_use]
pub fn options_to_data(options: &Options) -> Data {
    options_to_data_with(options, &Defaults::default())
}

/// Normalize options into identity-keyed data.
///
/// - scalars become one-element lists;
/// - tooltips are resized to one per handle, intervals to handles + 1, with
///   `defaults` supplying the fill values;
/// - every value is snapped to the step grid, then clamped to `[min, max]`;
/// - ids are freshly numbered from zero;
/// - no handle is active and no collisions are known yet.
#[must_use]
pub fn options_to_data_with(options: &Options, defaults: &Defaults) -> Data {
    let values = options.value.to_vec();
    let count = values.len();
    let tooltips = fill_to(options.tooltips.to_vec(), count, defaults.tooltip_fill);
    let intervals = fill_to(
        options.intervals.to_vec(),
        count + 1,
        defaults.interval_fill,
    );

    let handle_ids = id::sequential(count, HandleId::new);
    let tooltip_ids = id::sequential(count, TooltipId::new);
    let interval_ids = id::sequential(count + 1, IntervalId::new);

    Data {
        min: options.min,
        max: options.max,
        step: options.step,
        orientation: options.orientation,
        css_class: options.css_class.clone(),
        tooltip_formatter: options.tooltip_formatter.clone(),
        handles: handle_ids
            .iter()
            .cloned()
            .zip(
                values
                    .iter()
                    .map(|v| snap_and_bound(options.min, options.max, options.step, *v)),
            )
            .collect(),
        handle_ids,
        active_handle_id: None,
        tooltips: tooltip_ids.iter().cloned().zip(tooltips).collect(),
        tooltip_ids,
        tooltip_collisions: Vec::new(),
        intervals: interval_ids.iter().cloned().zip(intervals).collect(),
        interval_ids,
        grid: options.grid.resolve(&defaults.grid_num_cells),
    }
}

/// Project data back to options.
///
/// Lists are rebuilt by walking the id lists. The active handle and the
/// collision report are transient and not carried over.
#[must_use]
pub fn data_to_options(data: &Data) -> Options {
    Options {
        value: OneOrMany::Many(data.values()),
        min: data.min,
        max: data.max,
        step: data.step,
        orientation: data.orientation,
        css_class: data.css_class.clone(),
        tooltips: OneOrMany::Many(
            data.tooltip_ids
                .iter()
                .filter_map(|id| data.tooltips.get(id).copied())
                .collect(),
        ),
        tooltip_formatter: data.tooltip_formatter.clone(),
        intervals: OneOrMany::Many(
            data.interval_ids
                .iter()
                .filter_map(|id| data.intervals.get(id).copied())
                .collect(),
        ),
        grid: GridOption::Custom(data.grid.clone()),
    }
}

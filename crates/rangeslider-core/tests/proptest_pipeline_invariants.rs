//! Property-based invariant tests for the options → data → state pipeline.
//!
//! 1. Normalized, on-step options survive `options → data → options`.
//! 2. Id lists and maps stay in bijection with the right counts.
//! 3. Short tooltip/interval lists are padded with the fill value.
//! 4. Normalized values lie on the step grid and within `[min, max]`.
//! 5. Valid normalized options pass the integrity check.
//! 6. State derivation is idempotent.
//! 7. Every rendered position lies within `[0, 100]`.
//! 8. Raw JSON built from valid options passes the validators.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rangeslider_core::convert::{data_to_options, data_to_state, options_to_data};
use rangeslider_core::data::CollisionGroup;
use rangeslider_core::id::TooltipId;
use rangeslider_core::integrity::check_data_integrity;
use rangeslider_core::options::{GridOption, OneOrMany, Options, Orientation};
use rangeslider_core::validators::check_range_slider_options;
use serde_json::json;

// ── Helpers ─────────────────────────────────────────────────────────────

/// `(min, max, step)` with both bounds on the step grid.
fn bounds_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
    (1u32..=5, -50i32..=0, 1i32..=60).prop_map(|(step, lo, width)| {
        let step = f64::from(step);
        let min = f64::from(lo) * step;
        let max = f64::from(lo + width) * step;
        (min, max, step)
    })
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

/// Options whose every list already has its normalized length.
fn normalized_options() -> impl Strategy<Value = Options> {
    (bounds_strategy(), 1usize..=6, orientation_strategy(), any::<bool>())
        .prop_flat_map(|((min, max, step), count, orientation, grid)| {
            let steps = ((max - min) / step) as i64;
            (
                prop::collection::vec(0..=steps, count),
                prop::collection::vec(any::<bool>(), count),
                prop::collection::vec(any::<bool>(), count + 1),
            )
                .prop_map(move |(offsets, tooltips, intervals)| {
                    let values: Vec<f64> = offsets
                        .iter()
                        .map(|k| min + *k as f64 * step)
                        .collect();
                    let mut options = Options::default()
                        .value(values)
                        .min(min)
                        .max(max)
                        .step(step)
                        .orientation(orientation)
                        .tooltips(tooltips)
                        .intervals(intervals)
                        .grid(grid);
                    options.grid = GridOption::Custom(options.grid.resolve(&[5]));
                    options
                })
        })
}

/// Options with arbitrary values and list lengths.
fn loose_options() -> impl Strategy<Value = Options> {
    (
        bounds_strategy(),
        prop::collection::vec(-5000.0f64..5000.0, 1..8),
        prop::collection::vec(any::<bool>(), 0..10),
        prop::collection::vec(any::<bool>(), 0..10),
    )
        .prop_map(|((min, max, step), values, tooltips, intervals)| {
            Options::default()
                .value(values)
                .min(min)
                .max(max)
                .step(step)
                .tooltips(tooltips)
                .intervals(intervals)
        })
}

fn collisions_strategy(count: usize) -> impl Strategy<Value = Vec<CollisionGroup>> {
    prop::collection::vec(prop::collection::btree_set(0..count, 1..=count), 0..3).prop_map(
        |groups| {
            groups
                .into_iter()
                .map(|g| g.into_iter().map(TooltipId::new).collect::<BTreeSet<_>>())
                .collect()
        },
    )
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalized_options_round_trip(options in normalized_options()) {
        let back = data_to_options(&options_to_data(&options));
        prop_assert_eq!(back, options);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-5. Normalization
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ids_and_maps_are_bijective(options in loose_options()) {
        let data = options_to_data(&options);
        let count = options.value.len();

        prop_assert_eq!(data.handle_ids.len(), count);
        prop_assert_eq!(data.tooltip_ids.len(), count);
        prop_assert_eq!(data.interval_ids.len(), count + 1);
        prop_assert_eq!(data.handles.len(), count);
        prop_assert_eq!(data.tooltips.len(), count);
        prop_assert_eq!(data.intervals.len(), count + 1);
        prop_assert!(data.handle_ids.iter().all(|id| data.handles.contains_key(id)));
        prop_assert!(data.tooltip_ids.iter().all(|id| data.tooltips.contains_key(id)));
        prop_assert!(data.interval_ids.iter().all(|id| data.intervals.contains_key(id)));
    }

    #[test]
    fn short_lists_are_padded_with_fill(options in loose_options()) {
        let data = options_to_data(&options);
        let given = options.tooltips.to_vec();
        for (idx, id) in data.tooltip_ids.iter().enumerate() {
            let expected = given.get(idx).copied().unwrap_or(true);
            prop_assert_eq!(data.tooltips[id], expected);
        }
        let given = options.intervals.to_vec();
        for (idx, id) in data.interval_ids.iter().enumerate() {
            let expected = given.get(idx).copied().unwrap_or(false);
            prop_assert_eq!(data.intervals[id], expected);
        }
    }

    #[test]
    fn values_are_on_grid_and_in_range(options in loose_options()) {
        let data = options_to_data(&options);
        for value in data.values() {
            prop_assert!((data.min..=data.max).contains(&value), "{value} out of range");
            let ratio = value / data.step;
            prop_assert!((ratio - ratio.round()).abs() < 1e-9, "{value} off grid");
        }
    }

    #[test]
    fn normalized_valid_options_pass_integrity(options in loose_options()) {
        prop_assert_eq!(check_data_integrity(&options_to_data(&options)), Ok(()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. State derivation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn state_is_idempotent_and_positions_in_range(
        (options, groups) in normalized_options()
            .prop_flat_map(|o| {
                let count = o.value.len();
                (Just(o), collisions_strategy(count))
            })
    ) {
        let mut data = options_to_data(&options);
        data.tooltip_collisions = groups;

        let state = data_to_state(&data);
        prop_assert_eq!(&state, &data_to_state(&data));

        let positions = state
            .handles
            .iter()
            .map(|h| h.position)
            .chain(state.tooltips.iter().map(|t| t.position))
            .chain(state.intervals.iter().flat_map(|i| [i.from, i.to]));
        for position in positions {
            prop_assert!((0.0..=100.0).contains(&position), "position {position}");
        }

        let colliding = state.tooltips.iter().filter(|t| t.has_collisions).count();
        let merged = state.tooltips.iter().filter(|t| t.is_merged()).count();
        prop_assert!(merged <= colliding);
        prop_assert_eq!(state.intervals.len(), state.handles.len() + 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Validators accept well-formed raw options
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn raw_json_of_valid_options_validates(options in normalized_options()) {
        let OneOrMany::Many(values) = &options.value else {
            return Err(TestCaseError::fail("normalized options hold a list"));
        };
        let raw = json!({
            "value": values,
            "min": options.min,
            "max": options.max,
            "step": options.step,
            "orientation": options.orientation.as_str(),
            "tooltips": options.tooltips.to_vec(),
            "intervals": options.intervals.to_vec(),
        });
        let parsed = check_range_slider_options(&raw).map_err(|e| {
            TestCaseError::fail(format!("rejected: {e:?}"))
        })?;
        prop_assert_eq!(parsed.value, options.value.clone());
        prop_assert_eq!(parsed.orientation, options.orientation);
    }
}

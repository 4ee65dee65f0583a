//! Property tests for the controller's configuration boundary.
//!
//! Whatever raw JSON arrives, the controller either accepts it or keeps its
//! previous configuration; the held data always passes the integrity check.

use proptest::prelude::*;
use rangeslider::prelude::*;
use rangeslider::check_data_integrity;
use serde_json::{Value, json};

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-200.0f64..200.0).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
        prop::collection::vec(-200i32..200, 0..4).prop_map(Value::from),
        prop::collection::vec(any::<bool>(), 0..5).prop_map(Value::from),
    ]
}

fn raw_options() -> impl Strategy<Value = Value> {
    (
        json_leaf(),
        json_leaf(),
        json_leaf(),
        json_leaf(),
        prop_oneof![Just(json!("horizontal")), Just(json!("vertical")), json_leaf()],
        json_leaf(),
    )
        .prop_map(|(value, min, max, step, orientation, tooltips)| {
            json!({
                "value": value,
                "min": min,
                "max": max,
                "step": step,
                "orientation": orientation,
                "tooltips": tooltips,
            })
        })
}

proptest! {
    #[test]
    fn apply_json_never_breaks_integrity(raws in prop::collection::vec(raw_options(), 1..6)) {
        let mut slider = RangeSlider::default();
        for raw in &raws {
            let before = slider.model().data().clone();
            if slider.apply_json(raw).is_err() {
                prop_assert_eq!(slider.model().data(), &before);
            }
            prop_assert_eq!(check_data_integrity(slider.model().data()), Ok(()));
        }
    }

    #[test]
    fn accepted_json_renders_one_handle_per_value(raw in raw_options()) {
        if let Ok(slider) = RangeSlider::from_json(&raw) {
            let state = slider.state();
            prop_assert_eq!(state.handles.len(), slider.model().data().handle_ids.len());
            prop_assert_eq!(state.intervals.len(), state.handles.len() + 1);
        }
    }
}

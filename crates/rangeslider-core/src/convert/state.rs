#![forbid(unsafe_code)]

//! `Data → State`.
//!
//! # Tooltip merging
//!
//! The renderer reports groups of tooltips that overlap on screen. Walking
//! tooltips in handle order, every maximal run of consecutive colliding
//! tooltips yields one merged tooltip:
//!
//! - position: midpoint of the first and last member;
//! - content: member values joined by `" - "` when the interval to the right
//!   of a member's handle is visible, `"; "` otherwise; no trailing connector.
//!
//! Base tooltips stay in the list (flagged `has_collisions`) and merged ones
//! are appended after them.

use crate::data::Data;
use crate::id::{Endpoint, HandleId, TooltipId};
use crate::position::relative_position;
use crate::state::{GridView, Handle, Interval, Role, State, Tooltip, Track};

const CONNECTOR_VISIBLE: &str = " - ";
const CONNECTOR_HIDDEN: &str = "; ";

/// Position of one handle; unmapped handles sit at `min`.
fn handle_position(data: &Data, id: &HandleId) -> f64 {
    let value = data.handle_value(id).unwrap_or(data.min);
    relative_position(data.min, data.max, value)
}

fn make_handles(data: &Data) -> Vec<Handle> {
    let css_class = Role::Handle.css_class(&data.css_class);
    data.handle_ids
        .iter()
        .map(|id| Handle {
            id: id.clone(),
            orientation: data.orientation,
            position: handle_position(data, id),
            is_active: data.active_handle_id.as_ref() == Some(id),
            css_class: css_class.clone(),
            role: Role::Handle,
        })
        .collect()
}

fn format_handle(data: &Data, id: &HandleId) -> String {
    data.tooltip_formatter
        .format(data.handle_value(id).unwrap_or(data.min))
}

fn merged_content(data: &Data, group: &[&Tooltip]) -> String {
    let mut content = String::new();
    let mut connector = CONNECTOR_HIDDEN;
    let handle_ids = group.iter().flat_map(|t| t.handle_ids.iter());
    for (n, handle_id) in handle_ids.enumerate() {
        if n > 0 {
            content.push_str(connector);
        }
        content.push_str(&format_handle(data, handle_id));
        let next_interval = data.handle_index(handle_id).map_or(0, |i| i + 1);
        connector = if data.interval_visible_at(next_interval) {
            CONNECTOR_VISIBLE
        } else {
            CONNECTOR_HIDDEN
        };
    }
    content
}

/// Maximal runs of consecutive colliding tooltips.
fn collision_runs(tooltips: &[Tooltip]) -> Vec<Vec<&Tooltip>> {
    let mut runs: Vec<Vec<&Tooltip>> = Vec::new();
    let mut current: Vec<&Tooltip> = Vec::new();
    for tooltip in tooltips {
        if tooltip.has_collisions {
            current.push(tooltip);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn make_tooltips(data: &Data) -> Vec<Tooltip> {
    let css_class = Role::Tooltip.css_class(&data.css_class);
    let mut tooltips: Vec<Tooltip> = data
        .handle_ids
        .iter()
        .zip(&data.tooltip_ids)
        .map(|(handle_id, tooltip_id)| Tooltip {
            id: tooltip_id.clone(),
            handle_ids: vec![handle_id.clone()],
            content: format_handle(data, handle_id),
            orientation: data.orientation,
            has_collisions: data.has_collision(tooltip_id),
            is_visible: data.tooltips.get(tooltip_id).copied().unwrap_or(false),
            position: handle_position(data, handle_id),
            css_class: css_class.clone(),
            role: Role::Tooltip,
        })
        .collect();

    let merged: Vec<Tooltip> = collision_runs(&tooltips)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, group)| {
            let (first, last) = (group.first()?, group.last()?);
            Some(Tooltip {
                id: TooltipId::merged(idx),
                handle_ids: group
                    .iter()
                    .flat_map(|t| t.handle_ids.iter().cloned())
                    .collect(),
                content: merged_content(data, &group),
                orientation: data.orientation,
                has_collisions: false,
                is_visible: true,
                position: (first.position + last.position) / 2.0,
                css_class: css_class.clone(),
                role: Role::MergedTooltip,
            })
        })
        .collect();

    tooltips.extend(merged);
    tooltips
}

fn make_intervals(data: &Data) -> Vec<Interval> {
    let css_class = Role::Interval.css_class(&data.css_class);
    let stops: Vec<(Endpoint, f64)> = std::iter::once((Endpoint::TrackStart, 0.0))
        .chain(
            data.handle_ids
                .iter()
                .map(|id| (Endpoint::Handle(id.clone()), handle_position(data, id))),
        )
        .chain(std::iter::once((Endpoint::TrackEnd, 100.0)))
        .collect();

    data.interval_ids
        .iter()
        .zip(stops.windows(2))
        .map(|(id, pair)| {
            let (start, from) = pair[0].clone();
            let (end, to) = pair[1].clone();
            Interval {
                id: id.clone(),
                from,
                to,
                bounds: (start, end),
                orientation: data.orientation,
                is_visible: data.intervals.get(id).copied().unwrap_or(false),
                css_class: css_class.clone(),
                role: Role::Interval,
            }
        })
        .collect()
}

/// Derive the render view model.
///
/// Pure: equal inputs give structurally equal states.
#[must_use]
pub fn data_to_state(data: &Data) -> State {
    let span = crate::debug_span!("rangeslider.derive_state", handles = data.handle_ids.len());
    let _guard = span.enter();

    State {
        css_class: data.css_class.clone(),
        track: Track {
            orientation: data.orientation,
            css_class: Role::Track.css_class(&data.css_class),
        },
        handles: make_handles(data),
        tooltips: make_tooltips(data),
        intervals: make_intervals(data),
        grid: GridView {
            orientation: data.orientation,
            is_visible: data.grid.is_visible,
            num_cells: data.grid.num_cells.clone(),
            css_class: Role::Grid.css_class(&data.css_class),
        },
    }
}

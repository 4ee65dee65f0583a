#![forbid(unsafe_code)]

//! Owner of the canonical [`Data`] with a propose/commit protocol.
//!
//! # Design
//!
//! A [`Proposal`] maps fields to pure functions of the current data. Every
//! function sees the same pre-proposal snapshot; their results are merged
//! over it to form a candidate. The candidate is committed only if it passes
//! [`check_data_integrity`]; otherwise it is dropped whole.
//!
//! # Invariants
//!
//! 1. The held data always passes the integrity check.
//! 2. A rejected proposal leaves the held data untouched.
//! 3. Observers are notified after the commit, in registration order.
//! 4. Callers only ever see `&Data` or clones; mutation goes through
//!    [`Model::propose`].
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Proposal breaks integrity | `on_integrity_error` fires, data unchanged |
//! | Construction input breaks integrity | Model starts from pure defaults |
//! | Observer dropped | Pruned on the next notification |

use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::Defaults;
use crate::convert::{data_to_options, data_to_state, options_to_data_with};
use crate::data::{CollisionGroup, Data};
use crate::error::IntegrityError;
use crate::id::{HandleId, IntervalId, TooltipId};
use crate::integrity::check_data_integrity;
use crate::options::{Grid, Options, Orientation, TooltipFormatter};
use crate::position::snap_and_bound;
use crate::state::State;

/// Receives model notifications.
pub trait ModelObserver {
    /// New data was committed.
    fn on_update(&self, _data: &Data) {}

    /// A proposal was rejected.
    fn on_integrity_error(&self, _errors: &[IntegrityError]) {}
}

type FieldFn<T> = Box<dyn FnOnce(&Data) -> T>;

macro_rules! proposal_fields {
    ($($field:ident: $ty:ty),* $(,)?) => {
        /// A set of field updates computed from the current data.
        ///
        /// ```
        /// use rangeslider_core::model::{Model, Proposal};
        ///
        /// let mut model = Model::default();
        /// model.propose(Proposal::new().max(|d| d.max * 2.0));
        /// assert_eq!(model.get(|d| d.max), 200.0);
        /// ```
        #[derive(Default)]
        pub struct Proposal {
            $($field: Option<FieldFn<$ty>>,)*
        }

        impl Proposal {
            $(
                #[doc = concat!("Compute `", stringify!($field), "` from the current data.")]
                #[must_use]
                pub fn $field(mut self, f: impl FnOnce(&Data) -> $ty + 'static) -> Self {
                    self.$field = Some(Box::new(f));
                    self
                }
            )*

            /// Names of the fields this proposal touches.
            #[must_use]
            pub fn fields(&self) -> Vec<&'static str> {
                let mut names = Vec::new();
                $(
                    if self.$field.is_some() {
                        names.push(stringify!($field));
                    }
                )*
                names
            }

            /// Build the candidate: every function reads `current`.
            fn apply(self, current: &Data) -> Data {
                let mut next = current.clone();
                $(
                    if let Some(f) = self.$field {
                        next.$field = f(current);
                    }
                )*
                next
            }
        }
    };
}

proposal_fields! {
    min: f64,
    max: f64,
    step: f64,
    orientation: Orientation,
    css_class: String,
    tooltip_formatter: TooltipFormatter,
    handles: HashMap<HandleId, f64>,
    handle_ids: Vec<HandleId>,
    active_handle_id: Option<HandleId>,
    tooltips: HashMap<TooltipId, bool>,
    tooltip_ids: Vec<TooltipId>,
    tooltip_collisions: Vec<CollisionGroup>,
    intervals: HashMap<IntervalId, bool>,
    interval_ids: Vec<IntervalId>,
    grid: Grid,
}

impl Proposal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

impl fmt::Debug for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proposal")
            .field("fields", &self.fields())
            .finish()
    }
}

/// A single absolute field assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Min(f64),
    Max(f64),
    Step(f64),
    Orientation(Orientation),
    CssClass(String),
    TooltipFormatter(TooltipFormatter),
    /// Set one handle's value as given (no snapping).
    Handle(HandleId, f64),
    ActiveHandle(Option<HandleId>),
    Tooltip(TooltipId, bool),
    TooltipCollisions(Vec<CollisionGroup>),
    Interval(IntervalId, bool),
    Grid(Grid),
}

impl From<Update> for Proposal {
    fn from(update: Update) -> Self {
        let p = Proposal::new();
        match update {
            Update::Min(v) => p.min(move |_| v),
            Update::Max(v) => p.max(move |_| v),
            Update::Step(v) => p.step(move |_| v),
            Update::Orientation(v) => p.orientation(move |_| v),
            Update::CssClass(v) => p.css_class(move |_| v),
            Update::TooltipFormatter(v) => p.tooltip_formatter(move |_| v),
            Update::Handle(id, v) => p.handles(move |d| {
                let mut handles = d.handles.clone();
                handles.insert(id, v);
                handles
            }),
            Update::ActiveHandle(v) => p.active_handle_id(move |_| v),
            Update::Tooltip(id, v) => p.tooltips(move |d| {
                let mut tooltips = d.tooltips.clone();
                tooltips.insert(id, v);
                tooltips
            }),
            Update::TooltipCollisions(v) => p.tooltip_collisions(move |_| v),
            Update::Interval(id, v) => p.intervals(move |d| {
                let mut intervals = d.intervals.clone();
                intervals.insert(id, v);
                intervals
            }),
            Update::Grid(v) => p.grid(move |_| v),
        }
    }
}

/// RAII guard for a model observer.
///
/// Dropping it unsubscribes the observer.
pub struct Subscription {
    _guard: Rc<dyn ModelObserver>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Holder of the slider's single source of truth.
pub struct Model {
    data: Data,
    defaults: Defaults,
    observers: Vec<Weak<dyn ModelObserver>>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Proposal::new())
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("data", &self.data)
            .field("observer_count", &self.observers.len())
            .finish()
    }
}

impl Model {
    /// Apply `overrides` over the built-in default data.
    ///
    /// Falls back to the pure defaults if the result is inconsistent.
    #[must_use]
    pub fn new(overrides: Proposal) -> Self {
        Self::with_defaults(Defaults::default(), overrides)
    }

    /// Apply `overrides` over the data derived from `defaults`.
    #[must_use]
    pub fn with_defaults(defaults: Defaults, overrides: Proposal) -> Self {
        let base = options_to_data_with(&defaults.options(), &defaults);
        let merged = overrides.apply(&base);
        let data = match check_data_integrity(&merged) {
            Ok(()) => merged,
            Err(_errors) => {
                crate::warn!(
                    errors = _errors.len(),
                    summary = %crate::logging::Summary(&_errors),
                    "initial data inconsistent, using defaults"
                );
                base
            }
        };
        Self {
            data,
            defaults,
            observers: Vec::new(),
        }
    }

    /// Start from already-normalized data, rejecting it if inconsistent.
    pub fn try_from_data(data: Data) -> Result<Self, Vec<IntegrityError>> {
        check_data_integrity(&data)?;
        Ok(Self {
            data,
            defaults: Defaults::default(),
            observers: Vec::new(),
        })
    }

    /// Start from options; inconsistent options fall back to the defaults.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let defaults = Defaults::default();
        let data = options_to_data_with(options, &defaults);
        Self::try_from_data(data).unwrap_or_else(|_errors| {
            crate::warn!(
                errors = _errors.len(),
                summary = %crate::logging::Summary(&_errors),
                "options inconsistent, using defaults"
            );
            Self::with_defaults(defaults, Proposal::new())
        })
    }

    /// Read from the current data.
    pub fn get<R>(&self, read: impl FnOnce(&Data) -> R) -> R {
        read(&self.data)
    }

    /// Read-only view of the current data.
    #[must_use]
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// The current data projected back to options.
    #[must_use]
    pub fn options(&self) -> Options {
        data_to_options(&self.data)
    }

    /// The render view model for the current data.
    #[must_use]
    pub fn state(&self) -> State {
        data_to_state(&self.data)
    }

    /// Register an observer. It stays subscribed while the guard lives.
    pub fn subscribe(&mut self, observer: impl ModelObserver + 'static) -> Subscription {
        let strong: Rc<dyn ModelObserver> = Rc::new(observer);
        self.observers.push(Rc::downgrade(&strong));
        Subscription { _guard: strong }
    }

    /// Number of registered observers, including ones not yet pruned.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Propose a change; returns the data held afterwards.
    ///
    /// On rejection the prior data is returned and observers receive the
    /// integrity errors.
    pub fn propose(&mut self, proposal: Proposal) -> &Data {
        let _ = self.try_propose(proposal);
        &self.data
    }

    /// Propose a change and report the outcome.
    pub fn try_propose(&mut self, proposal: Proposal) -> Result<&Data, Vec<IntegrityError>> {
        crate::trace!(fields = ?proposal.fields(), "proposal");
        let candidate = proposal.apply(&self.data);
        self.commit(candidate)
    }

    /// Assign one field.
    pub fn set(&mut self, update: Update) -> &Data {
        self.propose(update.into())
    }

    /// Move a handle, snapping to the step grid and clamping to the bounds.
    ///
    /// Unknown handles are rejected by the integrity check.
    pub fn move_handle(&mut self, id: &HandleId, value: f64) -> &Data {
        let id = id.clone();
        self.propose(Proposal::new().handles(move |d| {
            let mut handles = d.handles.clone();
            handles.insert(id, snap_and_bound(d.min, d.max, d.step, value));
            handles
        }))
    }

    /// Mark the handle being dragged, or none.
    pub fn set_active_handle(&mut self, id: Option<HandleId>) -> &Data {
        self.set(Update::ActiveHandle(id))
    }

    /// Store the collision groups measured by the renderer.
    pub fn report_collisions(&mut self, groups: Vec<CollisionGroup>) -> &Data {
        crate::trace!(groups = groups.len(), "collisions reported");
        self.set(Update::TooltipCollisions(groups))
    }

    /// Replace the whole configuration.
    ///
    /// The options are normalized with fresh ids, so identity does not
    /// survive this path. Inconsistent options are rejected and the current
    /// data is kept.
    pub fn apply_options(&mut self, options: &Options) -> Result<&Data, Vec<IntegrityError>> {
        let candidate = options_to_data_with(options, &self.defaults);
        self.commit(candidate)
    }

    fn commit(&mut self, candidate: Data) -> Result<&Data, Vec<IntegrityError>> {
        match check_data_integrity(&candidate) {
            Ok(()) => {
                self.data = candidate;
                crate::debug!(handles = self.data.handle_ids.len(), "data committed");
                self.notify(|observer, data| observer.on_update(data));
                Ok(&self.data)
            }
            Err(errors) => {
                crate::warn!(
                    errors = errors.len(),
                    summary = %crate::logging::Summary(&errors),
                    "proposal rejected"
                );
                self.notify(|observer, _| observer.on_integrity_error(&errors));
                Err(errors)
            }
        }
    }

    fn notify(&mut self, mut deliver: impl FnMut(&dyn ModelObserver, &Data)) {
        self.observers.retain(|w| w.strong_count() > 0);
        let live: Vec<Rc<dyn ModelObserver>> =
            self.observers.iter().filter_map(Weak::upgrade).collect();
        for observer in &live {
            deliver(observer.as_ref(), &self.data);
        }
    }
}

//! The dual-handle range control.
//!
//! # State machine
//!
//! ```text
//!            Down(x) ── pick nearer handle, acquire session, move handle
//!   Idle ─────────────────────────────────────────────▶ Dragging(handle)
//!    ▲                                                      │   ▲
//!    │            Up / Cancel ── release session            │   │ Move(x)
//!    └──────────────────────────────────────────────────────┘   │
//!                                                           └───┘
//! ```
//!
//! A press while already dragging and a move while idle are ignored.
//!
//! # Position to value
//!
//! `x` is clamped to the track, turned into a fraction of the track width,
//! scaled into the slider's bounds, snapped to the nearest step multiple
//! and clamped into the bounds again. The bounds themselves are widened
//! outward to step multiples on construction, so every reachable value is
//! a multiple of the step and both calibrated extremes can be selected.

use std::fmt;
use std::sync::Arc;

use showroom_seeker::{Interval, Metric, RangeBounds};

use crate::error::{Result, SliderError};
use crate::pointer::{PointerEvent, PointerTarget};
use crate::session::DragSession;

/// One of the two handles of a [`RangeSlider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Min,
    Max,
}

/// Observable drag state of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Handle),
}

/// Horizontal placement of the track in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    origin: f64,
    width: f64,
}

impl Track {
    pub fn new(origin: f64, width: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(SliderError::DegenerateTrack(width));
        }
        if !origin.is_finite() {
            return Err(SliderError::DegenerateTrack(origin));
        }
        Ok(Track { origin, width })
    }

    pub fn origin(&self) -> f64 {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Fraction of the track at `x`, clamped to `[0, 1]`.
    pub fn fraction_at(&self, x: f64) -> f64 {
        (x - self.origin).clamp(0.0, self.width) / self.width
    }
}

enum Phase {
    Idle,
    Dragging {
        handle: Handle,
        // Held only for its drop.
        _session: DragSession,
    },
}

/// A two-handle control selecting an inclusive `[min, max]` range.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use showroom_seeker::Interval;
/// use showroom_slider::{DragState, Handle, ListenerRegistry, PointerEvent, RangeSlider, Track};
///
/// let registry = Arc::new(ListenerRegistry::new());
/// let bounds = Interval::new(0.0, 100.0).unwrap();
/// let track = Track::new(0.0, 200.0).unwrap();
/// let mut slider = RangeSlider::new(bounds, 5.0, track, registry.clone()).unwrap();
///
/// // Press near the left end: the min handle jumps there and follows.
/// slider.handle_event(PointerEvent::Down { x: 42.0 });
/// assert_eq!(slider.state(), DragState::Dragging(Handle::Min));
/// assert_eq!(slider.selection().min(), 20.0);
///
/// // Dragging past the max handle stops at it.
/// slider.handle_event(PointerEvent::Move { x: 500.0 });
/// assert_eq!(slider.selection().min(), 100.0);
///
/// slider.handle_event(PointerEvent::Up);
/// assert_eq!(slider.state(), DragState::Idle);
/// assert!(registry.is_empty());
/// ```
pub struct RangeSlider {
    bounds: Interval,
    step: f64,
    track: Track,
    selection: Interval,
    phase: Phase,
    target: Arc<dyn PointerTarget>,
}

impl RangeSlider {
    /// Creates an idle slider selecting its whole range.
    ///
    /// `bounds` is widened outward to the nearest multiples of `step`.
    pub fn new(
        bounds: Interval,
        step: f64,
        track: Track,
        target: Arc<dyn PointerTarget>,
    ) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(SliderError::InvalidStep(step));
        }
        let bounds = Interval::new(
            (bounds.min() / step).floor() * step,
            (bounds.max() / step).ceil() * step,
        )?;

        Ok(RangeSlider {
            bounds,
            step,
            track,
            selection: bounds,
            phase: Phase::Idle,
            target,
        })
    }

    /// Creates a slider for one calibrated range dimension.
    pub fn calibrated(
        bounds: &RangeBounds,
        metric: Metric,
        step: f64,
        track: Track,
        target: Arc<dyn PointerTarget>,
    ) -> Result<Self> {
        RangeSlider::new(bounds.get(metric), step, track, target)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The selectable extremes, aligned to the step.
    pub fn bounds(&self) -> Interval {
        self.bounds
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn track(&self) -> Track {
        self.track
    }

    /// The current `[min handle, max handle]` values.
    pub fn selection(&self) -> Interval {
        self.selection
    }

    pub fn value(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Min => self.selection.min(),
            Handle::Max => self.selection.max(),
        }
    }

    pub fn state(&self) -> DragState {
        match self.phase {
            Phase::Idle => DragState::Idle,
            Phase::Dragging { handle, .. } => DragState::Dragging(handle),
        }
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Maps a pointer position to a selectable value.
    pub fn value_at(&self, x: f64) -> f64 {
        let raw = self.bounds.min() + self.track.fraction_at(x) * self.bounds.width();
        self.snap(raw)
    }

    /// Maps a value back to its fraction of the track, for drawing handles.
    pub fn fraction_of(&self, value: f64) -> f64 {
        let width = self.bounds.width();
        if width == 0.0 {
            return 0.0;
        }
        (self.bounds.clamp(value) - self.bounds.min()) / width
    }

    /// Returns the handle a press at `value` should grab.
    ///
    /// Outside the selection the handle on that side wins; inside, the
    /// closer one does, with ties going to the min handle.
    pub fn nearer_handle(&self, value: f64) -> Handle {
        let (low, high) = (self.selection.min(), self.selection.max());
        if value <= low {
            Handle::Min
        } else if value >= high {
            Handle::Max
        } else if value - low <= high - value {
            Handle::Min
        } else {
            Handle::Max
        }
    }

    /// Replaces the track geometry, e.g. after a layout change.
    pub fn resize(&mut self, track: Track) {
        self.track = track;
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Feeds one pointer event through the state machine.
    ///
    /// Returns the new selection if the event changed it.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<Interval> {
        let before = self.selection;
        match (event, self.state()) {
            (PointerEvent::Down { x }, DragState::Idle) => {
                let value = self.value_at(x);
                let handle = self.nearer_handle(value);
                self.phase = Phase::Dragging {
                    handle,
                    _session: DragSession::acquire(Arc::clone(&self.target)),
                };
                self.move_handle(handle, value);
            }
            (PointerEvent::Move { x }, DragState::Dragging(handle)) => {
                let value = self.value_at(x);
                self.move_handle(handle, value);
            }
            (PointerEvent::Up | PointerEvent::Cancel, DragState::Dragging(_)) => {
                self.phase = Phase::Idle;
            }
            _ => {}
        }
        (self.selection != before).then_some(self.selection)
    }

    /// Moves one handle by whole steps, as arrow or page keys would.
    pub fn nudge(&mut self, handle: Handle, steps: i32) -> Interval {
        let value = self.value(handle) + f64::from(steps) * self.step;
        self.move_handle(handle, self.snap(value));
        self.selection
    }

    /// Replaces the selection with `interval`, snapped into the bounds.
    pub fn set_selection(&mut self, interval: Interval) -> Interval {
        self.selection = self
            .bounds
            .with_min(self.snap(interval.min()))
            .with_max(self.snap(interval.max()));
        self.selection
    }

    /// Sets a handle, stopping at the other handle rather than crossing it.
    fn move_handle(&mut self, handle: Handle, value: f64) {
        self.selection = match handle {
            Handle::Min => self.selection.with_min(value),
            Handle::Max => self.selection.with_max(value),
        };
        tracing::trace!(?handle, value = self.value(handle), "range handle moved");
    }

    fn snap(&self, value: f64) -> f64 {
        self.bounds.clamp((value / self.step).round() * self.step)
    }
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("bounds", &self.bounds)
            .field("step", &self.step)
            .field("track", &self.track)
            .field("selection", &self.selection)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

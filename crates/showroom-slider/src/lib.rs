//! Showroom Slider - a pointer-driven dual-handle range control.
//!
//! [`RangeSlider`] turns pointer presses and drags along a 1-D track into
//! an inclusive [`Interval`](showroom_seeker::Interval) suitable for a
//! range dimension of a [`FilterState`](showroom_seeker::FilterState):
//!
//! - a press snaps the nearer handle to the pointer and starts a drag
//! - moves update that handle until release or cancel
//! - values are clamped to the bounds and quantized to the step
//! - the handles may meet but never cross
//!
//! Listeners for the drag are held by a [`DragSession`] that exists only
//! while a drag is in progress and detaches them when dropped.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use showroom_seeker::{Catalog, Listing, Metric};
//! use showroom_slider::{ListenerRegistry, PointerEvent, RangeSlider, Track};
//!
//! let catalog = Catalog::new(vec![
//!     Listing { price: "₹4 Lakh".into(), ..Listing::default() },
//!     Listing { price: "₹20 Lakh".into(), ..Listing::default() },
//! ]);
//!
//! let track = Track::new(0.0, 160.0).unwrap();
//! let registry = Arc::new(ListenerRegistry::new());
//! let mut slider =
//!     RangeSlider::calibrated(catalog.bounds(), Metric::Price, 10_000.0, track, registry)
//!         .unwrap();
//!
//! slider.handle_event(PointerEvent::Down { x: 150.0 });
//! slider.handle_event(PointerEvent::Up);
//!
//! let filters = catalog
//!     .unconstrained_filters()
//!     .with_range(Metric::Price, slider.selection());
//! assert_eq!(filters.range(Metric::Price).max(), 1_900_000.0);
//! ```

mod error;
mod pointer;
mod session;
mod slider;

pub use error::{Result, SliderError};
pub use pointer::{ListenerId, ListenerRegistry, PointerEvent, PointerEventKind, PointerTarget};
pub use session::DragSession;
pub use slider::{DragState, Handle, RangeSlider, Track};

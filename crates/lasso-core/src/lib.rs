#![forbid(unsafe_code)]

//! Core: rectangular lasso gestures over a pointer-driven surface.
//!
//! # Role
//! `lasso-core` owns the gesture logic and nothing else. A host delivers
//! press/move/release notifications, the [`GestureTracker`] keeps an overlay
//! in step with the pointer, and each completed drag is reported as a
//! [`SelectionResult`] in coordinates relative to the target surface.
//!
//! # Primary responsibilities
//! - **GestureTracker**: the Idle → Pressed → Dragging state machine.
//! - **Events**: [`PointerEvent`], [`ButtonConvention`] and the
//!   [`EventDisposition`] returned to the host.
//! - **Surface**: positioning kinds and one-time offset resolution.
//! - **Overlay**: the command capability a rendering adapter implements.
//!
//! # Example
//!
//! ```
//! use lasso_core::{
//!     CommandOverlay, GestureTracker, PointerEvent, SelectionQueue, StaticSurface,
//!     TrackerConfig,
//! };
//!
//! let mut tracker = GestureTracker::new(
//!     TrackerConfig::default(),
//!     StaticSurface::default(),
//!     CommandOverlay::new(),
//!     SelectionQueue::new(),
//! );
//! tracker.on_press_start(&PointerEvent::new(100.0, 100.0, 1));
//! tracker.on_press_move(&PointerEvent::new(150.0, 80.0, 1));
//! tracker.on_press_end(&PointerEvent::new(150.0, 80.0, 1));
//!
//! let result = tracker.handler_mut().pop().unwrap();
//! assert_eq!((result.width, result.height), (50.0, -20.0));
//! ```

pub mod event;
pub mod geometry;
pub mod logging;
pub mod overlay;
pub mod selection;
pub mod surface;
pub mod tracker;

pub use event::{ButtonConvention, EventDisposition, Modifiers, PointerEvent, PointerPhase};
pub use geometry::{Point, Rect};
pub use overlay::{CommandOverlay, Overlay, OverlayCommand, OverlayGeometry};
pub use selection::{SelectionQueue, SelectionResult};
pub use surface::{Positioning, StaticSurface, Surface, SurfaceOffset};
pub use tracker::{GestureTracker, SelectionHandler, TrackerConfig, TrackerState};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

#![forbid(unsafe_code)]

//! Lasso gesture tracking: turns press/move/release into a rectangle.
//!
//! [`GestureTracker`] consumes the three pointer-lifecycle notifications of a
//! target surface, keeps the overlay in step with the pointer while the
//! button is held, and hands a [`SelectionResult`] to its
//! [`SelectionHandler`] when a drag completes.
//!
//! # State Machine
//!
//! ```text
//! Idle     --primary press-->    Pressed
//! Pressed  --move-->             Dragging
//! Dragging --move-->             Dragging   (overlay geometry recomputed)
//! Pressed  --primary release-->  Idle       (no result)
//! Dragging --primary release-->  Idle       (result delivered)
//! any      --non-primary press/release-->  unchanged
//! ```
//!
//! # Invariants
//!
//! 1. A result is delivered exactly once per press → move(s) → release, and
//!    never for a press released without movement.
//! 2. The surface offset is resolved once at construction; it only changes
//!    through an explicit [`refresh_offset`](GestureTracker::refresh_offset).
//! 3. The overlay is detached on every release, whatever the button.
//! 4. A completed gesture leaves no state behind: the next gesture starts
//!    from a fresh session.
//!
//! # Failure Modes
//!
//! - Moves before any press are ignored.
//! - Events arriving out of order are not reordered; a second primary press
//!   without a release restarts the session.

use crate::event::{ButtonConvention, EventDisposition, PointerEvent, PointerPhase};
use crate::geometry::Point;
use crate::overlay::{Overlay, OverlayGeometry};
use crate::selection::SelectionResult;
use crate::surface::{Surface, SurfaceOffset};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Button interpretation and overlay styling for a [`GestureTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TrackerConfig {
    /// How the host encodes the pressed button (default: [`ButtonConvention::Which`]).
    pub button_convention: ButtonConvention,
    /// Gap kept between the pointer and the overlay's leading edge (default: 2.0).
    ///
    /// Keeps the release landing on the surface rather than on the overlay.
    pub edge_padding: f64,
    /// Overlay border width while dragging (default: 1.0).
    pub drag_border_width: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            button_convention: ButtonConvention::Which,
            edge_padding: 2.0,
            drag_border_width: 1.0,
        }
    }
}

impl TrackerConfig {
    #[must_use]
    pub const fn with_button_convention(mut self, convention: ButtonConvention) -> Self {
        self.button_convention = convention;
        self
    }

    #[must_use]
    pub const fn with_edge_padding(mut self, padding: f64) -> Self {
        self.edge_padding = padding;
        self
    }

    #[must_use]
    pub const fn with_drag_border_width(mut self, width: f64) -> Self {
        self.drag_border_width = width;
        self
    }
}

// ---------------------------------------------------------------------------
// Result delivery
// ---------------------------------------------------------------------------

/// Receives the result of each completed drag.
///
/// Implemented for every `FnMut(SelectionResult)` closure and for
/// [`SelectionQueue`](crate::selection::SelectionQueue).
pub trait SelectionHandler {
    fn on_selection(&mut self, result: SelectionResult);
}

impl<F> SelectionHandler for F
where
    F: FnMut(SelectionResult),
{
    fn on_selection(&mut self, result: SelectionResult) {
        self(result);
    }
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

/// Observable tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerState {
    /// No button held.
    Idle,
    /// Primary button held, no movement yet.
    Pressed,
    /// Primary button held and the pointer has moved.
    Dragging,
}

/// Live drag session. Exists only between a qualifying press and its release.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    start: Point,
    /// `Some` once the pointer has moved during this session.
    current: Option<Point>,
}

// ---------------------------------------------------------------------------
// GestureTracker
// ---------------------------------------------------------------------------

/// Stateful lasso tracker for one target surface.
///
/// Feed it [`on_press_start`](Self::on_press_start),
/// [`on_press_move`](Self::on_press_move) and
/// [`on_press_end`](Self::on_press_end) (or [`dispatch`](Self::dispatch)) in
/// delivery order. Each returns the [`EventDisposition`] the host should
/// apply to the native event.
pub struct GestureTracker<S, O, H> {
    config: TrackerConfig,
    target: S,
    offset: SurfaceOffset,
    overlay: O,
    overlay_attached: bool,
    handler: H,
    session: Option<DragSession>,
}

impl<S, O, H> std::fmt::Debug for GestureTracker<S, O, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureTracker")
            .field("state", &self.state())
            .field("offset", &self.offset)
            .field("overlay_attached", &self.overlay_attached)
            .finish()
    }
}

impl<S, O, H> GestureTracker<S, O, H>
where
    S: Surface,
    O: Overlay,
    H: SelectionHandler,
{
    /// Create a tracker for `target`, resolving its page offset now.
    #[must_use]
    pub fn new(config: TrackerConfig, target: S, overlay: O, handler: H) -> Self {
        let offset = SurfaceOffset::resolve(&target);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            offset.top = offset.top,
            offset.left = offset.left,
            positioning = ?target.positioning(),
            "lasso tracker created"
        );
        Self {
            config,
            target,
            offset,
            overlay,
            overlay_attached: false,
            handler,
            session: None,
        }
    }

    /// Route an event by phase.
    pub fn dispatch(&mut self, phase: PointerPhase, event: &PointerEvent) -> EventDisposition {
        match phase {
            PointerPhase::Start => self.on_press_start(event),
            PointerPhase::Move => self.on_press_move(event),
            PointerPhase::End => self.on_press_end(event),
        }
    }

    /// Handle a button press on the target.
    pub fn on_press_start(&mut self, event: &PointerEvent) -> EventDisposition {
        if !self.is_primary(event) {
            #[cfg(feature = "tracing")]
            tracing::trace!(button = event.button_code, "press ignored: not primary");
            return EventDisposition::PREVENT_DEFAULT;
        }

        let start = event.page_point();
        self.session = Some(DragSession {
            start,
            current: None,
        });

        self.overlay
            .set_geometry(OverlayGeometry::collapsed(start.x, start.y));
        if !self.overlay_attached {
            self.overlay.attach();
            self.overlay_attached = true;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(x = start.x, y = start.y, "lasso pressed");
        EventDisposition::PREVENT_DEFAULT
    }

    /// Handle pointer movement.
    pub fn on_press_move(&mut self, event: &PointerEvent) -> EventDisposition {
        let Some(session) = self.session.as_mut() else {
            return EventDisposition::PREVENT_DEFAULT;
        };

        let current = event.page_point();
        session.current = Some(current);
        let geometry = drag_overlay_geometry(session.start, current, &self.config);
        self.overlay.set_geometry(geometry);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            left = geometry.left,
            top = geometry.top,
            width = geometry.width,
            height = geometry.height,
            "lasso dragged"
        );
        EventDisposition::PREVENT_DEFAULT
    }

    /// Handle a button release.
    pub fn on_press_end(&mut self, event: &PointerEvent) -> EventDisposition {
        self.detach_overlay();

        if !self.is_primary(event) {
            #[cfg(feature = "tracing")]
            tracing::trace!(button = event.button_code, "release ignored: not primary");
            return EventDisposition::CONSUME;
        }

        let Some(session) = self.session.take() else {
            return EventDisposition::CONSUME;
        };

        let Some(current) = session.current else {
            #[cfg(feature = "tracing")]
            tracing::debug!("lasso released without movement");
            return EventDisposition::CONSUME;
        };

        let result =
            SelectionResult::from_drag(session.start, current, self.offset, event.ctrl_key());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            start.x = result.start.x,
            start.y = result.start.y,
            width = result.width,
            height = result.height,
            ctrl = result.ctrl_pressed,
            "lasso selection complete"
        );
        self.handler.on_selection(result);
        EventDisposition::CONSUME
    }

    /// Abandon any in-progress gesture without delivering a result.
    ///
    /// Hosts call this on focus loss or when the surface is torn down.
    pub fn reset(&mut self) {
        if self.session.take().is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!("lasso gesture reset");
        }
        self.detach_overlay();
    }

    /// Re-measure the target's page offset.
    ///
    /// Never called implicitly; results after a layout change are stale until
    /// the host calls this.
    pub fn refresh_offset(&mut self) {
        self.offset = SurfaceOffset::resolve(&self.target);
    }

    fn is_primary(&self, event: &PointerEvent) -> bool {
        self.config.button_convention.is_primary(event.button_code)
    }

    fn detach_overlay(&mut self) {
        if self.overlay_attached {
            self.overlay.detach();
            self.overlay_attached = false;
        }
    }
}

impl<S, O, H> GestureTracker<S, O, H> {
    /// Current state.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        match self.session {
            None => TrackerState::Idle,
            Some(DragSession { current: None, .. }) => TrackerState::Pressed,
            Some(DragSession {
                current: Some(_), ..
            }) => TrackerState::Dragging,
        }
    }

    /// Whether a drag is currently in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|s| s.current.is_some())
    }

    /// Offset resolved for the target.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> SurfaceOffset {
        self.offset
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &S {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut O {
        &mut self.overlay
    }

    #[inline]
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

/// Overlay geometry for a drag from `start` to `current` (page coordinates).
///
/// The rectangle is anchored at its top-left corner whatever the drag
/// direction, then nudged by `edge_padding` away from the pointer on each
/// axis.
#[must_use]
pub fn drag_overlay_geometry(start: Point, current: Point, config: &TrackerConfig) -> OverlayGeometry {
    let width = (current.x - start.x).abs();
    let height = (current.y - start.y).abs();

    let left_ward = current.x < start.x;
    let up_ward = current.y < start.y;

    let anchor_x = if left_ward { start.x - width } else { start.x };
    let anchor_y = if up_ward { start.y - height } else { start.y };

    let pad = config.edge_padding;
    let pad_x = if left_ward { pad } else { -pad };
    let pad_y = if up_ward { pad } else { -pad };

    OverlayGeometry {
        left: anchor_x + pad_x,
        top: anchor_y + pad_y,
        width,
        height,
        border_width: config.drag_border_width,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#![forbid(unsafe_code)]

//! Selection results reported when a drag completes.

use std::collections::VecDeque;

use crate::geometry::{Point, Rect};
use crate::surface::SurfaceOffset;
use crate::tracker::SelectionHandler;

/// Final geometry of a completed lasso drag, in surface-relative coordinates.
///
/// `width` and `height` are signed: negative values mean the drag went left
/// or up from the press point. `points` follow the same convention, so
/// `points[0]` is always the press point and `points[3]` the release point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SelectionResult {
    /// Press point.
    pub start: Point,
    /// Corners: start, start + w, start + h, start + (w, h).
    pub points: [Point; 4],
    /// Signed horizontal extent.
    pub width: f64,
    /// Signed vertical extent.
    pub height: f64,
    /// Ctrl held on release.
    pub ctrl_pressed: bool,
}

impl SelectionResult {
    /// Build a result from page-space press and release points.
    #[must_use]
    pub fn from_drag(
        start_page: Point,
        current_page: Point,
        offset: SurfaceOffset,
        ctrl_pressed: bool,
    ) -> Self {
        let (width, height) = start_page.delta_to(current_page);
        let start = offset.to_surface(start_page);
        Self {
            start,
            points: corner_points(start, width, height),
            width,
            height,
            ctrl_pressed,
        }
    }

    /// Normalised bounds with non-negative size.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.points[0], self.points[3])
    }

    /// Release point.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Point {
        self.points[3]
    }
}

/// The four corners spanned from `start` by signed `(w, h)`.
#[must_use]
pub fn corner_points(start: Point, w: f64, h: f64) -> [Point; 4] {
    [
        start,
        start.offset_by(w, 0.0),
        start.offset_by(0.0, h),
        start.offset_by(w, h),
    ]
}

/// FIFO of completed selections, for hosts that poll instead of reacting
/// inside a callback.
#[derive(Debug, Clone, Default)]
pub struct SelectionQueue {
    results: VecDeque<SelectionResult>,
}

impl SelectionQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest pending result.
    pub fn pop(&mut self) -> Option<SelectionResult> {
        self.results.pop_front()
    }

    /// Take every pending result, oldest first.
    pub fn drain(&mut self) -> Vec<SelectionResult> {
        self.results.drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl SelectionHandler for SelectionQueue {
    fn on_selection(&mut self, result: SelectionResult) {
        self.results.push_back(result);
    }
}

#![forbid(unsafe_code)]

//! Target surface model and page-offset resolution.
//!
//! Selection results are reported relative to the target surface. The offset
//! that converts page coordinates into surface coordinates is resolved once
//! when a tracker is built (see [`SurfaceOffset::resolve`]).

use crate::geometry::Point;

/// Layout positioning kind of the target surface (CSS `position`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Positioning {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Positioning {
    /// Whether the surface's measured page position is used as its offset.
    ///
    /// Only `relative` and `absolute` surfaces qualify; everything else
    /// reports in plain page coordinates.
    #[must_use]
    pub const fn establishes_context(self) -> bool {
        matches!(self, Self::Relative | Self::Absolute)
    }
}

/// Page offset of the target surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceOffset {
    pub top: f64,
    pub left: f64,
}

impl SurfaceOffset {
    /// No offset.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new offset.
    #[must_use]
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Resolve the offset of `surface`.
    ///
    /// Equals the measured page position when the surface establishes its
    /// own positioning context, `{0, 0}` otherwise.
    #[must_use]
    pub fn resolve<S: Surface + ?Sized>(surface: &S) -> Self {
        if surface.positioning().establishes_context() {
            surface.page_position()
        } else {
            Self::ZERO
        }
    }

    /// Convert a page point into surface-relative coordinates.
    #[inline]
    #[must_use]
    pub fn to_surface(self, page: Point) -> Point {
        Point::new(page.x - self.left, page.y - self.top)
    }
}

/// A target the host can measure.
pub trait Surface {
    /// Current page position of the surface's top-left corner.
    fn page_position(&self) -> SurfaceOffset;

    /// Current positioning kind.
    fn positioning(&self) -> Positioning;
}

impl<S: Surface + ?Sized> Surface for &S {
    fn page_position(&self) -> SurfaceOffset {
        (**self).page_position()
    }

    fn positioning(&self) -> Positioning {
        (**self).positioning()
    }
}

/// A surface described by a layout snapshot taken by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticSurface {
    pub position: SurfaceOffset,
    pub positioning: Positioning,
}

impl StaticSurface {
    #[must_use]
    pub const fn new(position: SurfaceOffset, positioning: Positioning) -> Self {
        Self {
            position,
            positioning,
        }
    }
}

impl Surface for StaticSurface {
    fn page_position(&self) -> SurfaceOffset {
        self.position
    }

    fn positioning(&self) -> Positioning {
        self.positioning
    }
}

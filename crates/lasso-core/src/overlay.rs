#![forbid(unsafe_code)]

//! Overlay rendering capability.
//!
//! The tracker never touches a UI toolkit. It drives an [`Overlay`] with three
//! commands: set geometry, attach to the rendering root, and detach. A host
//! adapter turns those into whatever its rendering layer needs.
//!
//! [`CommandOverlay`] is the buffering implementation for hosts that apply
//! commands in batches (e.g. once per animation frame).

/// Geometry the overlay should render, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OverlayGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub border_width: f64,
}

impl OverlayGeometry {
    /// Zero-size, borderless rectangle anchored at `(left, top)`.
    #[must_use]
    pub const fn collapsed(left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            width: 0.0,
            height: 0.0,
            border_width: 0.0,
        }
    }
}

/// Rendering adapter for the selection overlay.
pub trait Overlay {
    /// Position and size the overlay.
    fn set_geometry(&mut self, geometry: OverlayGeometry);

    /// Attach the overlay to its rendering root.
    fn attach(&mut self);

    /// Detach the overlay from its rendering root.
    fn detach(&mut self);
}

impl<O: Overlay + ?Sized> Overlay for &mut O {
    fn set_geometry(&mut self, geometry: OverlayGeometry) {
        (**self).set_geometry(geometry);
    }

    fn attach(&mut self) {
        (**self).attach();
    }

    fn detach(&mut self) {
        (**self).detach();
    }
}

impl<O: Overlay + ?Sized> Overlay for Box<O> {
    fn set_geometry(&mut self, geometry: OverlayGeometry) {
        (**self).set_geometry(geometry);
    }

    fn attach(&mut self) {
        (**self).attach();
    }

    fn detach(&mut self) {
        (**self).detach();
    }
}

/// One overlay command, in the order the tracker issued it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum OverlayCommand {
    SetGeometry(OverlayGeometry),
    Attach,
    Detach,
}

/// Overlay that buffers commands for the host to drain.
#[derive(Debug, Clone, Default)]
pub struct CommandOverlay {
    pending: Vec<OverlayCommand>,
    geometry: OverlayGeometry,
    attached: bool,
}

impl CommandOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending commands, oldest first.
    pub fn drain(&mut self) -> Vec<OverlayCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Pending commands, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[OverlayCommand] {
        &self.pending
    }

    /// Whether the last attach has not been followed by a detach.
    #[inline]
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Most recently requested geometry.
    #[inline]
    #[must_use]
    pub const fn geometry(&self) -> OverlayGeometry {
        self.geometry
    }
}

impl Overlay for CommandOverlay {
    fn set_geometry(&mut self, geometry: OverlayGeometry) {
        self.geometry = geometry;
        self.pending.push(OverlayCommand::SetGeometry(geometry));
    }

    fn attach(&mut self) {
        self.attached = true;
        self.pending.push(OverlayCommand::Attach);
    }

    fn detach(&mut self) {
        self.attached = false;
        self.pending.push(OverlayCommand::Detach);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_overlay_records_in_order() {
        let mut overlay = CommandOverlay::new();
        let g = OverlayGeometry::collapsed(3.0, 4.0);
        overlay.set_geometry(g);
        overlay.attach();
        assert!(overlay.is_attached());
        overlay.detach();
        assert!(!overlay.is_attached());

        assert_eq!(
            overlay.drain(),
            vec![
                OverlayCommand::SetGeometry(g),
                OverlayCommand::Attach,
                OverlayCommand::Detach,
            ]
        );
        assert!(overlay.pending().is_empty());
        assert_eq!(overlay.geometry(), g);
    }

    #[test]
    fn borrowed_overlay_forwards() {
        let mut inner = CommandOverlay::new();
        {
            let mut borrowed: &mut CommandOverlay = &mut inner;
            Overlay::attach(&mut borrowed);
        }
        assert!(inner.is_attached());
    }

    #[test]
    fn collapsed_geometry_has_no_border() {
        let g = OverlayGeometry::collapsed(1.0, 2.0);
        assert_eq!(g.width, 0.0);
        assert_eq!(g.height, 0.0);
        assert_eq!(g.border_width, 0.0);
        assert_eq!((g.left, g.top), (1.0, 2.0));
    }
}

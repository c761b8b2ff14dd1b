#![forbid(unsafe_code)]

//! DOM rendering adapter for the selection overlay.
//!
//! [`DomOverlay`] implements [`Overlay`] by buffering [`DomCommand`]s that a
//! JavaScript host applies to a single `<div>`: CSS updates, appending the
//! element under the overlay root, and removing it.

use lasso_core::{Overlay, OverlayGeometry};
use serde::{Deserialize, Serialize};

/// Default element the overlay is appended to.
pub const DEFAULT_OVERLAY_ROOT: &str = "html>body";
/// Default CSS class of the overlay element.
pub const DEFAULT_OVERLAY_CLASS: &str = "selection-box";

/// One DOM instruction for the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomCommand {
    /// Apply inline CSS to the overlay element (lengths in px).
    Css {
        width: f64,
        height: f64,
        top: f64,
        left: f64,
        #[serde(rename = "border-width")]
        border_width: String,
    },
    /// Append the overlay element under `root`.
    Append {
        root: String,
        #[serde(rename = "className")]
        class_name: String,
    },
    /// Remove the overlay element from the document.
    Remove,
}

impl DomCommand {
    /// CSS command for `geometry`.
    #[must_use]
    pub fn css(geometry: &OverlayGeometry) -> Self {
        Self::Css {
            width: geometry.width,
            height: geometry.height,
            top: geometry.top,
            left: geometry.left,
            border_width: css_length(geometry.border_width),
        }
    }
}

/// CSS length for a border width: `"0"` when zero, `"<n>px"` otherwise.
#[must_use]
pub fn css_length(px: f64) -> String {
    if px == 0.0 {
        "0".to_string()
    } else {
        format!("{px}px")
    }
}

/// Overlay that records DOM commands for the host to apply.
#[derive(Debug, Clone)]
pub struct DomOverlay {
    root: String,
    class_name: String,
    pending: Vec<DomCommand>,
}

impl Default for DomOverlay {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_ROOT, DEFAULT_OVERLAY_CLASS)
    }
}

impl DomOverlay {
    #[must_use]
    pub fn new(root: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            class_name: class_name.into(),
            pending: Vec::new(),
        }
    }

    /// Take all pending commands, oldest first.
    pub fn drain(&mut self) -> Vec<DomCommand> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl Overlay for DomOverlay {
    fn set_geometry(&mut self, geometry: OverlayGeometry) {
        self.pending.push(DomCommand::css(&geometry));
    }

    fn attach(&mut self) {
        self.pending.push(DomCommand::Append {
            root: self.root.clone(),
            class_name: self.class_name.clone(),
        });
    }

    fn detach(&mut self) {
        self.pending.push(DomCommand::Remove);
    }
}

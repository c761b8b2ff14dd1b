#![forbid(unsafe_code)]

//! `lasso-web` drives a [`lasso_core::GestureTracker`] from a browser host.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) pushes JSON-encoded
//!   drag notifications and applies the DOM commands it gets back.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//! - **Poll-based results**: completed selections queue up until the host
//!   drains them.
//!
//! This crate does not bind to `wasm-bindgen`; a thin JS shim owns the
//! element, listens for `dragstart.lasso` / `dragmove.lasso` /
//! `dragend.lasso`, and forwards each event through [`LassoHost`].

pub mod dom;
pub mod input_parser;

use lasso_core::{
    ButtonConvention, EventDisposition, GestureTracker, SelectionQueue, SelectionResult,
    StaticSurface, TrackerConfig, TrackerState,
};
use serde::{Deserialize, Serialize};

use crate::dom::{DEFAULT_OVERLAY_CLASS, DEFAULT_OVERLAY_ROOT, DomCommand, DomOverlay};
use crate::input_parser::{InputParseError, LassoInput, parse_lasso_input};

/// Host configuration, usually supplied as camelCase JSON.
///
/// ```json
/// {
///   "target": {"position": {"top": 40, "left": 12}, "positioning": "relative"},
///   "buttonConvention": "which",
///   "overlayRoot": "html>body"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostConfig {
    /// Layout snapshot of the target surface, measured once by the host.
    pub target: StaticSurface,
    pub button_convention: ButtonConvention,
    pub edge_padding: f64,
    pub drag_border_width: f64,
    /// Selector of the element the overlay is appended to.
    pub overlay_root: String,
    /// CSS class of the overlay element.
    pub overlay_class: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        let tracker = TrackerConfig::default();
        Self {
            target: StaticSurface::default(),
            button_convention: tracker.button_convention,
            edge_padding: tracker.edge_padding,
            drag_border_width: tracker.drag_border_width,
            overlay_root: DEFAULT_OVERLAY_ROOT.to_string(),
            overlay_class: DEFAULT_OVERLAY_CLASS.to_string(),
        }
    }
}

impl HostConfig {
    /// Parse a configuration from JSON; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, InputParseError> {
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))
    }

    /// Tracker settings carried by this configuration.
    #[must_use]
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig::default()
            .with_button_convention(self.button_convention)
            .with_edge_padding(self.edge_padding)
            .with_drag_border_width(self.drag_border_width)
    }
}

/// Outcome of one host event.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostDispatch {
    /// What to do with the native event.
    pub disposition: EventDisposition,
    /// DOM commands to apply, in order.
    pub commands: Vec<DomCommand>,
    /// Number of selections waiting in the queue after this event.
    pub pending_selections: usize,
}

type HostTracker = GestureTracker<StaticSurface, DomOverlay, SelectionQueue>;

/// A lasso bound to one target surface of a browser host.
#[derive(Debug)]
pub struct LassoHost {
    tracker: HostTracker,
}

impl LassoHost {
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        let overlay = DomOverlay::new(config.overlay_root.clone(), config.overlay_class.clone());
        let tracker = GestureTracker::new(
            config.tracker_config(),
            config.target,
            overlay,
            SelectionQueue::new(),
        );
        Self { tracker }
    }

    /// Build from a JSON configuration.
    pub fn from_config_json(json: &str) -> Result<Self, InputParseError> {
        HostConfig::from_json(json).map(Self::new)
    }

    /// Decode and dispatch one JSON-encoded host event.
    ///
    /// Event types the lasso does not handle produce an empty dispatch that
    /// leaves the native event untouched.
    pub fn dispatch_json(&mut self, json: &str) -> Result<HostDispatch, InputParseError> {
        let convention = self.tracker.config().button_convention;
        match parse_lasso_input(json, convention) {
            Ok(Some(input)) => Ok(self.dispatch(input)),
            Ok(None) => Ok(HostDispatch {
                pending_selections: self.tracker.handler().len(),
                ..HostDispatch::default()
            }),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %err, "rejected host event");
                Err(err)
            }
        }
    }

    /// Dispatch an already decoded event.
    pub fn dispatch(&mut self, input: LassoInput) -> HostDispatch {
        let disposition = self.tracker.dispatch(input.phase, &input.event);
        HostDispatch {
            disposition,
            commands: self.tracker.overlay_mut().drain(),
            pending_selections: self.tracker.handler().len(),
        }
    }

    /// Abandon the current gesture (focus loss, teardown).
    ///
    /// Returns the DOM commands needed to remove the overlay, if any.
    pub fn reset(&mut self) -> Vec<DomCommand> {
        self.tracker.reset();
        self.tracker.overlay_mut().drain()
    }

    /// Take completed selections, oldest first.
    pub fn drain_selections(&mut self) -> Vec<SelectionResult> {
        self.tracker.handler_mut().drain()
    }

    /// Take completed selections as a JSON array.
    pub fn drain_selections_json(&mut self) -> Result<String, InputParseError> {
        let selections = self.drain_selections();
        serde_json::to_string(&selections).map_err(|e| InputParseError::Json(e.to_string()))
    }

    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.tracker.state()
    }

    #[must_use]
    pub fn tracker(&self) -> &HostTracker {
        &self.tracker
    }
}

/// Serialize one result with the field names consumers expect
/// (`start`, `points`, `width`, `height`, `ctrlPressed`).
pub fn selection_to_json(result: &SelectionResult) -> Result<String, InputParseError> {
    serde_json::to_string(result).map_err(|e| InputParseError::Json(e.to_string()))
}

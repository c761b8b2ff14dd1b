#![forbid(unsafe_code)]

//! JSON input parser for host-encoded pointer events.
//!
//! A JavaScript host forwards its native drag notifications as small JSON
//! objects. [`parse_lasso_input`] turns one of those into a [`LassoInput`]
//! the tracker can consume. Event types the lasso does not listen to return
//! `Ok(None)`.
//!
//! # Wire shape
//!
//! ```json
//! {"type": "dragmove.lasso", "pageX": 120, "pageY": 48, "which": 1, "ctrlKey": false}
//! ```
//!
//! - `type`: `dragstart`, `dragmove` or `dragend`, optionally namespaced as
//!   `<name>.lasso`.
//! - `pageX` / `pageY`: required for the three lasso types.
//! - Button code: read from `which`, `button` or `buttons` depending on the
//!   host's [`ButtonConvention`].
//! - `ctrlKey`, `shiftKey`, `altKey`, `metaKey`: optional, default `false`.

use lasso_core::{ButtonConvention, Modifiers, PointerEvent, PointerPhase};
use serde::Deserialize;
use thiserror::Error;

/// Namespace suffix the host may attach to event names.
pub const EVENT_NAMESPACE: &str = "lasso";

/// Errors from parsing host JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputParseError {
    /// Malformed JSON.
    #[error("JSON parse error: {0}")]
    Json(String),
    /// Missing required field.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// One decoded host notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LassoInput {
    pub phase: PointerPhase,
    pub event: PointerEvent,
}

/// Internal deserialization target matching the host's JSON schema.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInput {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    page_x: Option<f64>,
    #[serde(default)]
    page_y: Option<f64>,
    #[serde(default)]
    which: Option<i32>,
    #[serde(default)]
    button: Option<i32>,
    #[serde(default)]
    buttons: Option<i32>,
    #[serde(default)]
    ctrl_key: bool,
    #[serde(default)]
    shift_key: bool,
    #[serde(default)]
    alt_key: bool,
    #[serde(default)]
    meta_key: bool,
}

/// Map an event name onto a lasso phase.
///
/// Accepts bare names and names in the `lasso` namespace; names in any other
/// namespace belong to someone else and return `None`.
#[must_use]
pub fn phase_for_event_name(name: &str) -> Option<PointerPhase> {
    let base = match name.split_once('.') {
        Some((base, ns)) if ns == EVENT_NAMESPACE => base,
        Some(_) => return None,
        None => name,
    };
    match base {
        "dragstart" => Some(PointerPhase::Start),
        "dragmove" => Some(PointerPhase::Move),
        "dragend" => Some(PointerPhase::End),
        _ => None,
    }
}

/// Parse a JSON-encoded host event.
///
/// Returns `Ok(None)` for event types the lasso does not handle and `Err`
/// for malformed JSON or missing required fields.
pub fn parse_lasso_input(
    json: &str,
    convention: ButtonConvention,
) -> Result<Option<LassoInput>, InputParseError> {
    let raw: RawInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    let Some(phase) = phase_for_event_name(&raw.kind) else {
        return Ok(None);
    };

    let page_x = raw.page_x.ok_or(InputParseError::MissingField("pageX"))?;
    let page_y = raw.page_y.ok_or(InputParseError::MissingField("pageY"))?;
    let button_code = match convention {
        ButtonConvention::Which => raw.which.ok_or(InputParseError::MissingField("which")),
        ButtonConvention::DomButton => raw.button.ok_or(InputParseError::MissingField("button")),
        ButtonConvention::DomButtons => {
            raw.buttons.ok_or(InputParseError::MissingField("buttons"))
        }
    }?;

    let event = PointerEvent::new(page_x, page_y, button_code).with_modifiers(modifiers(&raw));
    Ok(Some(LassoInput { phase, event }))
}

fn modifiers(raw: &RawInput) -> Modifiers {
    let mut mods = Modifiers::NONE;
    mods.set(Modifiers::CTRL, raw.ctrl_key);
    mods.set(Modifiers::SHIFT, raw.shift_key);
    mods.set(Modifiers::ALT, raw.alt_key);
    mods.set(Modifiers::SUPER, raw.meta_key);
    mods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Option<LassoInput>, InputParseError> {
        parse_lasso_input(json, ButtonConvention::Which)
    }

    #[test]
    fn parses_namespaced_dragstart() {
        let input = parse(r#"{"type":"dragstart.lasso","pageX":10,"pageY":20.5,"which":1}"#)
            .unwrap()
            .unwrap();
        assert_eq!(input.phase, PointerPhase::Start);
        assert_eq!(input.event, PointerEvent::new(10.0, 20.5, 1));
    }

    #[test]
    fn bare_names_map_to_phases() {
        assert_eq!(phase_for_event_name("dragstart"), Some(PointerPhase::Start));
        assert_eq!(phase_for_event_name("dragmove"), Some(PointerPhase::Move));
        assert_eq!(phase_for_event_name("dragend"), Some(PointerPhase::End));
        assert_eq!(phase_for_event_name("dragend.lasso"), Some(PointerPhase::End));
    }

    #[test]
    fn foreign_namespace_and_types_ignored() {
        assert_eq!(phase_for_event_name("dragend.zoom"), None);
        assert_eq!(phase_for_event_name("click"), None);
        assert_eq!(parse(r#"{"type":"wheel","deltaY":3}"#), Ok(None));
    }

    #[test]
    fn modifiers_collected() {
        let input = parse(
            r#"{"type":"dragend","pageX":0,"pageY":0,"which":1,"ctrlKey":true,"metaKey":true}"#,
        )
        .unwrap()
        .unwrap();
        assert!(input.event.ctrl_key());
        assert_eq!(input.event.modifiers, Modifiers::CTRL | Modifiers::SUPER);
    }

    #[test]
    fn button_field_follows_convention() {
        let json = r#"{"type":"dragstart","pageX":1,"pageY":2,"which":1,"button":0,"buttons":1}"#;
        let which = parse_lasso_input(json, ButtonConvention::Which).unwrap().unwrap();
        let button = parse_lasso_input(json, ButtonConvention::DomButton).unwrap().unwrap();
        let buttons = parse_lasso_input(json, ButtonConvention::DomButtons).unwrap().unwrap();
        assert_eq!(which.event.button_code, 1);
        assert_eq!(button.event.button_code, 0);
        assert_eq!(buttons.event.button_code, 1);
    }

    #[test]
    fn missing_fields_reported() {
        assert_eq!(
            parse(r#"{"type":"dragmove","pageY":2,"which":1}"#),
            Err(InputParseError::MissingField("pageX"))
        );
        assert_eq!(
            parse(r#"{"type":"dragmove","pageX":2,"which":1}"#),
            Err(InputParseError::MissingField("pageY"))
        );
        assert_eq!(
            parse_lasso_input(
                r#"{"type":"dragmove","pageX":2,"pageY":2,"which":1}"#,
                ButtonConvention::DomButton
            ),
            Err(InputParseError::MissingField("button"))
        );
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(matches!(parse("{not json"), Err(InputParseError::Json(_))));
        assert!(matches!(parse(r#"{"pageX":1}"#), Err(InputParseError::Json(_))));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            InputParseError::MissingField("pageX").to_string(),
            "missing required field: pageX"
        );
    }
}

#![forbid(unsafe_code)]

//! End-to-end host flow: JSON events in, DOM commands and selections out.

use lasso_core::{EventDisposition, Point, TrackerState};
use lasso_web::dom::DomCommand;
use lasso_web::input_parser::InputParseError;
use lasso_web::{HostConfig, LassoHost, selection_to_json};
use pretty_assertions::assert_eq;

fn host() -> LassoHost {
    LassoHost::new(HostConfig::default())
}

fn event(kind: &str, x: f64, y: f64, which: i32) -> String {
    format!(r#"{{"type":"{kind}.lasso","pageX":{x},"pageY":{y},"which":{which}}}"#)
}

#[test]
fn full_drag_renders_overlay_and_reports_selection() {
    let mut host = host();

    let start = host.dispatch_json(&event("dragstart", 100.0, 100.0, 1)).unwrap();
    assert_eq!(start.disposition, EventDisposition::PREVENT_DEFAULT);
    assert_eq!(
        start.commands,
        vec![
            DomCommand::Css {
                width: 0.0,
                height: 0.0,
                top: 100.0,
                left: 100.0,
                border_width: "0".into(),
            },
            DomCommand::Append {
                root: "html>body".into(),
                class_name: "selection-box".into(),
            },
        ]
    );

    let mv = host.dispatch_json(&event("dragmove", 150.0, 80.0, 1)).unwrap();
    assert_eq!(
        mv.commands,
        vec![DomCommand::Css {
            width: 50.0,
            height: 20.0,
            top: 82.0,
            left: 98.0,
            border_width: "1px".into(),
        }]
    );
    assert_eq!(host.state(), TrackerState::Dragging);

    let end = host.dispatch_json(&event("dragend", 150.0, 80.0, 1)).unwrap();
    assert_eq!(end.disposition, EventDisposition::CONSUME);
    assert_eq!(end.commands, vec![DomCommand::Remove]);
    assert_eq!(end.pending_selections, 1);

    let selections = host.drain_selections();
    assert_eq!(selections.len(), 1);
    let r = selections[0];
    assert_eq!(r.start, Point::new(100.0, 100.0));
    assert_eq!((r.width, r.height), (50.0, -20.0));
    assert!(!r.ctrl_pressed);
    assert!(host.drain_selections().is_empty());
}

#[test]
fn click_without_drag_reports_nothing() {
    let mut host = host();
    host.dispatch_json(&event("dragstart", 5.0, 5.0, 1)).unwrap();
    let end = host.dispatch_json(&event("dragend", 5.0, 5.0, 1)).unwrap();
    assert_eq!(end.commands, vec![DomCommand::Remove]);
    assert_eq!(end.pending_selections, 0);
    assert_eq!(host.state(), TrackerState::Idle);
}

#[test]
fn right_button_never_shows_overlay() {
    let mut host = host();
    let start = host.dispatch_json(&event("dragstart", 5.0, 5.0, 3)).unwrap();
    assert!(start.commands.is_empty());
    let mv = host.dispatch_json(&event("dragmove", 50.0, 50.0, 3)).unwrap();
    assert!(mv.commands.is_empty());
    assert_eq!(host.state(), TrackerState::Idle);
}

#[test]
fn positioned_target_reports_surface_coordinates() {
    let mut host = LassoHost::from_config_json(
        r#"{"target":{"position":{"top":5,"left":5},"positioning":"relative"}}"#,
    )
    .unwrap();
    host.dispatch_json(&event("dragstart", 30.0, 30.0, 1)).unwrap();
    host.dispatch_json(&event("dragmove", 60.0, 45.0, 1)).unwrap();
    host.dispatch_json(
        r#"{"type":"dragend","pageX":60,"pageY":45,"which":1,"ctrlKey":true}"#,
    )
    .unwrap();

    let json = host.drain_selections_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "start": {"x": 25.0, "y": 25.0},
            "points": [
                {"x": 25.0, "y": 25.0},
                {"x": 55.0, "y": 25.0},
                {"x": 25.0, "y": 40.0},
                {"x": 55.0, "y": 40.0},
            ],
            "width": 30.0,
            "height": 15.0,
            "ctrlPressed": true,
        }])
    );
}

#[test]
fn dom_button_convention_reads_button_field() {
    let mut host = LassoHost::from_config_json(r#"{"buttonConvention":"dom_button"}"#).unwrap();
    host.dispatch_json(r#"{"type":"dragstart","pageX":0,"pageY":0,"button":0}"#)
        .unwrap();
    host.dispatch_json(r#"{"type":"dragmove","pageX":4,"pageY":4,"button":0}"#)
        .unwrap();
    host.dispatch_json(r#"{"type":"dragend","pageX":4,"pageY":4,"button":0}"#)
        .unwrap();
    let selections = host.drain_selections();
    assert_eq!(selections.len(), 1);
    let json = selection_to_json(&selections[0]).unwrap();
    assert!(json.contains("\"ctrlPressed\":false"), "{json}");
}

#[test]
fn malformed_event_is_rejected_without_state_change() {
    let mut host = host();
    host.dispatch_json(&event("dragstart", 1.0, 1.0, 1)).unwrap();
    assert_eq!(
        host.dispatch_json(r#"{"type":"dragmove","pageY":3,"which":1}"#),
        Err(InputParseError::MissingField("pageX"))
    );
    assert_eq!(host.state(), TrackerState::Pressed);
}

#[test]
fn reset_removes_overlay_mid_drag() {
    let mut host = host();
    host.dispatch_json(&event("dragstart", 1.0, 1.0, 1)).unwrap();
    host.dispatch_json(&event("dragmove", 9.0, 9.0, 1)).unwrap();
    assert_eq!(host.reset(), vec![DomCommand::Remove]);
    assert_eq!(host.state(), TrackerState::Idle);
    let end = host.dispatch_json(&event("dragend", 9.0, 9.0, 1)).unwrap();
    assert!(end.commands.is_empty());
    assert!(host.drain_selections().is_empty());
}

#[test]
fn dispatch_serializes_for_host() {
    let mut host = host();
    let out = host.dispatch_json(&event("dragend", 1.0, 1.0, 1)).unwrap();
    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "disposition": {"preventDefault": true, "stopPropagation": true},
            "commands": [],
            "pendingSelections": 0,
        })
    );
}

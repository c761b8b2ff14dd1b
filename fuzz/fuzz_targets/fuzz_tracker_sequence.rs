#![no_main]

use arbitrary::Arbitrary;
use lasso_core::{
    CommandOverlay, GestureTracker, Modifiers, PointerEvent, PointerPhase, Positioning,
    SelectionQueue, StaticSurface, SurfaceOffset, TrackerConfig, TrackerState,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Step {
    phase: u8,
    x: i16,
    y: i16,
    button: i8,
    ctrl: bool,
}

#[derive(Debug, Arbitrary)]
struct Input {
    top: i16,
    left: i16,
    positioned: bool,
    steps: Vec<Step>,
}

fuzz_target!(|input: Input| {
    let positioning = if input.positioned {
        Positioning::Relative
    } else {
        Positioning::Static
    };
    let surface = StaticSurface::new(
        SurfaceOffset::new(f64::from(input.top), f64::from(input.left)),
        positioning,
    );
    let mut t = GestureTracker::new(
        TrackerConfig::default(),
        surface,
        CommandOverlay::new(),
        SelectionQueue::new(),
    );

    for step in &input.steps {
        let phase = match step.phase % 3 {
            0 => PointerPhase::Start,
            1 => PointerPhase::Move,
            _ => PointerPhase::End,
        };
        let mut event =
            PointerEvent::new(f64::from(step.x), f64::from(step.y), i32::from(step.button));
        if step.ctrl {
            event = event.with_modifiers(Modifiers::CTRL);
        }

        let before = t.state();
        let delivered = t.handler().len();
        t.dispatch(phase, &event);

        if phase == PointerPhase::End {
            assert!(!t.overlay().is_attached(), "overlay left attached after release");
            let new = t.handler().len() - delivered;
            assert!(new <= 1);
            if let Some(r) = t.handler_mut().pop() {
                assert_eq!(before, TrackerState::Dragging);
                assert_eq!(r.points[0], r.start);
                assert_eq!(r.ctrl_pressed, step.ctrl);
            }
        }
        t.overlay_mut().drain();
    }
});

// Touch state threaded between DOM touch callbacks
use web_sys::{DomRect, TouchEvent, TouchList};

use crate::gesture::{GestureInterpreter, GestureState, Viewport};
use crate::model::{PointerSample, TargetTransform};

/// Live touches relative to the canvas rect.
fn pointer_samples(touches: &TouchList, rect: &DomRect) -> Vec<PointerSample> {
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| {
            PointerSample::new(
                t.identifier(),
                (t.client_x() as f64 - rect.left()) as f32,
                (t.client_y() as f64 - rect.top()) as f32,
            )
        })
        .collect()
}

/// Touches that started on the canvas. Fingers resting elsewhere on the page
/// (panels, buttons) never count towards the gesture.
pub fn canvas_pointers(e: &TouchEvent, rect: &DomRect) -> Vec<PointerSample> {
    pointer_samples(&e.target_touches(), rect)
}

#[derive(Debug, Clone)]
pub struct TouchState {
    pub gesture: GestureState,
    enabled: bool,
}

impl Default for TouchState {
    fn default() -> Self {
        Self {
            gesture: GestureState::Idle,
            enabled: true,
        }
    }
}

impl TouchState {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Locking and unlocking both drop the gesture in flight; fingers still
    /// down have to be lifted or re-placed before they drive the target again.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("touch interaction {}", if enabled { "unlocked" } else { "locked" });
        }
        self.enabled = enabled;
        self.gesture = GestureState::Idle;
    }

    pub fn down(&mut self, gi: &GestureInterpreter, pointers: &[PointerSample], transform: &TargetTransform) {
        if !self.enabled {
            return;
        }
        self.gesture = gi.pointers_down(pointers, transform);
    }

    /// Returns the updated transform, or `None` when the frame changed nothing.
    pub fn moved(
        &mut self,
        gi: &GestureInterpreter,
        pointers: &[PointerSample],
        transform: &TargetTransform,
        viewport: &impl Viewport,
    ) -> Option<TargetTransform> {
        if !self.enabled {
            return None;
        }
        let update = gi.pointers_move(pointers, &self.gesture, transform, viewport);
        self.gesture = update.state;
        (!update.delta.is_none()).then_some(update.transform)
    }

    pub fn up(&mut self, gi: &GestureInterpreter, remaining: &[PointerSample], transform: &TargetTransform) {
        if !self.enabled {
            return;
        }
        self.gesture = gi.pointers_up(remaining, &self.gesture, transform);
    }

    pub fn reset(&mut self) {
        self.gesture = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureMode;
    use crate::state::PerspectiveCamera;

    #[test]
    fn threads_gesture_through_lifecycle() {
        let gi = GestureInterpreter::default();
        let vp = PerspectiveCamera::default().frame(1000.0, 800.0);
        let mut ts = TouchState::default();
        let mut t = TargetTransform::default();

        ts.down(&gi, &[PointerSample::new(0, 500.0, 400.0)], &t);
        assert_eq!(ts.gesture.mode(), GestureMode::Move);

        t = ts
            .moved(&gi, &[PointerSample::new(0, 550.0, 400.0)], &t, &vp)
            .unwrap();
        assert!(t.position.x > 0.0);

        assert_eq!(ts.gesture.anchor(), Some(glam::Vec2::new(550.0, 400.0)));

        ts.up(&gi, &[], &t);
        assert!(ts.gesture.is_idle());
    }

    #[test]
    fn stray_move_without_down_changes_nothing() {
        let gi = GestureInterpreter::default();
        let vp = PerspectiveCamera::default().frame(1000.0, 800.0);
        let mut ts = TouchState::default();
        let t = TargetTransform::default();
        assert!(ts.moved(&gi, &[PointerSample::new(3, 10.0, 10.0)], &t, &vp).is_none());
        assert!(ts.gesture.is_idle());
    }

    #[test]
    fn lift_while_locked_leaves_no_stale_anchor() {
        let gi = GestureInterpreter::default();
        let vp = PerspectiveCamera::default().frame(1000.0, 800.0);
        let mut ts = TouchState::default();
        let t = TargetTransform::default();

        ts.down(&gi, &[PointerSample::new(0, 100.0, 400.0), PointerSample::new(1, 300.0, 400.0)], &t);
        assert_eq!(ts.gesture.mode(), GestureMode::ScaleRotate);

        ts.set_enabled(false);
        assert!(ts.gesture.is_idle());
        ts.up(&gi, &[PointerSample::new(0, 100.0, 400.0)], &t);
        assert!(ts.gesture.is_idle());
        assert!(ts.moved(&gi, &[PointerSample::new(0, 900.0, 400.0)], &t, &vp).is_none());

        // The finger that stayed down through the lock must not drag on unlock.
        ts.set_enabled(true);
        assert!(ts.gesture.is_idle());
        assert!(ts.moved(&gi, &[PointerSample::new(0, 901.0, 400.0)], &t, &vp).is_none());

        ts.down(&gi, &[PointerSample::new(0, 901.0, 400.0)], &t);
        let next = ts
            .moved(&gi, &[PointerSample::new(0, 902.0, 400.0)], &t, &vp)
            .unwrap();
        assert!(next.position.x > 0.0 && next.position.x < 0.01);
    }

    #[test]
    fn reset_keeps_lock() {
        let gi = GestureInterpreter::default();
        let mut ts = TouchState::default();
        ts.set_enabled(false);
        ts.reset();
        assert!(!ts.enabled());
        ts.down(&gi, &[PointerSample::new(0, 10.0, 10.0)], &TargetTransform::default());
        assert!(ts.gesture.is_idle());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use js_sys::Array;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{DomRect, EventTarget, Touch, TouchEvent, TouchEventInit, TouchInit};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn touch(id: i32, target: &EventTarget, x: f64, y: f64) -> Touch {
        let init = TouchInit::new(id, target);
        init.set_client_x(x);
        init.set_client_y(y);
        Touch::new(&init).unwrap()
    }

    #[wasm_bindgen_test]
    fn counts_only_touches_started_on_canvas() {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: EventTarget = document.create_element("canvas").unwrap().unchecked_into();
        let panel: EventTarget = document.create_element("div").unwrap().unchecked_into();

        let on_canvas = touch(0, &canvas, 120.0, 80.0);
        let on_panel = touch(1, &panel, 20.0, 20.0);
        let init = TouchEventInit::new();
        init.set_touches(&Array::of2(&on_canvas, &on_panel));
        init.set_target_touches(&Array::of1(&on_canvas));
        let e = TouchEvent::new_with_event_init_dict("touchmove", &init).unwrap();

        let rect = DomRect::new_with_x_and_y_and_width_and_height(100.0, 50.0, 400.0, 300.0).unwrap();
        let pointers = canvas_pointers(&e, &rect);
        assert_eq!(pointers, vec![PointerSample::new(0, 20.0, 30.0)]);
    }
}

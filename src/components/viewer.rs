use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TouchEvent};
use yew::prelude::*;

use super::transform_panel::TransformPanel;
use crate::gesture::{GestureInterpreter, GestureMode};
use crate::model::{GestureSettings, TargetTransform};
use crate::preview::draw_preview;
use crate::state::{PerspectiveCamera, TouchState, canvas_pointers};

#[derive(Properties, PartialEq, Clone)]
pub struct ViewerProps {
    pub settings: GestureSettings,
    pub interaction_enabled: bool,
    /// Bumped by the parent to put the model back at its starting transform.
    pub reset_epoch: u32,
}

#[function_component(Viewer)]
pub fn viewer(props: &ViewerProps) -> Html {
    let canvas_ref = use_node_ref();
    let camera = use_mut_ref(PerspectiveCamera::default);
    let transform = use_mut_ref(TargetTransform::default);
    let touch_state = {
        let enabled = props.interaction_enabled;
        use_mut_ref(move || {
            let mut ts = TouchState::default();
            ts.set_enabled(enabled);
            ts
        })
    };
    let interpreter = {
        let settings = props.settings;
        use_mut_ref(move || GestureInterpreter::new(settings))
    };
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let readout = use_state(|| (TargetTransform::default(), GestureMode::Idle));

    // Settings apply from the next pointer event on; a running gesture keeps its baselines.
    {
        let interpreter = interpreter.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with(props.settings, move |settings| {
            *interpreter.borrow_mut() = GestureInterpreter::new(*settings);
            log::info!("gesture settings applied: {:?}", settings);
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }
    // Locking or unlocking drops any gesture in flight
    {
        let touch_state = touch_state.clone();
        let transform = transform.clone();
        let draw_ref = draw_ref.clone();
        let readout = readout.clone();
        use_effect_with(props.interaction_enabled, move |enabled| {
            touch_state.borrow_mut().set_enabled(*enabled);
            readout.set((*transform.borrow(), GestureMode::Idle));
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }
    // Reset transform
    {
        let transform = transform.clone();
        let touch_state = touch_state.clone();
        let draw_ref = draw_ref.clone();
        let readout = readout.clone();
        use_effect_with(props.reset_epoch, move |epoch| {
            if *epoch > 0 {
                *transform.borrow_mut() = TargetTransform::default();
                touch_state.borrow_mut().reset();
                readout.set((TargetTransform::default(), GestureMode::Idle));
                log::info!("transform reset");
                if let Some(f) = &*draw_ref.borrow() {
                    f();
                }
            }
            || ()
        });
    }
    // Main mount effect (canvas, listeners)
    {
        let canvas_ref = canvas_ref.clone();
        let camera = camera.clone();
        let transform = transform.clone();
        let touch_state = touch_state.clone();
        let interpreter = interpreter.clone();
        let draw_ref_setup = draw_ref.clone();
        let readout = readout.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            compute_and_apply_canvas_size();

            let draw: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let camera = camera.clone();
                let transform = transform.clone();
                let touch_state = touch_state.clone();
                let interpreter = interpreter.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    else {
                        return;
                    };
                    let axis = interpreter.borrow().settings().rotation_axis;
                    draw_preview(
                        &ctx,
                        &camera.borrow(),
                        &transform.borrow(),
                        axis,
                        &touch_state.borrow().gesture,
                        canvas.width() as f32,
                        canvas.height() as f32,
                    );
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw.clone());
            draw();

            let publish = {
                let transform = transform.clone();
                let touch_state = touch_state.clone();
                let readout = readout.clone();
                let draw = draw.clone();
                move || {
                    readout.set((*transform.borrow(), touch_state.borrow().gesture.mode()));
                    draw();
                }
            };

            let resize_cb = {
                let draw = draw.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                    draw();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();

            // Touch: the canvas is the only input source
            let touch_start_cb = {
                let canvas_tc = canvas.clone();
                let transform_tc = transform.clone();
                let touch_state_tc = touch_state.clone();
                let interpreter_tc = interpreter.clone();
                let publish = publish.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if !touch_state_tc.borrow().enabled() {
                        return;
                    }
                    e.prevent_default();
                    let rect = canvas_tc.get_bounding_client_rect();
                    let pointers = canvas_pointers(&e, &rect);
                    let gi = *interpreter_tc.borrow();
                    touch_state_tc
                        .borrow_mut()
                        .down(&gi, &pointers, &transform_tc.borrow());
                    publish();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_move_cb = {
                let canvas_tc = canvas.clone();
                let camera_tc = camera.clone();
                let transform_tc = transform.clone();
                let touch_state_tc = touch_state.clone();
                let interpreter_tc = interpreter.clone();
                let publish = publish.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if !touch_state_tc.borrow().enabled() {
                        return;
                    }
                    e.prevent_default();
                    let rect = canvas_tc.get_bounding_client_rect();
                    let pointers = canvas_pointers(&e, &rect);
                    let frame = camera_tc
                        .borrow()
                        .frame(rect.width() as f32, rect.height() as f32);
                    let gi = *interpreter_tc.borrow();
                    let current = *transform_tc.borrow();
                    let moved = touch_state_tc
                        .borrow_mut()
                        .moved(&gi, &pointers, &current, &frame);
                    if let Some(next) = moved {
                        *transform_tc.borrow_mut() = next;
                        publish();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();
            let touch_end_cb = {
                let canvas_tc = canvas.clone();
                let transform_tc = transform.clone();
                let touch_state_tc = touch_state.clone();
                let interpreter_tc = interpreter.clone();
                let publish = publish.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if !touch_state_tc.borrow().enabled() {
                        return;
                    }
                    let rect = canvas_tc.get_bounding_client_rect();
                    let remaining = canvas_pointers(&e, &rect);
                    let gi = *interpreter_tc.borrow();
                    touch_state_tc
                        .borrow_mut()
                        .up(&gi, &remaining, &transform_tc.borrow());
                    publish();
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            canvas
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (&resize_cb, &touch_start_cb, &touch_move_cb, &touch_end_cb);
            }
        });
    }

    let (shown, mode) = *readout;
    html! {<div style="position:relative; width:100vw; height:100vh;">
        <canvas ref={canvas_ref.clone()} id="viewer-canvas" style="display:block; width:100%; height:100%; touch-action:none;"></canvas>
        <TransformPanel transform={shown} mode={mode} />
    </div>}
}

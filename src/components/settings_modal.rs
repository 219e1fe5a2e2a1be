use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::model::{DistanceMetric, GestureSettings, RotationAxis, SinglePointerMode};

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub settings: GestureSettings,
    pub on_change: Callback<GestureSettings>,
    pub on_close: Callback<()>,
    pub on_restore_defaults: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let current = props.settings;

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let axis_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(axis) = RotationAxis::ALL.into_iter().find(|a| a.label() == value) {
                cb.emit(GestureSettings {
                    rotation_axis: axis,
                    ..current
                });
            }
        })
    };
    let metric_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let distance_metric = if value == DistanceMetric::Horizontal.label() {
                DistanceMetric::Horizontal
            } else {
                DistanceMetric::Euclidean
            };
            cb.emit(GestureSettings {
                distance_metric,
                ..current
            });
        })
    };
    let single_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let single_pointer = if value == SinglePointerMode::Rotate.label() {
                SinglePointerMode::Rotate
            } else {
                SinglePointerMode::Move
            };
            cb.emit(GestureSettings {
                single_pointer,
                ..current
            });
        })
    };
    let rotate_sens_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            if let Ok(v) = input.value().parse::<f32>() {
                cb.emit(
                    GestureSettings {
                        rotate_sensitivity: v,
                        ..current
                    }
                    .sanitized(),
                );
            }
        })
    };
    let pinch_translate_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            cb.emit(GestureSettings {
                pinch_translate: !current.pinch_translate,
                ..current
            })
        })
    };
    let pinch_sens_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            if let Ok(v) = input.value().parse::<f32>() {
                cb.emit(
                    GestureSettings {
                        pinch_translate_sensitivity: v,
                        ..current
                    }
                    .sanitized(),
                );
            }
        })
    };
    let restore_cb = {
        let cb = props.on_restore_defaults.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if win
                    .confirm_with_message("Restore the default gesture settings?")
                    .unwrap_or(false)
                {
                    cb.emit(());
                }
            } else {
                cb.emit(());
            }
        })
    };

    let row = "display:flex; align-items:center; justify-content:space-between; gap:8px;";
    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Gesture Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style={row}>
                    <span>{"One finger"}</span>
                    <select onchange={single_cb}>
                        { for [SinglePointerMode::Move, SinglePointerMode::Rotate].into_iter().map(|m| html! {
                            <option value={m.label()} selected={m == current.single_pointer}>{ m.label() }</option>
                        }) }
                    </select>
                </label>
                <label style={row}>
                    <span>{"Rotation axis"}</span>
                    <select onchange={axis_cb}>
                        { for RotationAxis::ALL.into_iter().map(|a| html! {
                            <option value={a.label()} selected={a == current.rotation_axis}>{ a.label() }</option>
                        }) }
                    </select>
                </label>
                <label style={row}>
                    <span>{"Pinch distance"}</span>
                    <select onchange={metric_cb}>
                        { for [DistanceMetric::Euclidean, DistanceMetric::Horizontal].into_iter().map(|m| html! {
                            <option value={m.label()} selected={m == current.distance_metric}>{ m.label() }</option>
                        }) }
                    </select>
                </label>
                <label style={row}>
                    <span>{ format!("Orbit sensitivity ({:.2})", current.rotate_sensitivity) }</span>
                    <input type="range" min="0.05" max="1" step="0.05" value={current.rotate_sensitivity.to_string()} oninput={rotate_sens_cb} />
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={current.pinch_translate} onclick={pinch_translate_cb} />
                    <span>{"Drag while pinching"}</span>
                </label>
                <label style={row}>
                    <span>{ format!("Pinch drag sensitivity ({:.2})", current.pinch_translate_sensitivity) }</span>
                    <input type="range" min="0.05" max="1" step="0.05" disabled={!current.pinch_translate} value={current.pinch_translate_sensitivity.to_string()} oninput={pinch_sens_cb} />
                </label>
            </div>
            <div style="display:flex; gap:8px; flex-wrap:wrap;">
                <button onclick={restore_cb} style="background:#f85149; border:1px solid #b62324; color:#fff; flex:1;">{"Restore Defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Settings are saved in this browser and apply to the next gesture."}</div>
        </div>
    </div>}
}

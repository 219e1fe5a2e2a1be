use yew::prelude::*;

use crate::model::{GestureSettings, SinglePointerMode};

#[derive(Properties, PartialEq, Clone)]
pub struct HelpOverlayProps {
    pub show: bool,
    pub settings: GestureSettings,
    pub hide: Callback<()>,
}

#[function_component(HelpOverlay)]
pub fn help_overlay(props: &HelpOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let hide_cb = props.hide.clone();
    let hide_btn = Callback::from(move |_| hide_cb.emit(()));
    let one_finger = match props.settings.single_pointer {
        SinglePointerMode::Move => "Drag with one finger to slide the model across the screen.".to_string(),
        SinglePointerMode::Rotate => format!(
            "Drag sideways with one finger to spin the model about its {} axis.",
            props.settings.rotation_axis.label()
        ),
    };
    let two_finger_move = if props.settings.pinch_translate {
        html! { <li>{"Move both fingers together to drag the model while pinching."}</li> }
    } else {
        html! {}
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"AR Viewer"}</h2>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{ one_finger }</li>
                <li>{"Pinch with two fingers to scale the model."}</li>
                <li>{ format!("Twist two fingers to rotate about the {} axis.", props.settings.rotation_axis.label()) }</li>
                { two_finger_move }
                <li>{"Lift a finger at any time; the gesture picks up from where the model is."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={hide_btn}>{"Close"}</button>
            </div>
        </div>
    }
}

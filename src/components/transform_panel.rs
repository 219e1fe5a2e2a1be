use yew::prelude::*;

use crate::gesture::GestureMode;
use crate::model::TargetTransform;
use crate::util::{format_degrees, format_vec3};

#[derive(Properties, PartialEq, Clone)]
pub struct TransformPanelProps {
    pub transform: TargetTransform,
    pub mode: GestureMode,
}

#[function_component]
pub fn TransformPanel(props: &TransformPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let t = props.transform;
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#3fb950;", label_style)}>{"Position"}</span>
                <span style={format!("{} color:#3fb950;", value_style)}>{ format_vec3(t.position) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d29922;", label_style)}>{"Rotation"}</span>
                <span style={format!("{} color:#d29922;", value_style)}>{ format_degrees(t.rotation) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#db61a2;", label_style)}>{"Scale"}</span>
                <span style={format!("{} color:#db61a2;", value_style)}>{ format!("{:.2}x", t.scale) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Gesture"}</span>
                <span style={value_style}>{ props.mode.label() }</span>
            </div>
        </div>
    }
}

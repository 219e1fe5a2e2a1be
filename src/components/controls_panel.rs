use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub interaction_enabled: bool,
    pub on_toggle_interaction: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_show_help: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle_interaction.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let help_cb = {
        let cb = props.on_show_help.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_label = if props.interaction_enabled {
        "Lock Model"
    } else {
        "Unlock Model"
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:180px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={toggle_cb}>{ toggle_label }</button>
        <button onclick={reset_cb}>{"Reset Transform"}</button>
        <button onclick={settings_cb}>{"Settings"}</button>
        <button onclick={help_cb}>{"Help"}</button>
        { if !props.interaction_enabled { html!{ <div style="font-size:11px; opacity:0.7;">{"Touches are ignored while locked"}</div> } } else { html!{} } }
    </div>}
}

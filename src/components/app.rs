use super::{
    controls_panel::ControlsPanel, help_overlay::HelpOverlay, settings_modal::SettingsModal,
    viewer::Viewer,
};
use crate::model::GestureSettings;
use crate::storage;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(GestureSettings::default);
    let interaction_enabled = use_state(|| true);
    let reset_epoch = use_state(|| 0u32);
    let show_settings = use_state(|| false);
    let show_help = use_state(|| false);
    // Skip persisting until the stored copy has been read
    let loaded = use_state(|| false);

    // Load persisted settings
    {
        let settings = settings.clone();
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            match storage::load_settings() {
                Ok(Some(stored)) => settings.set(stored),
                Ok(None) => {}
                Err(err) => log::warn!("using default gesture settings: {err}"),
            }
            loaded.set(true);
            || ()
        });
    }
    // Persist settings changes
    {
        let loaded = *loaded;
        use_effect_with((*settings, loaded), move |(s, loaded)| {
            if *loaded {
                if let Err(err) = storage::save_settings(s) {
                    log::warn!("could not save gesture settings: {err}");
                }
            }
            || ()
        });
    }

    let on_change = {
        let settings = settings.clone();
        Callback::from(move |s: GestureSettings| settings.set(s))
    };
    let on_restore_defaults = {
        let settings = settings.clone();
        Callback::from(move |()| settings.set(GestureSettings::default()))
    };
    let on_toggle_interaction = {
        let interaction_enabled = interaction_enabled.clone();
        Callback::from(move |()| interaction_enabled.set(!*interaction_enabled))
    };
    let on_reset = {
        let reset_epoch = reset_epoch.clone();
        Callback::from(move |()| reset_epoch.set(*reset_epoch + 1))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |()| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |()| show_settings.set(false))
    };
    let open_help = {
        let show_help = show_help.clone();
        Callback::from(move |()| show_help.set(true))
    };
    let hide_help = {
        let show_help = show_help.clone();
        Callback::from(move |()| show_help.set(false))
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden;">
            <Viewer settings={*settings} interaction_enabled={*interaction_enabled} reset_epoch={*reset_epoch} />
            <ControlsPanel
                interaction_enabled={*interaction_enabled}
                on_toggle_interaction={on_toggle_interaction}
                on_reset={on_reset}
                on_show_help={open_help}
                on_open_settings={open_settings}
            />
            <HelpOverlay show={*show_help} settings={*settings} hide={hide_help} />
            <SettingsModal
                show={*show_settings}
                settings={*settings}
                on_change={on_change}
                on_close={close_settings}
                on_restore_defaults={on_restore_defaults}
            />
        </div>
    }
}

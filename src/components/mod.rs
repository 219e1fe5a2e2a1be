pub mod app;
pub mod controls_panel;
pub mod help_overlay;
pub mod settings_modal;
pub mod transform_panel;
pub mod viewer;

pub use app::App;

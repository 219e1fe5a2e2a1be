mod components;
mod error;
mod gesture;
mod model;
mod preview;
mod state;
mod storage;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    yew::Renderer::<App>::new().render();
}

pub mod camera;
pub mod touch;

pub use camera::PerspectiveCamera;
pub use touch::{TouchState, canvas_pointers};

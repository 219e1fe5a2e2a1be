//! Multi-touch gesture interpreter.
//!
//! Converts pointer snapshots into translate / rotate / scale updates for a
//! single target anchored in camera-relative space. Everything here is pure:
//! the caller owns the [`GestureState`] and the target transform and threads
//! them through the three lifecycle entry points on [`GestureInterpreter`].
//!
//! - one pointer drags the target in the screen plane, or orbits it when the
//!   settings select rotate mode;
//! - two pointers pinch-scale and twist it, optionally dragging it by their
//!   midpoint;
//! - any change in pointer count recaptures baselines from the current
//!   transform, so lifting or adding a finger never makes the target jump.

pub mod geometry;
mod interpreter;
mod state;
mod viewport;

pub use interpreter::GestureInterpreter;
pub use state::{GestureMode, GestureState};
pub use viewport::{Viewport, ViewportFrame};

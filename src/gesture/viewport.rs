use glam::{Mat4, Vec2, Vec3};

/// What the interpreter needs from the renderer each frame.
pub trait Viewport {
    /// Drawable size in pixels.
    fn size(&self) -> Vec2;
    fn camera_position(&self) -> Vec3;
    /// Maps a point in normalized device coordinates back into world space.
    fn unproject(&self, ndc: Vec3) -> Vec3;
}

/// Snapshot of a camera for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportFrame {
    pub width: f32,
    pub height: f32,
    pub camera_position: Vec3,
    pub inverse_view_projection: Mat4,
}

impl Viewport for ViewportFrame {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.inverse_view_projection.project_point3(ndc)
    }
}

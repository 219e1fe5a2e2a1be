// Perspective camera the viewer looks through; produces per-frame viewport snapshots.
use glam::{Mat4, Vec2, Vec3};

use crate::gesture::ViewportFrame;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 50f32.to_radians(),
            near: 0.1,
            far: 10.0,
        }
    }
}

impl PerspectiveCamera {
    pub fn view_projection(&self, width: f32, height: f32) -> Mat4 {
        let aspect = if height > 0.0 { width / height } else { 1.0 };
        let proj = Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.position, self.target, self.up);
        proj * view
    }

    pub fn frame(&self, width: f32, height: f32) -> ViewportFrame {
        ViewportFrame {
            width,
            height,
            camera_position: self.position,
            inverse_view_projection: self.view_projection(width, height).inverse(),
        }
    }

    /// World point to canvas pixels; `None` when behind the camera.
    pub fn project(&self, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let clip = self.view_projection(width, height) * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Viewport;

    #[test]
    fn origin_projects_to_canvas_center() {
        let cam = PerspectiveCamera::default();
        let p = cam.project(Vec3::ZERO, 1000.0, 800.0).unwrap();
        assert!((p - Vec2::new(500.0, 400.0)).length() < 1e-3);
    }

    #[test]
    fn unproject_lands_on_the_projected_pixel() {
        let cam = PerspectiveCamera::default();
        let frame = cam.frame(1000.0, 800.0);
        let world = frame.unproject(Vec3::new(0.2, -0.5, 0.3));
        let px = cam.project(world, 1000.0, 800.0).unwrap();
        assert!((px - Vec2::new(600.0, 600.0)).length() < 1e-2, "{px:?}");
    }

    #[test]
    fn points_behind_camera_do_not_project() {
        let cam = PerspectiveCamera::default();
        assert!(cam.project(Vec3::new(0.0, 0.0, 5.0), 640.0, 480.0).is_none());
    }

    #[test]
    fn frame_carries_camera_position() {
        let cam = PerspectiveCamera {
            position: Vec3::new(1.0, 2.0, 3.0),
            ..Default::default()
        };
        let frame = cam.frame(10.0, 20.0);
        assert_eq!(frame.camera_position(), cam.position);
        assert_eq!(frame.size(), Vec2::new(10.0, 20.0));
    }
}

// Screen and camera-relative math shared by the gesture modes.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::viewport::Viewport;
use crate::model::{DistanceMetric, PointerSample};

/// Distances and depths at or below this are treated as zero.
pub const EPSILON: f32 = 1e-6;

/// Depth at which NDC points are unprojected; only the ray direction is used.
const UNPROJECT_NDC_Z: f32 = 0.0;

pub fn pair_distance(a: Vec2, b: Vec2, metric: DistanceMetric) -> f32 {
    match metric {
        DistanceMetric::Euclidean => a.distance(b),
        DistanceMetric::Horizontal => (a.x - b.x).abs(),
    }
}

/// Angle of the vector from `b` to `a`, via atan2 so sign and quadrant survive.
pub fn pair_angle(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    d.y.atan2(d.x)
}

pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Wraps an angle difference into (-PI, PI].
pub fn wrap_angle(a: f32) -> f32 {
    let w = a.rem_euclid(TAU);
    if w > PI { w - TAU } else { w }
}

/// Exactly two pointers, ordered by id so the pair angle is stable
/// whatever order the platform lists them in.
pub fn ordered_pair(pointers: &[PointerSample]) -> Option<(PointerSample, PointerSample)> {
    match pointers {
        [a, b] if a.id <= b.id => Some((*a, *b)),
        [a, b] => Some((*b, *a)),
        _ => None,
    }
}

/// Pixel delta to NDC delta, Y flipped. `None` for an empty viewport.
pub fn ndc_delta(pixels: Vec2, size: Vec2) -> Option<Vec2> {
    if size.x <= EPSILON || size.y <= EPSILON {
        return None;
    }
    Some(Vec2::new(pixels.x * 2.0 / size.x, -pixels.y * 2.0 / size.y))
}

/// World-space displacement that keeps a point at `depth_point`'s camera depth
/// under a finger that moved by `ndc` from the screen center.
///
/// Both the center ray and the offset ray are intersected with the plane
/// perpendicular to the view axis through `depth_point`; the result is the
/// difference of the two hits. A zero `ndc` always yields zero.
pub fn world_delta(viewport: &impl Viewport, ndc: Vec2, depth_point: Vec3) -> Vec3 {
    let eye = viewport.camera_position();
    let forward = (viewport.unproject(Vec3::new(0.0, 0.0, UNPROJECT_NDC_Z)) - eye).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Vec3::ZERO;
    }
    // Fall back to the world origin's depth when the target sits at or behind the camera.
    let depth = [(depth_point - eye).dot(forward), (-eye).dot(forward)]
        .into_iter()
        .find(|d| *d > EPSILON)
        .unwrap_or(1.0);

    let ray = viewport.unproject(ndc.extend(UNPROJECT_NDC_Z)) - eye;
    let along = ray.dot(forward);
    if along <= EPSILON {
        return Vec3::ZERO;
    }
    ray * (depth / along) - forward * depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PerspectiveCamera;

    #[test]
    fn horizontal_metric_ignores_vertical_offset() {
        let a = Vec2::new(100.0, 0.0);
        let b = Vec2::new(400.0, 400.0);
        assert_eq!(pair_distance(a, b, DistanceMetric::Horizontal), 300.0);
        assert_eq!(pair_distance(a, b, DistanceMetric::Euclidean), 500.0);
        assert_eq!(pair_distance(b, a, DistanceMetric::Horizontal), 300.0);
    }

    #[test]
    fn pair_angle_keeps_quadrant() {
        let o = Vec2::ZERO;
        assert!((pair_angle(Vec2::new(1.0, 0.0), o) - 0.0).abs() < 1e-6);
        assert!((pair_angle(Vec2::new(0.0, 1.0), o) - PI / 2.0).abs() < 1e-6);
        assert!((pair_angle(Vec2::new(-1.0, 0.0), o) - PI).abs() < 1e-6);
        assert!((pair_angle(Vec2::new(0.0, -1.0), o) + PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn wrap_angle_range() {
        assert!((wrap_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-5);
        assert!((wrap_angle(PI) - PI).abs() < 1e-5);
        assert!(wrap_angle(TAU).abs() < 1e-5);
        assert!((wrap_angle(0.3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn ordered_pair_sorts_by_id() {
        let a = PointerSample::new(7, 1.0, 1.0);
        let b = PointerSample::new(3, 2.0, 2.0);
        let (first, second) = ordered_pair(&[a, b]).unwrap();
        assert_eq!(first.id, 3);
        assert_eq!(second.id, 7);
        assert!(ordered_pair(&[a]).is_none());
        assert!(ordered_pair(&[a, b, a]).is_none());
    }

    #[test]
    fn ndc_delta_flips_y() {
        let d = ndc_delta(Vec2::new(100.0, 80.0), Vec2::new(1000.0, 800.0)).unwrap();
        assert!((d.x - 0.2).abs() < 1e-6);
        assert!((d.y + 0.2).abs() < 1e-6);
        assert!(ndc_delta(Vec2::ONE, Vec2::new(0.0, 800.0)).is_none());
    }

    #[test]
    fn world_delta_matches_frustum_width_at_target_depth() {
        let cam = PerspectiveCamera::default();
        let frame = cam.frame(1000.0, 800.0);
        let d = world_delta(&frame, Vec2::new(0.2, 0.0), Vec3::ZERO);
        let half_width = 3.0 * (cam.fov_y * 0.5).tan() * 1.25;
        assert!((d.x - 0.2 * half_width).abs() < 1e-4, "{d:?}");
        assert!(d.y.abs() < 1e-4);
        assert!(d.z.abs() < 1e-4);
    }

    #[test]
    fn world_delta_zero_for_zero_ndc() {
        let frame = PerspectiveCamera::default().frame(640.0, 480.0);
        let d = world_delta(&frame, Vec2::ZERO, Vec3::new(0.3, -0.2, 0.5));
        assert!(d.length() < 1e-5);
    }

    #[test]
    fn world_delta_scales_with_depth() {
        let frame = PerspectiveCamera::default().frame(800.0, 800.0);
        let near = world_delta(&frame, Vec2::new(0.1, 0.1), Vec3::new(0.0, 0.0, 1.5));
        let far = world_delta(&frame, Vec2::new(0.1, 0.1), Vec3::new(0.0, 0.0, -3.0));
        assert!((far.length() / near.length() - 4.0).abs() < 1e-3);
    }
}

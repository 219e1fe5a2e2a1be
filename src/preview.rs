//! Flat wireframe preview of the target, drawn on a 2D canvas.
//! Stands in for the scene renderer so gestures have something to act on.

use glam::Vec3;
use web_sys::CanvasRenderingContext2d;

use crate::gesture::{GestureMode, GestureState};
use crate::model::{RotationAxis, TargetTransform};
use crate::state::PerspectiveCamera;

const HALF_EXTENT: f32 = 0.25;

#[rustfmt::skip]
const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 3), (3, 2), (2, 0),
    (4, 5), (5, 7), (7, 6), (6, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// World-space edges of the target's box.
pub fn box_edges(transform: &TargetTransform, axis: RotationAxis) -> Vec<(Vec3, Vec3)> {
    let m = transform.matrix(axis);
    let corners: Vec<Vec3> = (0..8)
        .map(|i| {
            let sign = |bit: usize| if i & bit == 0 { -HALF_EXTENT } else { HALF_EXTENT };
            m.transform_point3(Vec3::new(sign(1), sign(2), sign(4)))
        })
        .collect();
    EDGES.iter().map(|&(a, b)| (corners[a], corners[b])).collect()
}

fn stroke_segment(
    ctx: &CanvasRenderingContext2d,
    camera: &PerspectiveCamera,
    (a, b): (Vec3, Vec3),
    w: f32,
    h: f32,
) {
    if let (Some(pa), Some(pb)) = (camera.project(a, w, h), camera.project(b, w, h)) {
        ctx.begin_path();
        ctx.move_to(pa.x as f64, pa.y as f64);
        ctx.line_to(pb.x as f64, pb.y as f64);
        ctx.stroke();
    }
}

pub fn draw_preview(
    ctx: &CanvasRenderingContext2d,
    camera: &PerspectiveCamera,
    transform: &TargetTransform,
    axis: RotationAxis,
    gesture: &GestureState,
    width: f32,
    height: f32,
) {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str("#0e1116");
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    // Rotation axis through the target's origin.
    let axis_dir = axis.unit() * HALF_EXTENT * 2.0 * transform.scale;
    ctx.set_stroke_style_str("#3a4455");
    ctx.set_line_width(1.0);
    stroke_segment(
        ctx,
        camera,
        (transform.position - axis_dir, transform.position + axis_dir),
        width,
        height,
    );

    let color = match gesture.mode() {
        GestureMode::Idle => "#58a6ff",
        GestureMode::Move => "#3fb950",
        GestureMode::Rotate => "#d29922",
        GestureMode::ScaleRotate => "#db61a2",
    };
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(2.0);
    for edge in box_edges(transform, axis) {
        stroke_segment(ctx, camera, edge, width, height);
    }

    if let Some(anchor) = gesture.anchor() {
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.arc(anchor.x as f64, anchor.y as f64, 6.0, 0.0, std::f64::consts::TAU)
            .ok();
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_follows_scale_and_translation() {
        let t = TargetTransform {
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: 0.0,
            scale: 2.0,
        };
        let edges = box_edges(&t, RotationAxis::Z);
        assert_eq!(edges.len(), 12);
        for (a, b) in &edges {
            assert!(((*a - *b).length() - 1.0).abs() < 1e-5);
            assert!((a.x - 1.0).abs() <= 0.5 + 1e-5);
        }
    }

    #[test]
    fn box_rotates_about_axis() {
        let t = TargetTransform {
            rotation: std::f32::consts::FRAC_PI_4,
            ..Default::default()
        };
        let edges = box_edges(&t, RotationAxis::Y);
        let max_x = edges
            .iter()
            .flat_map(|(a, b)| [a.x, b.x])
            .fold(f32::MIN, f32::max);
        assert!((max_x - HALF_EXTENT * std::f32::consts::SQRT_2).abs() < 1e-5);
        let max_y = edges
            .iter()
            .flat_map(|(a, b)| [a.y, b.y])
            .fold(f32::MIN, f32::max);
        assert!((max_y - HALF_EXTENT).abs() < 1e-5);
    }
}

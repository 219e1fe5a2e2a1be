//! Core data models for the AR viewer.
//! Pointer samples, the manipulated object's transform and the gesture settings
//! that select between the manipulation variants.

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// One active touch point at one instant, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationAxis {
    X,
    Y,
    /// Billboard rotation facing the camera.
    #[default]
    Z,
}

impl RotationAxis {
    pub const ALL: [RotationAxis; 3] = [RotationAxis::X, RotationAxis::Y, RotationAxis::Z];

    pub fn unit(self) -> Vec3 {
        match self {
            RotationAxis::X => Vec3::X,
            RotationAxis::Y => Vec3::Y,
            RotationAxis::Z => Vec3::Z,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RotationAxis::X => "X",
            RotationAxis::Y => "Y",
            RotationAxis::Z => "Z",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Straight-line distance between the two pointers.
    #[default]
    Euclidean,
    /// Absolute horizontal separation only. Breaks down when fingers are not level.
    Horizontal,
}

impl DistanceMetric {
    pub fn label(self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "Euclidean",
            DistanceMetric::Horizontal => "Horizontal",
        }
    }
}

/// What a single-finger drag does to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SinglePointerMode {
    /// Translate in the screen plane.
    #[default]
    Move,
    /// Orbit about the rotation axis.
    Rotate,
}

impl SinglePointerMode {
    pub fn label(self) -> &'static str {
        match self {
            SinglePointerMode::Move => "Move",
            SinglePointerMode::Rotate => "Rotate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub rotation_axis: RotationAxis,
    pub distance_metric: DistanceMetric,
    pub single_pointer: SinglePointerMode,
    /// Damping applied to single-pointer orbit, in (0, 1].
    pub rotate_sensitivity: f32,
    /// Let the two-finger midpoint drag the target while pinching.
    pub pinch_translate: bool,
    pub pinch_translate_sensitivity: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            rotation_axis: RotationAxis::Z,
            distance_metric: DistanceMetric::Euclidean,
            single_pointer: SinglePointerMode::Move,
            rotate_sensitivity: 1.0,
            pinch_translate: true,
            pinch_translate_sensitivity: 0.5,
        }
    }
}

impl GestureSettings {
    /// Sensitivities pulled back into range; values loaded from storage may be anything.
    pub fn sanitized(mut self) -> Self {
        self.rotate_sensitivity = clamp_sensitivity(self.rotate_sensitivity, 1.0);
        self.pinch_translate_sensitivity = clamp_sensitivity(self.pinch_translate_sensitivity, 0.5);
        self
    }
}

fn clamp_sensitivity(v: f32, fallback: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v.min(1.0)
    } else {
        fallback
    }
}

/// Local transform of the manipulated object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetTransform {
    pub position: Vec3,
    /// Single-axis rotation in radians; the axis comes from the settings.
    pub rotation: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl Default for TargetTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl TargetTransform {
    pub fn rotation_quat(&self, axis: RotationAxis) -> Quat {
        Quat::from_axis_angle(axis.unit(), self.rotation)
    }

    pub fn matrix(&self, axis: RotationAxis) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation_quat(axis),
            self.position,
        )
    }
}

/// Per-frame change: additive translation and rotation, multiplicative scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformDelta {
    pub translation: Vec3,
    pub rotation: f32,
    pub scale: f32,
}

impl Default for TransformDelta {
    fn default() -> Self {
        Self::NONE
    }
}

impl TransformDelta {
    pub const NONE: TransformDelta = TransformDelta {
        translation: Vec3::ZERO,
        rotation: 0.0,
        scale: 1.0,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    pub fn apply(&self, t: &TargetTransform) -> TargetTransform {
        TargetTransform {
            position: t.position + self.translation,
            rotation: t.rotation + self.rotation,
            scale: t.scale * self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_fill_missing_fields_with_defaults() {
        let s: GestureSettings = serde_json::from_str(r#"{"rotation_axis":"Y"}"#).unwrap();
        assert_eq!(s.rotation_axis, RotationAxis::Y);
        assert_eq!(s.distance_metric, DistanceMetric::Euclidean);
        assert_eq!(s.single_pointer, SinglePointerMode::Move);
        assert!(s.pinch_translate);
    }

    #[test]
    fn settings_json_keeps_variant_choices() {
        let s = GestureSettings {
            rotation_axis: RotationAxis::X,
            distance_metric: DistanceMetric::Horizontal,
            single_pointer: SinglePointerMode::Rotate,
            rotate_sensitivity: 0.25,
            pinch_translate: false,
            pinch_translate_sensitivity: 0.1,
        };
        let raw = serde_json::to_string(&s).unwrap();
        let back: GestureSettings = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn sanitized_clamps_bad_sensitivities() {
        let s = GestureSettings {
            rotate_sensitivity: 4.0,
            pinch_translate_sensitivity: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.rotate_sensitivity, 1.0);
        assert_eq!(s.pinch_translate_sensitivity, 0.5);

        let s = GestureSettings {
            rotate_sensitivity: -0.3,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.rotate_sensitivity, 1.0);
    }

    #[test]
    fn delta_apply_is_additive_and_multiplicative() {
        let t = TargetTransform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: 0.5,
            scale: 2.0,
        };
        let d = TransformDelta {
            translation: Vec3::new(0.5, 0.0, -1.0),
            rotation: -0.25,
            scale: 1.5,
        };
        let out = d.apply(&t);
        assert_eq!(out.position, Vec3::new(1.5, 2.0, 2.0));
        assert!((out.rotation - 0.25).abs() < 1e-6);
        assert!((out.scale - 3.0).abs() < 1e-6);
        assert_eq!(TransformDelta::NONE.apply(&t), t);
    }

    #[test]
    fn matrix_rotates_about_configured_axis() {
        let t = TargetTransform {
            rotation: std::f32::consts::FRAC_PI_2,
            ..Default::default()
        };
        let p = t.matrix(RotationAxis::Z).transform_point3(Vec3::X);
        assert!((p - Vec3::Y).length() < 1e-5);
        let p = t.matrix(RotationAxis::Y).transform_point3(Vec3::X);
        assert!((p - Vec3::NEG_Z).length() < 1e-5);
    }
}

// Formatting helpers for the transform readout
use std::f32::consts::TAU;

use glam::Vec3;

pub fn format_vec3(v: Vec3) -> String {
    format!("{:+.2}, {:+.2}, {:+.2}", v.x, v.y, v.z)
}

/// Angle in degrees, folded into [0, 360).
pub fn format_degrees(radians: f32) -> String {
    // abs() drops the negative zero rem_euclid returns for exact negative multiples
    let deg = radians.rem_euclid(TAU).to_degrees().abs();
    // rem_euclid can land on TAU itself after rounding
    let deg = if deg >= 359.95 { 0.0 } else { deg };
    format!("{:.1}°", deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_keeps_signs() {
        assert_eq!(format_vec3(Vec3::new(0.5, -1.0, 0.0)), "+0.50, -1.00, +0.00");
    }

    #[test]
    fn degrees_fold_negative_angles() {
        assert_eq!(format_degrees(-std::f32::consts::FRAC_PI_2), "270.0°");
        assert_eq!(format_degrees(std::f32::consts::PI), "180.0°");
        assert_eq!(format_degrees(-TAU), "0.0°");
    }
}

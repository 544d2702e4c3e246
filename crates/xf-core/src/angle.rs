//! Euler angle normalization

use glam::Vec3;

/// Inputs beyond this magnitude are reduced with `%` before wrapping,
/// so the loops below stay short for any finite value.
const LARGE_ANGLE: f32 = 360.0 * 64.0;

/// Wrap an angle in degrees into the (-180, 180] range
///
/// The result differs from the input by an exact multiple of 360.
/// Non-finite inputs are returned unchanged.
pub fn wrap_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }

    let mut angle = if angle.abs() > LARGE_ANGLE {
        angle % 360.0
    } else {
        angle
    };
    while angle > 180.0 {
        angle -= 360.0;
    }
    while angle <= -180.0 {
        angle += 360.0;
    }
    angle
}

/// Wrap each component of an Euler triple (degrees)
pub fn wrap_euler(euler: Vec3) -> Vec3 {
    Vec3::new(wrap_angle(euler.x), wrap_angle(euler.y), wrap_angle(euler.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f32; 14] = [
        0.0, 45.0, 180.0, -180.0, 181.0, -181.0, 359.5, 360.0, 540.0, -540.0, 725.25, -1000.75,
        12345.5, -98765.0,
    ];

    #[test]
    fn test_wrap_range() {
        for a in SAMPLES {
            let w = wrap_angle(a);
            assert!(w > -180.0 && w <= 180.0, "{} wrapped to {}", a, w);
        }
    }

    #[test]
    fn test_wrap_idempotent() {
        for a in SAMPLES {
            let w = wrap_angle(a);
            assert_eq!(wrap_angle(w), w);
        }
    }

    #[test]
    fn test_wrap_congruent() {
        for a in SAMPLES {
            let turns = (a - wrap_angle(a)) / 360.0;
            assert!((turns - turns.round()).abs() < 1e-4, "{} not congruent", a);
        }
    }

    #[test]
    fn test_wrap_boundaries() {
        assert_eq!(wrap_angle(180.0), 180.0);
        assert_eq!(wrap_angle(-180.0), 180.0);
        assert_eq!(wrap_angle(540.0), 180.0);
        assert_eq!(wrap_angle(270.0), -90.0);
        assert_eq!(wrap_angle(-270.0), 90.0);
    }

    #[test]
    fn test_wrap_non_finite() {
        assert!(wrap_angle(f32::NAN).is_nan());
        assert_eq!(wrap_angle(f32::INFINITY), f32::INFINITY);
    }

    #[test]
    fn test_wrap_euler() {
        let e = wrap_euler(Vec3::new(370.0, -190.0, 90.0));
        assert_eq!(e, Vec3::new(10.0, 170.0, 90.0));
    }
}

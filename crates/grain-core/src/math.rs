//! Scalar helpers shared by the lattice algorithms.

/// Lattice cell index containing `f`. Saturates for coordinates outside the
/// `i32` range; NaN maps to 0 and keeps propagating through the offsets.
#[inline]
pub fn floor_to_i32(f: f64) -> i32 {
    f.floor() as i32
}

/// Nearest lattice point, halves rounded away from zero.
#[inline]
pub fn round_to_i32(f: f64) -> i32 {
    f.round() as i32
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Cubic smoothstep `3t² − 2t³`.
#[inline]
pub fn interp_hermite(t: f32) -> f32 {
    t * t * (t * -2.0 + 3.0)
}

/// Quintic smoothstep `6t⁵ − 15t⁴ + 10t³`; continuous second derivative.
#[inline]
pub fn interp_quintic(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Cubic interpolation between `b` and `c` using the outer samples `a` and
/// `d` as tangent guides.
#[inline]
pub fn cubic_lerp(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let p = (d - c) - (a - b);
    t * t * t * p + t * t * ((a - b) - p) + t * (c - a) + b
}

/// Triangle wave with period 2 folded into `[0, 1]`. Infinite input has no
/// phase and maps to 0.
#[inline]
pub fn ping_pong(t: f32) -> f32 {
    if t.is_infinite() {
        return 0.0;
    }
    let t = t - (t * 0.5).trunc() * 2.0;
    if t < 1.0 { t } else { 2.0 - t }
}

/// Radial falloff `a⁴` used by the simplex kernels.
#[inline]
pub fn kernel(a: f32) -> f32 {
    (a * a) * (a * a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn floor_handles_negative_integers() {
        assert_eq!(floor_to_i32(-2.0), -2);
        assert_eq!(floor_to_i32(-1.5), -2);
        assert_eq!(floor_to_i32(1.999), 1);
    }

    #[test]
    fn round_is_half_away_from_zero() {
        assert_eq!(round_to_i32(0.5), 1);
        assert_eq!(round_to_i32(-0.5), -1);
        assert_eq!(round_to_i32(2.49), 2);
    }

    #[test]
    fn non_finite_input_does_not_panic() {
        assert_eq!(floor_to_i32(f64::NAN), 0);
        assert_eq!(floor_to_i32(f64::INFINITY), i32::MAX);
        assert_eq!(round_to_i32(f64::NEG_INFINITY), i32::MIN);
    }

    #[test]
    fn smoothsteps_hit_endpoints() {
        for f in [interp_hermite, interp_quintic] {
            assert_abs_diff_eq!(f(0.0), 0.0);
            assert_abs_diff_eq!(f(0.5), 0.5);
            assert_abs_diff_eq!(f(1.0), 1.0);
        }
    }

    #[test]
    fn cubic_lerp_passes_through_inner_samples() {
        assert_abs_diff_eq!(cubic_lerp(0.3, -0.2, 0.7, 0.1, 0.0), -0.2);
        assert_abs_diff_eq!(cubic_lerp(0.3, -0.2, 0.7, 0.1, 1.0), 0.7, epsilon = 1e-6);
    }

    #[test]
    fn ping_pong_folds_into_unit_interval() {
        assert_abs_diff_eq!(ping_pong(0.25), 0.25);
        assert_abs_diff_eq!(ping_pong(1.5), 0.5);
        assert_abs_diff_eq!(ping_pong(2.25), 0.25);
        assert_abs_diff_eq!(ping_pong(3.75), 0.25);
        for i in 0..400 {
            let v = ping_pong(i as f32 * 0.037);
            assert!((0.0..=1.0).contains(&v), "ping_pong out of range: {v}");
        }
        assert_eq!(ping_pong(f32::INFINITY), 0.0);
        assert!(ping_pong(f32::NAN).is_nan());
    }
}

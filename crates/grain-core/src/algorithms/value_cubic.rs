//! Value noise blended with cubic interpolation over a 4×4 (4×4×4) block of
//! corners. Each cubic pass can overshoot its inputs by half, hence the
//! `1 / 1.5` normalization per axis.
use crate::hash::{value_coord_2d, value_coord_3d, PRIME_X, PRIME_X2, PRIME_Y, PRIME_Y2, PRIME_Z, PRIME_Z2};
use crate::math::{cubic_lerp, floor_to_i32};

const AXIS_NORM: f32 = 1.0 / 1.5;

/// Primed coordinates of the four lattice lines around cell `c`.
#[inline]
fn taps(c: i32, prime: i32, prime2: i32) -> [i32; 4] {
    let c = c.wrapping_mul(prime);
    [c.wrapping_sub(prime), c, c.wrapping_add(prime), c.wrapping_add(prime2)]
}

#[inline]
fn cubic(v: [f32; 4], t: f32) -> f32 {
    cubic_lerp(v[0], v[1], v[2], v[3], t)
}

pub fn sample_2d(seed: i32, x: f64, y: f64) -> f32 {
    let x1 = floor_to_i32(x);
    let y1 = floor_to_i32(y);
    let xs = (x - x1 as f64) as f32;
    let ys = (y - y1 as f64) as f32;

    let xp = taps(x1, PRIME_X, PRIME_X2);
    let yp = taps(y1, PRIME_Y, PRIME_Y2);

    let rows = yp.map(|y| cubic(xp.map(|x| value_coord_2d(seed, x, y)), xs));
    cubic(rows, ys) * (AXIS_NORM * AXIS_NORM)
}

pub fn sample_3d(seed: i32, x: f64, y: f64, z: f64) -> f32 {
    let x1 = floor_to_i32(x);
    let y1 = floor_to_i32(y);
    let z1 = floor_to_i32(z);
    let xs = (x - x1 as f64) as f32;
    let ys = (y - y1 as f64) as f32;
    let zs = (z - z1 as f64) as f32;

    let xp = taps(x1, PRIME_X, PRIME_X2);
    let yp = taps(y1, PRIME_Y, PRIME_Y2);
    let zp = taps(z1, PRIME_Z, PRIME_Z2);

    let planes = zp.map(|z| {
        let rows = yp.map(|y| cubic(xp.map(|x| value_coord_3d(seed, x, y, z)), xs));
        cubic(rows, ys)
    });
    cubic(planes, zs) * (AXIS_NORM * AXIS_NORM * AXIS_NORM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::lattice_hash_2d;

    #[test]
    fn interpolates_through_corner_values() {
        let corner = lattice_hash_2d(5, 2, 3) as f32 / 2_147_483_648.0;
        let v = sample_2d(5, 2.0, 3.0);
        assert!((v - corner * AXIS_NORM * AXIS_NORM).abs() < 1e-6);
    }

    #[test]
    fn taps_straddle_the_cell() {
        let t = taps(0, PRIME_X, PRIME_X2);
        assert_eq!(t, [-PRIME_X, 0, PRIME_X, PRIME_X2]);
    }
}

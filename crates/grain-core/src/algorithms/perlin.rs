//! Classic gradient noise with quintic fade.
use crate::hash::{grad_coord_2d, grad_coord_3d, PRIME_X, PRIME_Y, PRIME_Z};
use crate::math::{floor_to_i32, interp_quintic, lerp};

const SCALE_2D: f32 = 1.424_769_110_467_781_3;
const SCALE_3D: f32 = 0.964_921_414_852_142_3;

pub fn sample_2d(seed: i32, x: f64, y: f64) -> f32 {
    let x0 = floor_to_i32(x);
    let y0 = floor_to_i32(y);

    let xd0 = (x - x0 as f64) as f32;
    let yd0 = (y - y0 as f64) as f32;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;

    let xs = interp_quintic(xd0);
    let ys = interp_quintic(yd0);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);

    let xf0 = lerp(
        grad_coord_2d(seed, x0, y0, xd0, yd0),
        grad_coord_2d(seed, x1, y0, xd1, yd0),
        xs,
    );
    let xf1 = lerp(
        grad_coord_2d(seed, x0, y1, xd0, yd1),
        grad_coord_2d(seed, x1, y1, xd1, yd1),
        xs,
    );

    lerp(xf0, xf1, ys) * SCALE_2D
}

pub fn sample_3d(seed: i32, x: f64, y: f64, z: f64) -> f32 {
    let x0 = floor_to_i32(x);
    let y0 = floor_to_i32(y);
    let z0 = floor_to_i32(z);

    let xd0 = (x - x0 as f64) as f32;
    let yd0 = (y - y0 as f64) as f32;
    let zd0 = (z - z0 as f64) as f32;
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;
    let zd1 = zd0 - 1.0;

    let xs = interp_quintic(xd0);
    let ys = interp_quintic(yd0);
    let zs = interp_quintic(zd0);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let z0 = z0.wrapping_mul(PRIME_Z);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);
    let z1 = z0.wrapping_add(PRIME_Z);

    // Interpolate along x for each of the four (y, z) edges, then y, then z.
    let edge = |yp: i32, zp: i32, yd: f32, zd: f32| {
        lerp(
            grad_coord_3d(seed, x0, yp, zp, xd0, yd, zd),
            grad_coord_3d(seed, x1, yp, zp, xd1, yd, zd),
            xs,
        )
    };
    let yf0 = lerp(edge(y0, z0, yd0, zd0), edge(y1, z0, yd1, zd0), ys);
    let yf1 = lerp(edge(y0, z1, yd0, zd1), edge(y1, z1, yd1, zd1), ys);

    lerp(yf0, yf1, zs) * SCALE_3D
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_integer_points() {
        for (x, y) in [(0.0, 0.0), (3.0, -7.0), (-12.0, 5.0)] {
            assert_eq!(sample_2d(1337, x, y), 0.0);
            assert_eq!(sample_3d(1337, x, y, 2.0), 0.0);
        }
    }

    #[test]
    fn nonzero_inside_cells() {
        let any = (0..64).any(|i| sample_2d(3, 0.5 + i as f64, 0.31).abs() > 0.1);
        assert!(any);
    }
}

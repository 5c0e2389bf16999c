//! Value noise: a pseudo-random scalar per lattice corner, Hermite-blended.
use crate::hash::{value_coord_2d, value_coord_3d, PRIME_X, PRIME_Y, PRIME_Z};
use crate::math::{floor_to_i32, interp_hermite, lerp};

pub fn sample_2d(seed: i32, x: f64, y: f64) -> f32 {
    let x0 = floor_to_i32(x);
    let y0 = floor_to_i32(y);

    let xs = interp_hermite((x - x0 as f64) as f32);
    let ys = interp_hermite((y - y0 as f64) as f32);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);

    let xf0 = lerp(value_coord_2d(seed, x0, y0), value_coord_2d(seed, x1, y0), xs);
    let xf1 = lerp(value_coord_2d(seed, x0, y1), value_coord_2d(seed, x1, y1), xs);

    lerp(xf0, xf1, ys)
}

pub fn sample_3d(seed: i32, x: f64, y: f64, z: f64) -> f32 {
    let x0 = floor_to_i32(x);
    let y0 = floor_to_i32(y);
    let z0 = floor_to_i32(z);

    let xs = interp_hermite((x - x0 as f64) as f32);
    let ys = interp_hermite((y - y0 as f64) as f32);
    let zs = interp_hermite((z - z0 as f64) as f32);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let z0 = z0.wrapping_mul(PRIME_Z);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);
    let z1 = z0.wrapping_add(PRIME_Z);

    let edge = |yp: i32, zp: i32| lerp(value_coord_3d(seed, x0, yp, zp), value_coord_3d(seed, x1, yp, zp), xs);
    let yf0 = lerp(edge(y0, z0), edge(y1, z0), ys);
    let yf1 = lerp(edge(y0, z1), edge(y1, z1), ys);

    lerp(yf0, yf1, zs)
}

//! Displacement from random unit vectors on the integer lattice, blended with
//! Hermite smoothing. The blend of unit vectors never exceeds length 1.
use crate::hash::{hash_2d, hash_3d, rand_vec_2d, rand_vec_3d, PRIME_X, PRIME_Y, PRIME_Z};
use crate::math::{floor_to_i32, interp_hermite, lerp};

pub(crate) fn displacement_2d(seed: i32, x: f64, y: f64) -> (f32, f32) {
    let x0 = floor_to_i32(x);
    let y0 = floor_to_i32(y);

    let xs = interp_hermite((x - x0 as f64) as f32);
    let ys = interp_hermite((y - y0 as f64) as f32);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);

    let row = |yp: i32| {
        let (ax, ay) = rand_vec_2d(hash_2d(seed, x0, yp));
        let (bx, by) = rand_vec_2d(hash_2d(seed, x1, yp));
        (lerp(ax, bx, xs), lerp(ay, by, xs))
    };
    let (lx0, ly0) = row(y0);
    let (lx1, ly1) = row(y1);

    (lerp(lx0, lx1, ys), lerp(ly0, ly1, ys))
}

pub(crate) fn displacement_3d(seed: i32, x: f64, y: f64, z: f64) -> (f32, f32, f32) {
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

    let mix = |a: (f32, f32, f32), b: (f32, f32, f32), t: f32| {
        (lerp(a.0, b.0, t), lerp(a.1, b.1, t), lerp(a.2, b.2, t))
    };
    let edge = |yp: i32, zp: i32| {
        mix(rand_vec_3d(hash_3d(seed, x0, yp, zp)), rand_vec_3d(hash_3d(seed, x1, yp, zp)), xs)
    };
    let face0 = mix(edge(y0, z0), edge(y1, z0), ys);
    let face1 = mix(edge(y0, z1), edge(y1, z1), ys);

    mix(face0, face1, zs)
}

//! OpenSimplex2S: the OpenSimplex2 lattices with wider kernels, so each
//! sample gathers more vertices and the result is smoother.
use super::simplex::{corner_2d, two_lattice_sum, G2};
use crate::hash::{PRIME_X, PRIME_X2, PRIME_Y, PRIME_Y2};
use crate::math::floor_to_i32;

const RADIUS_SQ_2D: f32 = 2.0 / 3.0;
const RADIUS_SQ_3D: f32 = 0.75;

/// Seed offset for the half-offset 3D lattice.
const SECOND_LATTICE_SEED: i32 = 1_293_373;

const SCALE_2D: f32 = 18.241_961_944_860_65;
const SCALE_3D: f32 = 9.046_026_385_208_288;

pub fn sample_2d(seed: i32, x: f64, y: f64) -> f32 {
    if x.is_nan() || y.is_nan() {
        return f32::NAN;
    }
    let i = floor_to_i32(x);
    let j = floor_to_i32(y);
    let xi = (x - i as f64) as f32;
    let yi = (y - j as f64) as f32;

    let i = i.wrapping_mul(PRIME_X);
    let j = j.wrapping_mul(PRIME_Y);
    let i1 = i.wrapping_add(PRIME_X);
    let j1 = j.wrapping_add(PRIME_Y);

    let t = (xi + yi) * G2;
    let x0 = xi - t;
    let y0 = yi - t;
    let r2 = RADIUS_SQ_2D;

    // Both diagonal corners of the skewed cell always contribute.
    let mut value = corner_2d(seed, i, j, x0, y0, r2);
    value += corner_2d(seed, i1, j1, x0 - (1.0 - 2.0 * G2), y0 - (1.0 - 2.0 * G2), r2);

    // Two more from the neighbourhood of whichever triangle holds the sample.
    let xmyi = xi - yi;
    if t > G2 {
        value += if xi + xmyi > 1.0 {
            corner_2d(seed, i.wrapping_add(PRIME_X2), j1, x0 + (3.0 * G2 - 2.0), y0 + (3.0 * G2 - 1.0), r2)
        } else {
            corner_2d(seed, i, j1, x0 + G2, y0 + (G2 - 1.0), r2)
        };
        value += if yi - xmyi > 1.0 {
            corner_2d(seed, i1, j.wrapping_add(PRIME_Y2), x0 + (3.0 * G2 - 1.0), y0 + (3.0 * G2 - 2.0), r2)
        } else {
            corner_2d(seed, i1, j, x0 + (G2 - 1.0), y0 + G2, r2)
        };
    } else {
        value += if xi + xmyi < 0.0 {
            corner_2d(seed, i.wrapping_sub(PRIME_X), j, x0 + (1.0 - G2), y0 - G2, r2)
        } else {
            corner_2d(seed, i1, j, x0 + (G2 - 1.0), y0 + G2, r2)
        };
        value += if yi < xmyi {
            corner_2d(seed, i, j.wrapping_sub(PRIME_Y), x0 - G2, y0 - (G2 - 1.0), r2)
        } else {
            corner_2d(seed, i, j1, x0 + G2, y0 + (G2 - 1.0), r2)
        };
    }

    value * SCALE_2D
}

pub fn sample_3d(seed: i32, x: f64, y: f64, z: f64) -> f32 {
    if x.is_nan() || y.is_nan() || z.is_nan() {
        return f32::NAN;
    }
    let seed2 = seed.wrapping_add(SECOND_LATTICE_SEED);
    two_lattice_sum(seed, seed2, x, y, z, RADIUS_SQ_3D) * SCALE_3D
}

//! Simplex-lattice displacement fields.
//!
//! The full variant blends, per vertex, the gradient dot product projected on
//! a random direction; the reduced variant blends the random directions alone.
//! Results are unscaled; the caller applies the per-type normalization and
//! the warp amplitude.
use crate::algorithms::simplex::{visit_triangle_2d, visit_two_lattices_3d, RADIUS_SQ_3D};
use crate::hash::{grad_coord_dual_2d, grad_coord_dual_3d, hash_2d, hash_3d, rand_vec_2d, rand_vec_3d};

/// Seed offset for the half-offset 3D lattice.
const SECOND_LATTICE_SEED: i32 = 1_293_373;

pub(crate) fn displacement_2d(seed: i32, x: f64, y: f64, reduced: bool) -> (f32, f32) {
    let (mut vx, mut vy) = (0.0f32, 0.0f32);
    visit_triangle_2d(x, y, |v| {
        let (xo, yo) = if reduced {
            rand_vec_2d(hash_2d(seed, v.x_primed, v.y_primed))
        } else {
            grad_coord_dual_2d(seed, v.x_primed, v.y_primed, v.dx, v.dy)
        };
        vx += v.falloff * xo;
        vy += v.falloff * yo;
    });
    (vx, vy)
}

pub(crate) fn displacement_3d(seed: i32, x: f64, y: f64, z: f64, reduced: bool) -> (f32, f32, f32) {
    let (mut vx, mut vy, mut vz) = (0.0f32, 0.0f32, 0.0f32);
    let seed2 = seed.wrapping_add(SECOND_LATTICE_SEED);
    visit_two_lattices_3d(seed, seed2, x, y, z, RADIUS_SQ_3D, |v| {
        let (xo, yo, zo) = if reduced {
            rand_vec_3d(hash_3d(v.seed, v.x_primed, v.y_primed, v.z_primed))
        } else {
            grad_coord_dual_3d(v.seed, v.x_primed, v.y_primed, v.z_primed, v.dx, v.dy, v.dz)
        };
        vx += v.falloff * xo;
        vy += v.falloff * yo;
        vz += v.falloff * zo;
    });
    (vx, vy, vz)
}

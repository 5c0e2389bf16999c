//! OpenSimplex2.
//!
//! 2D input arrives already skewed onto the simplex lattice; 3D input arrives
//! already rotated so that the two interleaved cubic lattices form a
//! body-centred grid. Each contributing vertex adds `(r² − d²)⁴ · (g · d)`.
//!
//! Vertex enumeration is shared with the simplex domain warp through the
//! `visit_*` functions, which hand every vertex inside the kernel radius to a
//! callback together with its falloff weight.
use crate::hash::{grad_coord_2d, grad_coord_3d, PRIME_X, PRIME_Y, PRIME_Z};
use crate::math::{floor_to_i32, kernel};

/// `(3 − √3) / 6`, the unskew factor.
pub(crate) const G2: f32 = 0.211_324_865_405_187_13;

pub(crate) const RADIUS_SQ_2D: f32 = 0.5;
pub(crate) const RADIUS_SQ_3D: f32 = 0.6;

const SCALE_2D: f32 = 99.836_854_463_036_47;
const SCALE_3D: f32 = 32.694_282_531_738_28;

/// A lattice vertex inside the kernel radius of the sample.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Vertex2 {
    pub x_primed: i32,
    pub y_primed: i32,
    /// Offset from the vertex to the sample.
    pub dx: f32,
    pub dy: f32,
    /// `(r² − d²)⁴`
    pub falloff: f32,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Vertex3 {
    pub seed: i32,
    pub x_primed: i32,
    pub y_primed: i32,
    pub z_primed: i32,
    pub dx: f32,
    pub dy: f32,
    pub dz: f32,
    pub falloff: f32,
}

#[inline]
fn offer_2d(x_primed: i32, y_primed: i32, dx: f32, dy: f32, radius_sq: f32, visit: &mut impl FnMut(Vertex2)) {
    let a = radius_sq - dx * dx - dy * dy;
    if a > 0.0 {
        visit(Vertex2 { x_primed, y_primed, dx, dy, falloff: kernel(a) });
    }
}

/// Kernel contribution of one 2D vertex at offset `(dx, dy)` from the sample.
#[inline]
pub(crate) fn corner_2d(seed: i32, x_primed: i32, y_primed: i32, dx: f32, dy: f32, radius_sq: f32) -> f32 {
    let a = radius_sq - dx * dx - dy * dy;
    if a > 0.0 {
        kernel(a) * grad_coord_2d(seed, x_primed, y_primed, dx, dy)
    } else {
        0.0
    }
}

/// The three vertices of the skewed triangle holding `(x, y)`.
pub(crate) fn visit_triangle_2d(x: f64, y: f64, mut visit: impl FnMut(Vertex2)) {
    let i = floor_to_i32(x);
    let j = floor_to_i32(y);
    let xi = (x - i as f64) as f32;
    let yi = (y - j as f64) as f32;

    let t = (xi + yi) * G2;
    let x0 = xi - t;
    let y0 = yi - t;

    let i = i.wrapping_mul(PRIME_X);
    let j = j.wrapping_mul(PRIME_Y);
    let r2 = RADIUS_SQ_2D;

    offer_2d(i, j, x0, y0, r2, &mut visit);

    // Middle vertex depends on which half of the skewed cell we are in.
    if y0 > x0 {
        offer_2d(i, j.wrapping_add(PRIME_Y), x0 + G2, y0 + (G2 - 1.0), r2, &mut visit);
    } else {
        offer_2d(i.wrapping_add(PRIME_X), j, x0 + (G2 - 1.0), y0 + G2, r2, &mut visit);
    }

    offer_2d(
        i.wrapping_add(PRIME_X),
        j.wrapping_add(PRIME_Y),
        x0 + (2.0 * G2 - 1.0),
        y0 + (2.0 * G2 - 1.0),
        r2,
        &mut visit,
    );
}

/// Every vertex of the integer lattice (hashed with `seed_a`) and of the
/// lattice offset by one half on each axis (hashed with `seed_b`) that lies
/// inside the kernel radius.
///
/// Only the corners of the two enclosing cubes are candidates: any other
/// vertex is at least 1 away on some axis, beyond the radius.
pub(crate) fn visit_two_lattices_3d(
    seed_a: i32,
    seed_b: i32,
    x: f64,
    y: f64,
    z: f64,
    radius_sq: f32,
    mut visit: impl FnMut(Vertex3),
) {
    visit_cube_3d(seed_a, x, y, z, radius_sq, &mut visit);
    visit_cube_3d(seed_b, x - 0.5, y - 0.5, z - 0.5, radius_sq, &mut visit);
}

fn visit_cube_3d(seed: i32, x: f64, y: f64, z: f64, radius_sq: f32, visit: &mut impl FnMut(Vertex3)) {
    let i = floor_to_i32(x);
    let j = floor_to_i32(y);
    let k = floor_to_i32(z);
    let xd = (x - i as f64) as f32;
    let yd = (y - j as f64) as f32;
    let zd = (z - k as f64) as f32;

    let i = i.wrapping_mul(PRIME_X);
    let j = j.wrapping_mul(PRIME_Y);
    let k = k.wrapping_mul(PRIME_Z);

    let xs = [(xd, i), (xd - 1.0, i.wrapping_add(PRIME_X))];
    let ys = [(yd, j), (yd - 1.0, j.wrapping_add(PRIME_Y))];
    let zs = [(zd, k), (zd - 1.0, k.wrapping_add(PRIME_Z))];

    for &(dx, x_primed) in &xs {
        for &(dy, y_primed) in &ys {
            for &(dz, z_primed) in &zs {
                let a = radius_sq - dx * dx - dy * dy - dz * dz;
                if a > 0.0 {
                    visit(Vertex3 { seed, x_primed, y_primed, z_primed, dx, dy, dz, falloff: kernel(a) });
                }
            }
        }
    }
}

/// Gradient kernel sum over both 3D lattices.
pub(crate) fn two_lattice_sum(seed_a: i32, seed_b: i32, x: f64, y: f64, z: f64, radius_sq: f32) -> f32 {
    let mut value = 0.0;
    visit_two_lattices_3d(seed_a, seed_b, x, y, z, radius_sq, |v| {
        value += v.falloff * grad_coord_3d(v.seed, v.x_primed, v.y_primed, v.z_primed, v.dx, v.dy, v.dz);
    });
    value
}

pub fn sample_2d(seed: i32, x: f64, y: f64) -> f32 {
    // A NaN offset fails every radius check, which would read as 0.
    if x.is_nan() || y.is_nan() {
        return f32::NAN;
    }
    let mut value = 0.0;
    visit_triangle_2d(x, y, |v| {
        value += v.falloff * grad_coord_2d(seed, v.x_primed, v.y_primed, v.dx, v.dy);
    });
    value * SCALE_2D
}

pub fn sample_3d(seed: i32, x: f64, y: f64, z: f64) -> f32 {
    if x.is_nan() || y.is_nan() || z.is_nan() {
        return f32::NAN;
    }
    two_lattice_sum(seed, !seed, x, y, z, RADIUS_SQ_3D) * SCALE_3D
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanishes_on_lattice_vertices() {
        // The gradient term is zero at the vertex itself and every other
        // vertex is outside the radius.
        assert_eq!(sample_2d(1337, 0.0, 0.0), 0.0);
        assert_eq!(sample_2d(1337, 4.0, -3.0), 0.0);
    }

    #[test]
    fn triangle_visits_at_most_three_vertices() {
        for i in 0..100 {
            let mut n = 0;
            visit_triangle_2d(i as f64 * 0.137, i as f64 * -0.291, |_| n += 1);
            assert!((1..=3).contains(&n));
        }
    }

    #[test]
    fn varies_between_vertices() {
        let v: Vec<f32> = (0..32).map(|i| sample_2d(7, i as f64 * 0.173, 0.4)).collect();
        assert!(v.iter().any(|n| n.abs() > 0.05), "2D output is flat: {v:?}");
        let v: Vec<f32> = (0..32).map(|i| sample_3d(7, i as f64 * 0.173, 0.4, -1.1)).collect();
        assert!(v.iter().any(|n| n.abs() > 0.05), "3D output is flat: {v:?}");
    }

    #[test]
    fn nan_coordinate_gives_nan() {
        assert!(sample_2d(1337, f64::NAN, 1.0).is_nan());
        assert!(sample_2d(1337, 1.0, f64::NAN).is_nan());
        assert!(sample_3d(1337, 0.0, f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn second_lattice_uses_its_own_seed() {
        let a = two_lattice_sum(1, 2, 0.3, 0.6, 0.1, RADIUS_SQ_3D);
        let b = two_lattice_sum(1, 3, 0.3, 0.6, 0.1, RADIUS_SQ_3D);
        assert_ne!(a, b);
    }
}

//! Coordinate transforms applied once per evaluation, before frequency scaling.
//!
//! 2D simplex-family sampling skews the plane onto the simplex lattice. 3D
//! sampling applies the configured rotation, or the default OpenSimplex2
//! lattice rotation when no rotation is configured and the algorithm is
//! simplex-family.
use crate::config::RotationType3D;

/// `(√3 − 1) / 2`
const SKEW_2D: f64 = 0.366_025_403_784_438_6;
/// `1 / √3`
const R3: f64 = 0.577_350_269_189_626;
/// `−(3 − √3) / 6`
const XY_PLANE_SHEAR: f64 = -0.211_324_865_405_187;

/// Apply a public rotation type. `None` is the identity.
pub fn rotate_3d(rotation: RotationType3D, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    match rotation {
        RotationType3D::None => (x, y, z),
        RotationType3D::ImproveXYPlanes => improve_xy_planes(x, y, z),
        RotationType3D::ImproveXZPlanes => improve_xz_planes(x, y, z),
    }
}

/// Rotation that puts the lattice's main diagonal on the Z axis, so constant-Z
/// slices look isotropic.
fn improve_xy_planes(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let xy = x + y;
    let s2 = xy * XY_PLANE_SHEAR;
    let zr = z * R3;
    (x + s2 - zr, y + s2 - zr, zr + xy * R3)
}

fn improve_xz_planes(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let xz = x + z;
    let s2 = xz * XY_PLANE_SHEAR;
    let yr = y * R3;
    (x + s2 - yr, yr + xz * R3, z + s2 - yr)
}

/// Transform actually applied to a 3D sample, resolved from the configured
/// rotation and whether the algorithm samples the simplex lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transform3D {
    None,
    ImproveXYPlanes,
    ImproveXZPlanes,
    DefaultOpenSimplex2,
}

impl Transform3D {
    pub(crate) fn resolve(rotation: RotationType3D, simplex_lattice: bool) -> Self {
        match (rotation, simplex_lattice) {
            (RotationType3D::ImproveXYPlanes, _) => Transform3D::ImproveXYPlanes,
            (RotationType3D::ImproveXZPlanes, _) => Transform3D::ImproveXZPlanes,
            (RotationType3D::None, true)         => Transform3D::DefaultOpenSimplex2,
            (RotationType3D::None, false)        => Transform3D::None,
        }
    }

    pub(crate) fn apply(self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        match self {
            Transform3D::None                => (x, y, z),
            Transform3D::ImproveXYPlanes     => improve_xy_planes(x, y, z),
            Transform3D::ImproveXZPlanes     => improve_xz_planes(x, y, z),
            Transform3D::DefaultOpenSimplex2 => {
                let r = (x + y + z) * (2.0 / 3.0);
                (r - x, r - y, r - z)
            }
        }
    }
}

/// Skew the plane onto the 2D simplex lattice.
pub(crate) fn skew_2d(x: f64, y: f64) -> (f64, f64) {
    let t = (x + y) * SKEW_2D;
    (x + t, y + t)
}

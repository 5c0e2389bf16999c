//! Cellular (Worley) noise.
//!
//! One feature point per lattice cell, displaced from the cell's integer
//! corner by a random unit vector scaled by the jitter. The 3×3 (3×3×3)
//! neighbourhood of the nearest lattice point is searched for the two
//! closest feature points.
use crate::config::{CellularDistanceFunction, CellularReturnType, CellularSettings};
use crate::hash::{hash_2d, hash_3d, rand_vec_2d, rand_vec_3d, I32_TO_UNIT, PRIME_X, PRIME_Y, PRIME_Z};
use crate::math::round_to_i32;

/// Largest displacement keeping every feature point inside the searched
/// neighbourhood.
const JITTER_SCALE_2D: f32 = 0.437_015_95;
const JITTER_SCALE_3D: f32 = 0.396_143_53;

/// Running record of the closest and second-closest feature points.
struct FeatureSearch {
    nearest: f32,
    second: f32,
    nearest_hash: i32,
}

impl FeatureSearch {
    fn new() -> Self {
        Self { nearest: f32::MAX, second: f32::MAX, nearest_hash: 0 }
    }

    /// Equal distances resolve to the smaller hash, so the winner does not
    /// depend on visiting order.
    fn offer(&mut self, distance: f32, hash: i32) {
        if distance < self.nearest || (distance == self.nearest && hash < self.nearest_hash) {
            self.second = self.nearest;
            self.nearest = distance;
            self.nearest_hash = hash;
        } else if distance < self.second {
            self.second = distance;
        }
    }

    fn finish(self, settings: &CellularSettings) -> f32 {
        let (mut d0, mut d1) = (self.nearest, self.second);
        if settings.distance_function == CellularDistanceFunction::Euclidean {
            d0 = d0.sqrt();
            d1 = d1.sqrt();
        }

        let value = match settings.return_type {
            CellularReturnType::CellValue    => self.nearest_hash as f32 * I32_TO_UNIT,
            CellularReturnType::Distance     => d0 - 1.0,
            CellularReturnType::Distance2    => d1 - 1.0,
            CellularReturnType::Distance2Add => (d1 + d0) * 0.5 - 1.0,
            CellularReturnType::Distance2Sub => d1 - d0 - 1.0,
            CellularReturnType::Distance2Mul => d1 * d0 * 0.5 - 1.0,
            // Both points coincide with the sample when d1 is 0.
            CellularReturnType::Distance2Div => if d1 > 0.0 { d0 / d1 - 1.0 } else { 0.0 },
        };
        value.clamp(-1.0, 1.0)
    }
}

fn distance_2d(function: CellularDistanceFunction, dx: f32, dy: f32) -> f32 {
    match function {
        CellularDistanceFunction::Euclidean | CellularDistanceFunction::EuclideanSq => dx * dx + dy * dy,
        CellularDistanceFunction::Manhattan => dx.abs() + dy.abs(),
        CellularDistanceFunction::Hybrid    => (dx.abs() + dy.abs()) + (dx * dx + dy * dy),
    }
}

fn distance_3d(function: CellularDistanceFunction, dx: f32, dy: f32, dz: f32) -> f32 {
    match function {
        CellularDistanceFunction::Euclidean | CellularDistanceFunction::EuclideanSq => {
            dx * dx + dy * dy + dz * dz
        }
        CellularDistanceFunction::Manhattan => dx.abs() + dy.abs() + dz.abs(),
        CellularDistanceFunction::Hybrid => {
            (dx.abs() + dy.abs() + dz.abs()) + (dx * dx + dy * dy + dz * dz)
        }
    }
}

pub fn sample_2d(settings: &CellularSettings, seed: i32, x: f64, y: f64) -> f32 {
    if !(x.is_finite() && y.is_finite()) {
        return f32::NAN;
    }
    let xr = round_to_i32(x);
    let yr = round_to_i32(y);
    let jitter = settings.effective_jitter() * JITTER_SCALE_2D;

    let mut search = FeatureSearch::new();
    for dx in -1..=1 {
        let cx = xr.wrapping_add(dx);
        let x_primed = cx.wrapping_mul(PRIME_X);
        let ox = (xr as f64 + dx as f64 - x) as f32;
        for dy in -1..=1 {
            let cy = yr.wrapping_add(dy);
            let y_primed = cy.wrapping_mul(PRIME_Y);
            let oy = (yr as f64 + dy as f64 - y) as f32;

            let hash = hash_2d(seed, x_primed, y_primed);
            let (rx, ry) = rand_vec_2d(hash);
            let d = distance_2d(settings.distance_function, ox + rx * jitter, oy + ry * jitter);
            search.offer(d, hash);
        }
    }
    search.finish(settings)
}

pub fn sample_3d(settings: &CellularSettings, seed: i32, x: f64, y: f64, z: f64) -> f32 {
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return f32::NAN;
    }
    let xr = round_to_i32(x);
    let yr = round_to_i32(y);
    let zr = round_to_i32(z);
    let jitter = settings.effective_jitter() * JITTER_SCALE_3D;

    let mut search = FeatureSearch::new();
    for dx in -1..=1 {
        let x_primed = xr.wrapping_add(dx).wrapping_mul(PRIME_X);
        let ox = (xr as f64 + dx as f64 - x) as f32;
        for dy in -1..=1 {
            let y_primed = yr.wrapping_add(dy).wrapping_mul(PRIME_Y);
            let oy = (yr as f64 + dy as f64 - y) as f32;
            for dz in -1..=1 {
                let z_primed = zr.wrapping_add(dz).wrapping_mul(PRIME_Z);
                let oz = (zr as f64 + dz as f64 - z) as f32;

                let hash = hash_3d(seed, x_primed, y_primed, z_primed);
                let (rx, ry, rz) = rand_vec_3d(hash);
                let d = distance_3d(
                    settings.distance_function,
                    ox + rx * jitter,
                    oy + ry * jitter,
                    oz + rz * jitter,
                );
                search.offer(d, hash);
            }
        }
    }
    search.finish(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(distance_function: CellularDistanceFunction, return_type: CellularReturnType) -> CellularSettings {
        CellularSettings { distance_function, return_type, jitter: 1.0 }
    }

    #[test]
    fn tie_break_prefers_smaller_hash() {
        let mut a = FeatureSearch::new();
        a.offer(0.5, 10);
        a.offer(0.5, -3);
        let mut b = FeatureSearch::new();
        b.offer(0.5, -3);
        b.offer(0.5, 10);
        assert_eq!(a.nearest_hash, -3);
        assert_eq!(b.nearest_hash, -3);
        assert_eq!(a.second, 0.5);
        assert_eq!(b.second, 0.5);
    }

    #[test]
    fn regular_grid_distance_at_cell_centre() {
        // With zero jitter the feature points sit on the integer lattice.
        let mut s = settings(CellularDistanceFunction::Euclidean, CellularReturnType::Distance);
        s.jitter = 0.0;
        let v = sample_2d(&s, 1, 2.5, 7.0);
        assert!((v - (0.5 - 1.0)).abs() < 1e-6, "got {v}");

        s.return_type = CellularReturnType::Distance2Sub;
        // Equidistant between (2, 7) and (3, 7).
        assert!((sample_2d(&s, 1, 2.5, 7.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_points_do_not_divide_by_zero() {
        let mut s = settings(CellularDistanceFunction::EuclideanSq, CellularReturnType::Distance2Div);
        s.jitter = 0.0;
        let v = sample_2d(&s, 1, 3.0, 4.0);
        assert!(v.is_finite() && (-1.0..=1.0).contains(&v), "got {v}");
    }

    #[test]
    fn every_return_type_is_clamped() {
        for f in CellularDistanceFunction::ALL {
            for r in CellularReturnType::ALL {
                let s = settings(*f, *r);
                for i in 0..200 {
                    let t = i as f64 * 0.137;
                    let v2 = sample_2d(&s, 11, t, -0.7 * t);
                    let v3 = sample_3d(&s, 11, t, -0.7 * t, 0.3 * t);
                    assert!((-1.0..=1.0).contains(&v2), "{f} {r}: 2D {v2}");
                    assert!((-1.0..=1.0).contains(&v3), "{f} {r}: 3D {v3}");
                }
            }
        }
    }

    #[test]
    fn out_of_range_jitter_is_clamped() {
        let mut wild = settings(CellularDistanceFunction::EuclideanSq, CellularReturnType::Distance);
        wild.jitter = 50.0;
        let tame = settings(CellularDistanceFunction::EuclideanSq, CellularReturnType::Distance);
        assert_eq!(sample_2d(&wild, 3, 1.3, 2.7), sample_2d(&tame, 3, 1.3, 2.7));
    }

    #[test]
    fn non_finite_input_yields_nan() {
        let s = CellularSettings::default();
        assert!(sample_2d(&s, 0, f64::NAN, 1.0).is_nan());
        assert!(sample_3d(&s, 0, 1.0, f64::INFINITY, 0.0).is_nan());
    }
}

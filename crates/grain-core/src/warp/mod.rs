//! Domain warp: displace a coordinate by a noise-derived vector field.
//!
//! The warp reads only the `warp` sub-configuration plus the shared 3D
//! rotation setting. The sample position is transformed (skew or rotation)
//! before frequency scaling, while the displacement is applied to the
//! untransformed coordinate.
pub mod basic_grid;
pub mod simplex;

use crate::config::{DomainWarpFractalType, DomainWarpType, NoiseConfig, WarpConfig};
use crate::coords::{Vector2, Vector3};
use crate::rotation::{skew_2d, Transform3D};

const SIMPLEX_SCALE_2D: f32 = 38.283_687_591_552_734;
const SIMPLEX_SCALE_3D: f32 = 32.694_282_531_738_28;
const REDUCED_SCALE_2D: f32 = 16.0;
const REDUCED_SCALE_3D: f32 = 7.716_049_382_716_05;

fn uses_simplex_lattice(warp_type: DomainWarpType) -> bool {
    !matches!(warp_type, DomainWarpType::BasicGrid)
}

fn sample_position_2d(warp_type: DomainWarpType, x: f64, y: f64) -> (f64, f64) {
    if uses_simplex_lattice(warp_type) {
        skew_2d(x, y)
    } else {
        (x, y)
    }
}

/// Normalized displacement at an already frequency-scaled position.
fn displacement_2d(warp_type: DomainWarpType, seed: i32, x: f64, y: f64) -> (f32, f32) {
    let (scale, (dx, dy)) = match warp_type {
        DomainWarpType::OpenSimplex2        => (SIMPLEX_SCALE_2D, simplex::displacement_2d(seed, x, y, false)),
        DomainWarpType::OpenSimplex2Reduced => (REDUCED_SCALE_2D, simplex::displacement_2d(seed, x, y, true)),
        DomainWarpType::BasicGrid           => (1.0, basic_grid::displacement_2d(seed, x, y)),
    };
    (dx * scale, dy * scale)
}

fn displacement_3d(warp_type: DomainWarpType, seed: i32, x: f64, y: f64, z: f64) -> (f32, f32, f32) {
    let (scale, (dx, dy, dz)) = match warp_type {
        DomainWarpType::OpenSimplex2        => (SIMPLEX_SCALE_3D, simplex::displacement_3d(seed, x, y, z, false)),
        DomainWarpType::OpenSimplex2Reduced => (REDUCED_SCALE_3D, simplex::displacement_3d(seed, x, y, z, true)),
        DomainWarpType::BasicGrid           => (1.0, basic_grid::displacement_3d(seed, x, y, z)),
    };
    (dx * scale, dy * scale, dz * scale)
}

/// Per-octave seed, frequency and amplitude, in evaluation order.
fn octaves(warp: &WarpConfig) -> impl Iterator<Item = (i32, f64, f32)> {
    let fractal = warp.fractal;
    let count = match fractal.fractal_type {
        DomainWarpFractalType::None => 1,
        _ => fractal.effective_octaves(),
    };
    let mut seed = warp.seed;
    let mut frequency = warp.frequency;
    let mut amp = warp.amplitude * fractal.bounding();
    (0..count).map(move |_| {
        let octave = (seed, frequency, amp);
        seed = seed.wrapping_add(1);
        frequency *= fractal.lacunarity;
        amp *= fractal.gain;
        octave
    })
}

/// Warp a 2D coordinate in place.
pub fn warp_2d(config: &NoiseConfig, coord: &mut Vector2) {
    let warp = &config.warp;
    let progressive = warp.fractal.fractal_type == DomainWarpFractalType::DomainWarpProgressive;
    let (ox, oy) = sample_position_2d(warp.warp_type, coord.x, coord.y);

    for (seed, frequency, amp) in octaves(warp) {
        // Progressive octaves sample the coordinate warped so far.
        let (sx, sy) = if progressive {
            sample_position_2d(warp.warp_type, coord.x, coord.y)
        } else {
            (ox, oy)
        };
        let (dx, dy) = displacement_2d(warp.warp_type, seed, sx * frequency, sy * frequency);
        coord.x += (dx * amp) as f64;
        coord.y += (dy * amp) as f64;
    }
}

/// Warp a 3D coordinate in place.
pub fn warp_3d(config: &NoiseConfig, coord: &mut Vector3) {
    let warp = &config.warp;
    let progressive = warp.fractal.fractal_type == DomainWarpFractalType::DomainWarpProgressive;
    let transform = Transform3D::resolve(config.rotation_type_3d, uses_simplex_lattice(warp.warp_type));
    let (ox, oy, oz) = transform.apply(coord.x, coord.y, coord.z);

    for (seed, frequency, amp) in octaves(warp) {
        let (sx, sy, sz) = if progressive {
            transform.apply(coord.x, coord.y, coord.z)
        } else {
            (ox, oy, oz)
        };
        let (dx, dy, dz) =
            displacement_3d(warp.warp_type, seed, sx * frequency, sy * frequency, sz * frequency);
        coord.x += (dx * amp) as f64;
        coord.y += (dy * amp) as f64;
        coord.z += (dz * amp) as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(warp_type: DomainWarpType, fractal_type: DomainWarpFractalType) -> NoiseConfig {
        let mut cfg = NoiseConfig::default();
        cfg.warp.warp_type = warp_type;
        cfg.warp.fractal.fractal_type = fractal_type;
        cfg.warp.amplitude = 30.0;
        cfg
    }

    #[test]
    fn octave_schedule_follows_gain_and_lacunarity() {
        let cfg = config(DomainWarpType::BasicGrid, DomainWarpFractalType::DomainWarpIndependent);
        let sched: Vec<_> = octaves(&cfg.warp).collect();
        assert_eq!(sched.len(), 3);
        assert_eq!(sched[1].0, 1338);
        assert_eq!(sched[2].1, 0.04);
        let b = cfg.warp.fractal.bounding();
        assert!((sched[0].2 - 30.0 * b).abs() < 1e-5);
        assert!((sched[2].2 - 30.0 * b * 0.25).abs() < 1e-5);
    }

    #[test]
    fn single_pass_ignores_octave_count() {
        let mut cfg = config(DomainWarpType::OpenSimplex2, DomainWarpFractalType::None);
        cfg.warp.fractal.octaves = 6;
        assert_eq!(octaves(&cfg.warp).count(), 1);
    }

    #[test]
    fn zero_octaves_still_run_once() {
        let mut cfg = config(DomainWarpType::OpenSimplex2, DomainWarpFractalType::DomainWarpProgressive);
        cfg.warp.fractal.octaves = 0;
        assert_eq!(octaves(&cfg.warp).count(), 1);
    }

    #[test]
    fn progressive_and_independent_agree_for_one_octave() {
        let mut p = config(DomainWarpType::OpenSimplex2, DomainWarpFractalType::DomainWarpProgressive);
        p.warp.fractal.octaves = 1;
        let mut i = p;
        i.warp.fractal.fractal_type = DomainWarpFractalType::DomainWarpIndependent;

        let mut a = Vector3::new(12.5, -40.0, 7.25);
        let mut b = a;
        warp_3d(&p, &mut a);
        warp_3d(&i, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn progressive_differs_from_independent_with_more_octaves() {
        let p = config(DomainWarpType::OpenSimplex2Reduced, DomainWarpFractalType::DomainWarpProgressive);
        let mut i = p;
        i.warp.fractal.fractal_type = DomainWarpFractalType::DomainWarpIndependent;

        let mut a = Vector2::new(123.4, 56.7);
        let mut b = a;
        warp_2d(&p, &mut a);
        warp_2d(&i, &mut b);
        assert_ne!(a, b);
    }
}

//! Base noise algorithms.
//!
//! Every algorithm is a pure function of `(seed, coordinate)` returning a value
//! in roughly `[-1, 1]`. Coordinates arrive already frequency-scaled and
//! transformed; algorithms never rescale internally.
pub mod cellular;
pub mod perlin;
pub mod simplex;
pub mod simplex_smooth;
pub mod value;
pub mod value_cubic;

use crate::config::{CellularSettings, NoiseType};

/// Whether the algorithm samples the simplex lattice and therefore expects
/// skewed (2D) or lattice-rotated (3D) input.
pub fn uses_simplex_lattice(noise_type: NoiseType) -> bool {
    matches!(noise_type, NoiseType::OpenSimplex2 | NoiseType::OpenSimplex2S)
}

pub fn sample_2d(noise_type: NoiseType, cellular: &CellularSettings, seed: i32, x: f64, y: f64) -> f32 {
    match noise_type {
        NoiseType::OpenSimplex2  => simplex::sample_2d(seed, x, y),
        NoiseType::OpenSimplex2S => simplex_smooth::sample_2d(seed, x, y),
        NoiseType::Cellular      => cellular::sample_2d(cellular, seed, x, y),
        NoiseType::Perlin        => perlin::sample_2d(seed, x, y),
        NoiseType::ValueCubic    => value_cubic::sample_2d(seed, x, y),
        NoiseType::Value         => value::sample_2d(seed, x, y),
    }
}

pub fn sample_3d(
    noise_type: NoiseType,
    cellular: &CellularSettings,
    seed: i32,
    x: f64,
    y: f64,
    z: f64,
) -> f32 {
    match noise_type {
        NoiseType::OpenSimplex2  => simplex::sample_3d(seed, x, y, z),
        NoiseType::OpenSimplex2S => simplex_smooth::sample_3d(seed, x, y, z),
        NoiseType::Cellular      => cellular::sample_3d(cellular, seed, x, y, z),
        NoiseType::Perlin        => perlin::sample_3d(seed, x, y, z),
        NoiseType::ValueCubic    => value_cubic::sample_3d(seed, x, y, z),
        NoiseType::Value         => value::sample_3d(seed, x, y, z),
    }
}

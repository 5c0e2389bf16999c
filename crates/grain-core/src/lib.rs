//! Deterministic procedural noise.
//!
//! Six base algorithms (OpenSimplex2, OpenSimplex2S, Cellular, Perlin,
//! ValueCubic, Value) in 2D and 3D, a fractal layer that stacks octaves of
//! them, and a domain warp that displaces coordinates with the same machinery.
//! Identical seed, configuration and coordinate always give bit-identical
//! output.
//!
//! ```
//! use grain_core::{FractalType, NoiseGenerator, Vector2};
//!
//! let mut noise = NoiseGenerator::new(1337);
//! noise.set_fractal_type(FractalType::FBm);
//! let n = noise.get_noise_2d(12.0, 34.0);
//! assert!((-1.0..=1.0).contains(&n));
//!
//! let mut p = Vector2::new(12.0, 34.0);
//! noise.domain_warp_2d(&mut p);
//! ```
pub mod algorithms;
pub mod config;
pub mod coords;
pub mod error;
pub mod fractal;
pub mod generator;
pub mod hash;
pub mod math;
pub mod rotation;
pub mod tables;
pub mod warp;

pub use config::{
    CellularDistanceFunction, CellularReturnType, CellularSettings, DomainWarpFractalType,
    DomainWarpType, FractalSettings, FractalType, NoiseConfig, NoiseType, RotationType3D,
    WarpConfig, WarpFractalSettings,
};
pub use coords::{Vector2, Vector3};
pub use error::ConfigError;
pub use generator::NoiseGenerator;

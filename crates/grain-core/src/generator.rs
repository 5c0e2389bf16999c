//! The stateful front end: one owned [`NoiseConfig`] plus setters and queries.
//!
//! Setters never fail. Out-of-range values are clamped to the nearest valid
//! value, non-finite values are ignored, and both cases are reported through
//! `log::warn!`. Queries take `&self` and are pure functions of the current
//! configuration and the coordinate.
use crate::config::{
    CellularDistanceFunction, CellularReturnType, DomainWarpFractalType, DomainWarpType,
    FractalType, NoiseConfig, NoiseType, RotationType3D,
};
use crate::coords::{Vector2, Vector3};
use crate::{fractal, warp};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoiseGenerator {
    config: NoiseConfig,
}

/// Store `value` in `slot` unless it is NaN or infinite.
fn set_finite_f64(slot: &mut f64, value: f64, field: &str) {
    if value.is_finite() {
        *slot = value;
    } else {
        log::warn!("ignoring non-finite {field} {value}; keeping {slot}");
    }
}

fn set_finite_f32(slot: &mut f32, value: f32, field: &str) {
    if value.is_finite() {
        *slot = value;
    } else {
        log::warn!("ignoring non-finite {field} {value}; keeping {slot}");
    }
}

/// Store `value` clamped into `[min, max]`; non-finite values keep the
/// previous value.
fn set_clamped_f32(slot: &mut f32, value: f32, min: f32, max: f32, field: &str) {
    if !value.is_finite() {
        log::warn!("ignoring non-finite {field} {value}; keeping {slot}");
        return;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{field} {value} is outside [{min}, {max}]; using {clamped}");
    }
    *slot = clamped;
}

fn clamp_octaves(octaves: i32, field: &str) -> u32 {
    if octaves < 1 {
        log::warn!("{field} {octaves} is below 1; using 1");
        1
    } else {
        octaves as u32
    }
}

impl NoiseGenerator {
    pub fn new(seed: i32) -> Self {
        Self { config: NoiseConfig::with_seed(seed) }
    }

    /// Adopt `config` as is; evaluation tolerates out-of-range fields.
    pub fn from_config(config: NoiseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NoiseConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut NoiseConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: NoiseConfig) {
        log::debug!("replacing noise configuration: {config:?}");
        self.config = config;
    }

    // ── General ──────────────────────────────────────────────────────────────

    pub fn set_seed(&mut self, seed: i32) {
        self.config.seed = seed;
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        set_finite_f64(&mut self.config.frequency, frequency, "frequency");
    }

    pub fn set_noise_type(&mut self, noise_type: NoiseType) {
        self.config.noise_type = noise_type;
    }

    pub fn set_rotation_type_3d(&mut self, rotation_type: RotationType3D) {
        self.config.rotation_type_3d = rotation_type;
    }

    // ── Fractal ──────────────────────────────────────────────────────────────

    pub fn set_fractal_type(&mut self, fractal_type: FractalType) {
        self.config.fractal.fractal_type = fractal_type;
    }

    pub fn set_fractal_octaves(&mut self, octaves: i32) {
        self.config.fractal.octaves = clamp_octaves(octaves, "fractal octaves");
    }

    pub fn set_fractal_lacunarity(&mut self, lacunarity: f64) {
        set_finite_f64(&mut self.config.fractal.lacunarity, lacunarity, "fractal lacunarity");
    }

    pub fn set_fractal_gain(&mut self, gain: f32) {
        set_finite_f32(&mut self.config.fractal.gain, gain, "fractal gain");
    }

    pub fn set_fractal_weighted_strength(&mut self, weighted_strength: f32) {
        set_clamped_f32(
            &mut self.config.fractal.weighted_strength,
            weighted_strength,
            0.0,
            1.0,
            "fractal weighted strength",
        );
    }

    pub fn set_fractal_ping_pong_strength(&mut self, strength: f32) {
        set_clamped_f32(
            &mut self.config.fractal.ping_pong_strength,
            strength,
            0.0,
            f32::MAX,
            "fractal ping pong strength",
        );
    }

    // ── Cellular ─────────────────────────────────────────────────────────────

    pub fn set_cellular_distance_function(&mut self, function: CellularDistanceFunction) {
        self.config.cellular.distance_function = function;
    }

    pub fn set_cellular_return_type(&mut self, return_type: CellularReturnType) {
        self.config.cellular.return_type = return_type;
    }

    pub fn set_cellular_jitter(&mut self, jitter: f32) {
        set_clamped_f32(&mut self.config.cellular.jitter, jitter, 0.0, 1.0, "cellular jitter");
    }

    // ── Domain warp ──────────────────────────────────────────────────────────

    pub fn set_domain_warp_type(&mut self, warp_type: DomainWarpType) {
        self.config.warp.warp_type = warp_type;
    }

    pub fn set_domain_warp_amp(&mut self, amp: f32) {
        set_finite_f32(&mut self.config.warp.amplitude, amp, "domain warp amplitude");
    }

    pub fn set_domain_warp_seed(&mut self, seed: i32) {
        self.config.warp.seed = seed;
    }

    pub fn set_domain_warp_frequency(&mut self, frequency: f64) {
        set_finite_f64(&mut self.config.warp.frequency, frequency, "domain warp frequency");
    }

    pub fn set_domain_warp_fractal_type(&mut self, fractal_type: DomainWarpFractalType) {
        self.config.warp.fractal.fractal_type = fractal_type;
    }

    pub fn set_domain_warp_fractal_octaves(&mut self, octaves: i32) {
        self.config.warp.fractal.octaves = clamp_octaves(octaves, "domain warp fractal octaves");
    }

    pub fn set_domain_warp_fractal_lacunarity(&mut self, lacunarity: f64) {
        set_finite_f64(
            &mut self.config.warp.fractal.lacunarity,
            lacunarity,
            "domain warp fractal lacunarity",
        );
    }

    pub fn set_domain_warp_fractal_gain(&mut self, gain: f32) {
        set_finite_f32(&mut self.config.warp.fractal.gain, gain, "domain warp fractal gain");
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// 2D noise at `(x, y)`, in `[-1, 1]`.
    pub fn get_noise_2d(&self, x: f64, y: f64) -> f32 {
        fractal::sample_2d(&self.config, x, y)
    }

    /// 3D noise at `(x, y, z)`, in `[-1, 1]`.
    pub fn get_noise_3d(&self, x: f64, y: f64, z: f64) -> f32 {
        fractal::sample_3d(&self.config, x, y, z)
    }

    pub fn domain_warp_2d(&self, coord: &mut Vector2) {
        warp::warp_2d(&self.config, coord);
    }

    pub fn domain_warp_3d(&self, coord: &mut Vector3) {
        warp::warp_3d(&self.config, coord);
    }
}

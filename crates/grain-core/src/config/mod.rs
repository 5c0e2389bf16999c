//! Generator configuration.
//!
//! `NoiseConfig` is plain data: every evaluation reads it through a shared
//! reference and nothing on the sampling path mutates it. Evaluation tolerates
//! out-of-range values (octaves are floored at 1, jitter is clamped), while
//! [`NoiseConfig::validate`] reports them for callers that prefer rejection.
pub mod types;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
pub use types::{
    CellularDistanceFunction, CellularReturnType, DomainWarpFractalType, DomainWarpType,
    FractalType, NoiseType, RotationType3D,
};

pub const DEFAULT_SEED: i32 = 1337;
pub const DEFAULT_FREQUENCY: f64 = 0.01;

/// `1 / Σ_{i<octaves} |gain|ⁱ`, the amplitude of the first octave that keeps
/// a full stack inside `[-1, 1]`.
pub fn fractal_bounding(octaves: u32, gain: f32) -> f32 {
    let gain = gain.abs();
    let mut amp = gain;
    let mut amp_fractal = 1.0f32;
    for _ in 1..octaves.max(1) {
        amp_fractal += amp;
        amp *= gain;
    }
    1.0 / amp_fractal
}

/// Octave stacking for scalar noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalSettings {
    pub fractal_type: FractalType,
    pub octaves: u32,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub gain: f32,
    /// 0 = plain stacking, 1 = octaves damped by the previous octave's value.
    pub weighted_strength: f32,
    pub ping_pong_strength: f32,
}

impl Default for FractalSettings {
    fn default() -> Self {
        Self {
            fractal_type: FractalType::None,
            octaves: 3,
            lacunarity: 2.0,
            gain: 0.5,
            weighted_strength: 0.0,
            ping_pong_strength: 2.0,
        }
    }
}

impl FractalSettings {
    pub fn effective_octaves(&self) -> u32 {
        self.octaves.max(1)
    }

    pub fn bounding(&self) -> f32 {
        fractal_bounding(self.effective_octaves(), self.gain)
    }

    /// Weighted strength clamped into `[0, 1]`; NaN counts as 0.
    pub fn effective_weighted_strength(&self) -> f32 {
        if self.weighted_strength.is_nan() {
            0.0
        } else {
            self.weighted_strength.clamp(0.0, 1.0)
        }
    }

    /// Ping-pong strength floored at 0; NaN counts as 0.
    pub fn effective_ping_pong_strength(&self) -> f32 {
        if self.ping_pong_strength.is_nan() {
            0.0
        } else {
            self.ping_pong_strength.max(0.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellularSettings {
    pub distance_function: CellularDistanceFunction,
    pub return_type: CellularReturnType,
    /// Feature point displacement inside its cell, 0 = regular grid.
    pub jitter: f32,
}

impl Default for CellularSettings {
    fn default() -> Self {
        Self {
            distance_function: CellularDistanceFunction::EuclideanSq,
            return_type: CellularReturnType::Distance,
            jitter: 1.0,
        }
    }
}

impl CellularSettings {
    /// Jitter clamped to `[0, 1]` so feature points never leave the
    /// neighbourhood that the search covers. NaN is treated as 0.
    pub fn effective_jitter(&self) -> f32 {
        if self.jitter.is_nan() {
            0.0
        } else {
            self.jitter.clamp(0.0, 1.0)
        }
    }
}

/// Octave stacking for domain warp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarpFractalSettings {
    pub fractal_type: DomainWarpFractalType,
    pub octaves: u32,
    pub lacunarity: f64,
    pub gain: f32,
}

impl Default for WarpFractalSettings {
    fn default() -> Self {
        Self {
            fractal_type: DomainWarpFractalType::None,
            octaves: 3,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl WarpFractalSettings {
    pub fn effective_octaves(&self) -> u32 {
        self.octaves.max(1)
    }

    /// Amplitude scale for the first octave; 1 when no fractal is applied.
    pub fn bounding(&self) -> f32 {
        match self.fractal_type {
            DomainWarpFractalType::None => 1.0,
            _ => fractal_bounding(self.effective_octaves(), self.gain),
        }
    }
}

/// Independent sub-configuration driving domain warp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarpConfig {
    pub warp_type: DomainWarpType,
    pub seed: i32,
    pub frequency: f64,
    /// Maximum displacement scale, in input coordinate units.
    pub amplitude: f32,
    pub fractal: WarpFractalSettings,
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self {
            warp_type: DomainWarpType::OpenSimplex2,
            seed: DEFAULT_SEED,
            frequency: DEFAULT_FREQUENCY,
            amplitude: 1.0,
            fractal: WarpFractalSettings::default(),
        }
    }
}

/// Full parameter record for one generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub seed: i32,
    pub frequency: f64,
    pub noise_type: NoiseType,
    pub rotation_type_3d: RotationType3D,
    pub fractal: FractalSettings,
    pub cellular: CellularSettings,
    pub warp: WarpConfig,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            frequency: DEFAULT_FREQUENCY,
            noise_type: NoiseType::OpenSimplex2,
            rotation_type_3d: RotationType3D::None,
            fractal: FractalSettings::default(),
            cellular: CellularSettings::default(),
            warp: WarpConfig::default(),
        }
    }
}

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value, min, max })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

impl NoiseConfig {
    pub fn with_seed(seed: i32) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Report the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        check_finite("frequency", self.frequency)?;
        if self.fractal.octaves < 1 {
            return Err(ConfigError::InvalidOctaves {
                field: "fractal octaves",
                value: self.fractal.octaves as i64,
            });
        }
        check_finite("fractal lacunarity", self.fractal.lacunarity)?;
        check_finite("fractal gain", self.fractal.gain as f64)?;
        check_finite("fractal weighted strength", self.fractal.weighted_strength as f64)?;
        check_range("fractal weighted strength", self.fractal.weighted_strength, 0.0, 1.0)?;
        check_finite("fractal ping pong strength", self.fractal.ping_pong_strength as f64)?;
        check_range("fractal ping pong strength", self.fractal.ping_pong_strength, 0.0, f32::MAX)?;

        let jitter = self.cellular.jitter;
        if !(0.0..=1.0).contains(&jitter) {
            return Err(ConfigError::JitterOutOfRange(jitter));
        }

        check_finite("domain warp frequency", self.warp.frequency)?;
        check_finite("domain warp amplitude", self.warp.amplitude as f64)?;
        if self.warp.fractal.octaves < 1 {
            return Err(ConfigError::InvalidOctaves {
                field: "domain warp fractal octaves",
                value: self.warp.fractal.octaves as i64,
            });
        }
        check_finite("domain warp fractal lacunarity", self.warp.fractal.lacunarity)?;
        check_finite("domain warp fractal gain", self.warp.fractal.gain as f64)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NoiseConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_config_is_valid() {
        let cfg = NoiseConfig::default();
        assert_eq!(cfg.seed, 1337);
        assert_eq!(cfg.frequency, 0.01);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bounding_normalizes_octave_sum() {
        // 1 + 0.5 + 0.25 = 1.75
        assert_relative_eq!(fractal_bounding(3, 0.5), 1.0 / 1.75);
        assert_relative_eq!(fractal_bounding(1, 0.5), 1.0);
        assert_relative_eq!(fractal_bounding(0, 0.5), 1.0);
        // Negative gain bounds by magnitude.
        assert_relative_eq!(fractal_bounding(2, -0.5), 1.0 / 1.5);
    }

    #[test]
    fn warp_bounding_is_one_without_fractal() {
        let mut f = WarpFractalSettings::default();
        assert_eq!(f.bounding(), 1.0);
        f.fractal_type = DomainWarpFractalType::DomainWarpIndependent;
        assert_relative_eq!(f.bounding(), 1.0 / 1.75);
    }

    #[test]
    fn jitter_is_clamped_for_evaluation() {
        let mut c = CellularSettings::default();
        c.jitter = 3.0;
        assert_eq!(c.effective_jitter(), 1.0);
        c.jitter = -0.2;
        assert_eq!(c.effective_jitter(), 0.0);
        c.jitter = f32::NAN;
        assert_eq!(c.effective_jitter(), 0.0);
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let mut cfg = NoiseConfig::default();
        cfg.fractal.octaves = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidOctaves { .. })));

        let mut cfg = NoiseConfig::default();
        cfg.cellular.jitter = 1.5;
        assert!(matches!(cfg.validate(), Err(ConfigError::JitterOutOfRange(_))));

        let mut cfg = NoiseConfig::default();
        cfg.warp.amplitude = f32::INFINITY;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFinite { field: "domain warp amplitude", .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_strengths() {
        let mut cfg = NoiseConfig::default();
        cfg.fractal.weighted_strength = -3.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange { field: "fractal weighted strength", .. })
        ));
        cfg.fractal.weighted_strength = 1.5;
        assert!(cfg.validate().is_err());

        let mut cfg = NoiseConfig::default();
        cfg.fractal.ping_pong_strength = -2.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange { field: "fractal ping pong strength", .. })
        ));
        cfg.fractal.ping_pong_strength = 7.5;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn strengths_are_clamped_for_evaluation() {
        let mut f = FractalSettings::default();
        f.weighted_strength = -3.0;
        f.ping_pong_strength = -2.0;
        assert_eq!(f.effective_weighted_strength(), 0.0);
        assert_eq!(f.effective_ping_pong_strength(), 0.0);
        f.weighted_strength = 4.0;
        f.ping_pong_strength = f32::NAN;
        assert_eq!(f.effective_weighted_strength(), 1.0);
        assert_eq!(f.effective_ping_pong_strength(), 0.0);
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let mut cfg = NoiseConfig::with_seed(-42);
        cfg.noise_type = NoiseType::Cellular;
        cfg.fractal.fractal_type = FractalType::Ridged;
        cfg.warp.fractal.fractal_type = DomainWarpFractalType::DomainWarpProgressive;
        let json = cfg.to_json().unwrap();
        assert_eq!(NoiseConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = NoiseConfig::from_json(r#"{ "seed": 7, "fractal": { "octaves": 5 } }"#).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.fractal.octaves, 5);
        assert_eq!(cfg.fractal.gain, 0.5);
        assert_eq!(cfg.noise_type, NoiseType::OpenSimplex2);
    }

    #[test]
    fn from_json_rejects_invalid_values() {
        assert!(matches!(
            NoiseConfig::from_json(r#"{ "cellular": { "jitter": 2.0 } }"#),
            Err(ConfigError::JitterOutOfRange(_))
        ));
        assert!(matches!(
            NoiseConfig::from_json(r#"{ "noise_type": "Simplex" }"#),
            Err(ConfigError::Json(_))
        ));
    }
}

//! Fractal combination of base noise octaves.
//!
//! Octave `i` samples the base algorithm with seed `seed + i` (wrapping) at
//! `p · lacunarityⁱ`. The first octave's amplitude is the fractal bounding,
//! and each later octave is scaled by `gain`, and additionally by
//! `lerp(1, w, weighted_strength)` where `w` depends on the previous octave's
//! value.
use crate::algorithms;
use crate::config::{FractalSettings, FractalType, NoiseConfig};
use crate::math::{lerp, ping_pong};
use crate::rotation::{skew_2d, Transform3D};

/// Contribution of one octave and the weight it passes to the next.
fn octave_terms(fractal: &FractalSettings, n: f32) -> (f32, f32) {
    match fractal.fractal_type {
        FractalType::None | FractalType::FBm => (n, (n + 1.0).min(2.0) * 0.5),
        FractalType::Ridged => {
            let r = n.abs();
            (1.0 - 2.0 * r, 1.0 - r)
        }
        FractalType::PingPong => {
            let p = ping_pong((n + 1.0) * fractal.effective_ping_pong_strength());
            ((p - 0.5) * 2.0, p)
        }
    }
}

/// Combine octaves of `base(octave_seed, scale)`, where `scale` multiplies
/// the already frequency-scaled coordinate.
pub fn combine(fractal: &FractalSettings, seed: i32, mut base: impl FnMut(i32, f64) -> f32) -> f32 {
    if fractal.fractal_type == FractalType::None {
        return base(seed, 1.0);
    }

    let mut sum = 0.0;
    let mut amp = fractal.bounding();
    let mut scale = 1.0;
    let weighted_strength = fractal.effective_weighted_strength();
    for i in 0..fractal.effective_octaves() {
        let n = base(seed.wrapping_add(i as i32), scale);
        let (contribution, weight) = octave_terms(fractal, n);
        sum += contribution * amp;
        amp *= lerp(1.0, weight, weighted_strength);
        amp *= fractal.gain;
        scale *= fractal.lacunarity;
    }
    sum
}

/// Evaluate 2D noise for `config` at `(x, y)`.
pub fn sample_2d(config: &NoiseConfig, x: f64, y: f64) -> f32 {
    let (x, y) = if algorithms::uses_simplex_lattice(config.noise_type) {
        skew_2d(x, y)
    } else {
        (x, y)
    };
    let (x, y) = (x * config.frequency, y * config.frequency);

    combine(&config.fractal, config.seed, |seed, scale| {
        algorithms::sample_2d(config.noise_type, &config.cellular, seed, x * scale, y * scale)
    })
}

/// Evaluate 3D noise for `config` at `(x, y, z)`.
pub fn sample_3d(config: &NoiseConfig, x: f64, y: f64, z: f64) -> f32 {
    let transform = Transform3D::resolve(
        config.rotation_type_3d,
        algorithms::uses_simplex_lattice(config.noise_type),
    );
    let (x, y, z) = transform.apply(x, y, z);
    let f = config.frequency;
    let (x, y, z) = (x * f, y * f, z * f);

    combine(&config.fractal, config.seed, |seed, scale| {
        algorithms::sample_3d(
            config.noise_type,
            &config.cellular,
            seed,
            x * scale,
            y * scale,
            z * scale,
        )
    })
}

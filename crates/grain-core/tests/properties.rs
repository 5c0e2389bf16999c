//! Cross-module properties of the public generator.
use grain_core::{
    CellularDistanceFunction, CellularReturnType, DomainWarpFractalType, DomainWarpType,
    FractalType, NoiseConfig, NoiseGenerator, NoiseType, RotationType3D, Vector2, Vector3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f32 = 0.01;

fn random_points(seed: u64, n: usize, range: f64) -> Vec<(f64, f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (
                rng.gen_range(-range..range),
                rng.gen_range(-range..range),
                rng.gen_range(-range..range),
            )
        })
        .collect()
}

fn generator(noise_type: NoiseType, frequency: f64) -> NoiseGenerator {
    let mut g = NoiseGenerator::new(1337);
    g.set_noise_type(noise_type);
    g.set_frequency(frequency);
    g
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn fresh_generators_agree_bit_for_bit() {
    for &noise_type in NoiseType::ALL {
        for &fractal in FractalType::ALL {
            let build = || {
                let mut g = generator(noise_type, 0.02);
                g.set_fractal_type(fractal);
                g.set_rotation_type_3d(RotationType3D::ImproveXZPlanes);
                g
            };
            let (a, b) = (build(), build());
            for (x, y, z) in random_points(1, 64, 500.0) {
                assert_eq!(
                    a.get_noise_2d(x, y).to_bits(),
                    b.get_noise_2d(x, y).to_bits(),
                    "{noise_type}/{fractal} 2D differs at ({x}, {y})"
                );
                assert_eq!(
                    a.get_noise_3d(x, y, z).to_bits(),
                    b.get_noise_3d(x, y, z).to_bits(),
                    "{noise_type}/{fractal} 3D differs at ({x}, {y}, {z})"
                );
            }
        }
    }
}

#[test]
fn warp_is_deterministic() {
    let mut g = NoiseGenerator::new(99);
    g.set_domain_warp_fractal_type(DomainWarpFractalType::DomainWarpProgressive);
    g.set_domain_warp_amp(40.0);
    let h = g.clone();
    for (x, y, z) in random_points(2, 64, 1000.0) {
        let (mut a, mut b) = (Vector3::new(x, y, z), Vector3::new(x, y, z));
        g.domain_warp_3d(&mut a);
        h.domain_warp_3d(&mut b);
        assert_eq!(a, b);
    }
}

// ── Boundedness ───────────────────────────────────────────────────────────────

#[test]
fn base_noise_stays_in_unit_range() {
    let points = random_points(3, 2000, 1000.0);
    for &noise_type in NoiseType::ALL {
        let g = generator(noise_type, 0.05);
        for &(x, y, z) in &points {
            let n2 = g.get_noise_2d(x, y);
            let n3 = g.get_noise_3d(x, y, z);
            assert!(n2.abs() <= 1.0 + EPS, "{noise_type} 2D out of range: {n2} at ({x}, {y})");
            assert!(n3.abs() <= 1.0 + EPS, "{noise_type} 3D out of range: {n3} at ({x}, {y}, {z})");
        }
    }
}

#[test]
fn fractal_noise_stays_in_unit_range() {
    let points = random_points(4, 300, 1000.0);
    for &noise_type in NoiseType::ALL {
        for fractal in [FractalType::FBm, FractalType::Ridged, FractalType::PingPong] {
            let mut g = generator(noise_type, 0.03);
            g.set_fractal_type(fractal);
            g.set_fractal_octaves(5);
            g.set_fractal_weighted_strength(0.5);
            for &(x, y, z) in &points {
                let n2 = g.get_noise_2d(x, y);
                let n3 = g.get_noise_3d(x, y, z);
                assert!(n2.abs() <= 1.0 + EPS, "{noise_type}/{fractal} 2D: {n2}");
                assert!(n3.abs() <= 1.0 + EPS, "{noise_type}/{fractal} 3D: {n3}");
            }
        }
    }
}

// ── Continuity ────────────────────────────────────────────────────────────────

#[test]
fn dense_sampling_shows_no_jumps() {
    const STEP: f64 = 1e-3;
    const MAX_JUMP: f32 = 0.05;
    for &noise_type in NoiseType::ALL {
        // CellValue steps between cells, so cellular is sampled as a distance.
        let mut g = generator(noise_type, 1.0);
        g.set_cellular_return_type(CellularReturnType::Distance);

        let mut prev2 = g.get_noise_2d(-3.0, -1.7);
        let mut prev3 = g.get_noise_3d(-3.0, -1.7, 0.4);
        for i in 1..6000 {
            let t = i as f64 * STEP;
            let n2 = g.get_noise_2d(-3.0 + t, -1.7 + 0.61 * t);
            let n3 = g.get_noise_3d(-3.0 + t, -1.7 + 0.61 * t, 0.4 - 0.37 * t);
            assert!((n2 - prev2).abs() < MAX_JUMP, "{noise_type} 2D jump {prev2} -> {n2} at t={t}");
            assert!((n3 - prev3).abs() < MAX_JUMP, "{noise_type} 3D jump {prev3} -> {n3} at t={t}");
            prev2 = n2;
            prev3 = n3;
        }
    }
}

#[test]
fn euclidean_cellular_is_continuous_too() {
    let mut g = generator(NoiseType::Cellular, 1.0);
    g.set_cellular_distance_function(CellularDistanceFunction::Euclidean);
    let mut prev = g.get_noise_2d(0.0, 0.0);
    for i in 1..5000 {
        let t = i as f64 * 1e-3;
        let n = g.get_noise_2d(t, 0.3 * t);
        assert!((n - prev).abs() < 0.05);
        prev = n;
    }
}

// ── Fractal octave decay ──────────────────────────────────────────────────────

#[test]
fn each_added_octave_changes_less() {
    let points = random_points(5, 512, 500.0);
    for fractal in [FractalType::FBm, FractalType::Ridged, FractalType::PingPong] {
        let mut g = generator(NoiseType::OpenSimplex2, 0.01);
        g.set_fractal_type(fractal);

        let stack = |g: &NoiseGenerator| -> Vec<f32> {
            points.iter().map(|&(x, y, _)| g.get_noise_2d(x, y)).collect()
        };
        g.set_fractal_octaves(1);
        let mut previous = stack(&g);
        let mut last_change = f32::INFINITY;
        for octaves in 2..=6 {
            g.set_fractal_octaves(octaves);
            let current = stack(&g);
            let change = previous
                .iter()
                .zip(&current)
                .map(|(a, b)| (a - b).abs())
                .sum::<f32>()
                / points.len() as f32;
            assert!(
                change < last_change,
                "{fractal}: octave {octaves} changed {change:.4}, previous {last_change:.4}"
            );
            last_change = change;
            previous = current;
        }
    }
}

// ── Seed sensitivity ──────────────────────────────────────────────────────────

#[test]
fn distinct_seeds_rarely_agree() {
    let points = random_points(6, 512, 1000.0);
    for &noise_type in NoiseType::ALL {
        let a = generator(noise_type, 0.05);
        let mut b = a.clone();
        b.set_seed(1338);
        let close_2d = points
            .iter()
            .filter(|&&(x, y, _)| (a.get_noise_2d(x, y) - b.get_noise_2d(x, y)).abs() < 1e-3)
            .count();
        let close_3d = points
            .iter()
            .filter(|&&(x, y, z)| (a.get_noise_3d(x, y, z) - b.get_noise_3d(x, y, z)).abs() < 1e-3)
            .count();
        let frac_2d = close_2d as f64 / points.len() as f64;
        let frac_3d = close_3d as f64 / points.len() as f64;
        assert!(frac_2d < 0.05, "{noise_type}: seeds 1337 and 1338 agree on {frac_2d:.3} of 2D points");
        assert!(frac_3d < 0.05, "{noise_type}: seeds 1337 and 1338 agree on {frac_3d:.3} of 3D points");
    }
}

// ── Domain warp ───────────────────────────────────────────────────────────────

#[test]
fn zero_amplitude_warp_is_identity() {
    for &warp_type in DomainWarpType::ALL {
        for &fractal in DomainWarpFractalType::ALL {
            let mut g = NoiseGenerator::default();
            g.set_domain_warp_type(warp_type);
            g.set_domain_warp_fractal_type(fractal);
            g.set_domain_warp_amp(0.0);
            for (x, y, z) in random_points(7, 32, 1e4) {
                let mut p2 = Vector2::new(x, y);
                let mut p3 = Vector3::new(x, y, z);
                g.domain_warp_2d(&mut p2);
                g.domain_warp_3d(&mut p3);
                assert_eq!(p2, Vector2::new(x, y), "{warp_type}/{fractal}");
                assert_eq!(p3, Vector3::new(x, y, z), "{warp_type}/{fractal}");
            }
        }
    }
}

#[test]
fn warp_displacement_is_bounded_by_amplitude() {
    const AMP: f32 = 25.0;
    let limit = AMP as f64 * 1.0001;
    for &warp_type in DomainWarpType::ALL {
        for &fractal in DomainWarpFractalType::ALL {
            let mut g = NoiseGenerator::default();
            g.set_domain_warp_type(warp_type);
            g.set_domain_warp_fractal_type(fractal);
            g.set_domain_warp_amp(AMP);
            for (x, y, z) in random_points(8, 200, 5000.0) {
                let mut p2 = Vector2::new(x, y);
                g.domain_warp_2d(&mut p2);
                let d2 = p2.distance(Vector2::new(x, y));
                assert!(d2 <= limit, "{warp_type}/{fractal} 2D moved {d2}");

                let mut p3 = Vector3::new(x, y, z);
                g.domain_warp_3d(&mut p3);
                let d3 = p3.distance(Vector3::new(x, y, z));
                assert!(d3 <= limit, "{warp_type}/{fractal} 3D moved {d3}");
            }
        }
    }
}

#[test]
fn warp_moves_points_with_nonzero_amplitude() {
    let mut g = NoiseGenerator::default();
    g.set_domain_warp_amp(30.0);
    let moved = random_points(9, 50, 1000.0).into_iter().filter(|&(x, y, _)| {
        let mut p = Vector2::new(x, y);
        g.domain_warp_2d(&mut p);
        p != Vector2::new(x, y)
    });
    assert!(moved.count() > 40);
}

#[test]
fn warp_ignores_scalar_noise_settings() {
    let mut a = NoiseGenerator::default();
    a.set_domain_warp_amp(20.0);
    let mut b = a.clone();
    b.set_seed(4);
    b.set_frequency(0.3);
    b.set_noise_type(NoiseType::Cellular);
    let (mut p, mut q) = (Vector2::new(10.0, 20.0), Vector2::new(10.0, 20.0));
    a.domain_warp_2d(&mut p);
    b.domain_warp_2d(&mut q);
    assert_eq!(p, q);
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[test]
fn json_round_trip_preserves_output() {
    let g = NoiseGenerator::new(1337);
    let before = g.get_noise_2d(0.0, 0.0);
    let json = g.config().to_json().unwrap();
    let restored = NoiseGenerator::from_config(NoiseConfig::from_json(&json).unwrap());
    assert_eq!(restored.get_noise_2d(0.0, 0.0).to_bits(), before.to_bits());
    assert_eq!(restored.config(), g.config());
}

#[test]
fn cell_value_is_constant_inside_a_cell() {
    let mut g = generator(NoiseType::Cellular, 1.0);
    g.set_cellular_jitter(0.0);
    g.set_cellular_return_type(CellularReturnType::CellValue);

    // Feature points sit on the integer lattice; (3, -2) owns everything
    // closer than 0.5.
    let centre = g.get_noise_2d(3.0, -2.0);
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..300 {
        let r = rng.gen_range(0.0..0.4);
        let a: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let v = g.get_noise_2d(3.0 + r * a.cos(), -2.0 + r * a.sin());
        assert_eq!(v, centre);
    }
}

#[test]
fn hand_built_invalid_config_still_evaluates() {
    let mut cfg = NoiseConfig::default();
    cfg.noise_type = NoiseType::Cellular;
    cfg.fractal.fractal_type = FractalType::FBm;
    cfg.fractal.octaves = 0;
    cfg.cellular.jitter = 7.5;
    assert!(cfg.validate().is_err());

    let g = NoiseGenerator::from_config(cfg);
    for (x, y, z) in random_points(11, 100, 300.0) {
        assert!(g.get_noise_2d(x, y).abs() <= 1.0 + EPS);
        assert!(g.get_noise_3d(x, y, z).abs() <= 1.0 + EPS);
    }
}

#[test]
fn nan_input_propagates() {
    for &noise_type in NoiseType::ALL {
        let g = generator(noise_type, 0.01);
        assert!(g.get_noise_2d(f64::NAN, 1.0).is_nan(), "{noise_type}");
        assert!(g.get_noise_3d(0.0, f64::NAN, 1.0).is_nan(), "{noise_type}");
    }
}

#[test]
fn extreme_coordinates_do_not_panic() {
    for &noise_type in NoiseType::ALL {
        let g = generator(noise_type, 1.0);
        for v in [f64::MAX, f64::MIN, 3.0e9, -3.0e9, f64::INFINITY] {
            let _ = g.get_noise_2d(v, v);
            let _ = g.get_noise_3d(v, -v, v);
        }
    }
}

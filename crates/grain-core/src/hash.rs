//! Deterministic lattice hashing and gradient lookup.
//!
//! Lattice coordinates are "primed" (multiplied by a large odd constant per
//! axis) by the caller so neighbouring cells can be stepped with a single
//! wrapping add. The primed values are XOR-ed with the seed and pushed
//! through a 32-bit avalanche finalizer. All arithmetic is `i32` / `u32`
//! wraparound, so results are identical on every platform.
use crate::tables::{GRADIENTS_2D, GRADIENTS_3D, RAND_VECS_2D, RAND_VECS_3D};

pub const PRIME_X: i32 = 501_125_321;
pub const PRIME_Y: i32 = 1_136_930_381;
pub const PRIME_Z: i32 = 1_720_413_743;

/// Twice the per-axis primes, for stepping two cells at once.
pub const PRIME_X2: i32 = PRIME_X.wrapping_mul(2);
pub const PRIME_Y2: i32 = PRIME_Y.wrapping_mul(2);
pub const PRIME_Z2: i32 = PRIME_Z.wrapping_mul(2);

/// Scale mapping the full `i32` range onto `[-1, 1)`.
pub const I32_TO_UNIT: f32 = 1.0 / 2_147_483_648.0;

#[inline]
fn avalanche(h: i32) -> i32 {
    let mut h = h as u32;
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h as i32
}

/// Hash of a primed 2D lattice point.
#[inline]
pub fn hash_2d(seed: i32, x_primed: i32, y_primed: i32) -> i32 {
    avalanche(seed ^ x_primed ^ y_primed)
}

/// Hash of a primed 3D lattice point.
#[inline]
pub fn hash_3d(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> i32 {
    avalanche(seed ^ x_primed ^ y_primed ^ z_primed)
}

/// Hash of an unprimed 2D cell index.
pub fn lattice_hash_2d(seed: i32, ix: i32, iy: i32) -> i32 {
    hash_2d(seed, ix.wrapping_mul(PRIME_X), iy.wrapping_mul(PRIME_Y))
}

/// Hash of an unprimed 3D cell index.
pub fn lattice_hash_3d(seed: i32, ix: i32, iy: i32, iz: i32) -> i32 {
    hash_3d(
        seed,
        ix.wrapping_mul(PRIME_X),
        iy.wrapping_mul(PRIME_Y),
        iz.wrapping_mul(PRIME_Z),
    )
}

// ── Table indexing ────────────────────────────────────────────────────────────
//
// Gradient lookups read the low bits of the hash; random-vector lookups read
// bits 8 and up so the dual lookups in the warp kernels stay independent.

#[inline]
fn gradient_index_2d(hash: i32) -> usize {
    (hash & (127 << 1)) as usize
}

#[inline]
fn gradient_index_3d(hash: i32) -> usize {
    (hash & (63 << 2)) as usize
}

#[inline]
fn rand_vec_index_2d(hash: i32) -> usize {
    ((hash >> 8) & (255 << 1)) as usize
}

#[inline]
fn rand_vec_index_3d(hash: i32) -> usize {
    ((hash >> 8) & (255 << 2)) as usize
}

/// Gradient direction assigned to a 2D cell.
pub fn gradient_2d(seed: i32, ix: i32, iy: i32) -> [f32; 2] {
    let i = gradient_index_2d(lattice_hash_2d(seed, ix, iy));
    [GRADIENTS_2D[i], GRADIENTS_2D[i | 1]]
}

/// Gradient direction assigned to a 3D cell.
pub fn gradient_3d(seed: i32, ix: i32, iy: i32, iz: i32) -> [f32; 3] {
    let i = gradient_index_3d(lattice_hash_3d(seed, ix, iy, iz));
    [GRADIENTS_3D[i], GRADIENTS_3D[i | 1], GRADIENTS_3D[i | 2]]
}

// ── Kernel helpers over primed coordinates ───────────────────────────────────

/// Scalar in `[-1, 1)` for value noise corners.
#[inline]
pub(crate) fn value_coord_2d(seed: i32, x_primed: i32, y_primed: i32) -> f32 {
    hash_2d(seed, x_primed, y_primed) as f32 * I32_TO_UNIT
}

#[inline]
pub(crate) fn value_coord_3d(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> f32 {
    hash_3d(seed, x_primed, y_primed, z_primed) as f32 * I32_TO_UNIT
}

/// Dot product of the corner gradient with the corner-to-point offset.
#[inline]
pub(crate) fn grad_coord_2d(seed: i32, x_primed: i32, y_primed: i32, xd: f32, yd: f32) -> f32 {
    let i = gradient_index_2d(hash_2d(seed, x_primed, y_primed));
    xd * GRADIENTS_2D[i] + yd * GRADIENTS_2D[i | 1]
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub(crate) fn grad_coord_3d(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    z_primed: i32,
    xd: f32,
    yd: f32,
    zd: f32,
) -> f32 {
    let i = gradient_index_3d(hash_3d(seed, x_primed, y_primed, z_primed));
    xd * GRADIENTS_3D[i] + yd * GRADIENTS_3D[i | 1] + zd * GRADIENTS_3D[i | 2]
}

/// Random unit vector selected by an already computed hash.
#[inline]
pub(crate) fn rand_vec_2d(hash: i32) -> (f32, f32) {
    let i = rand_vec_index_2d(hash);
    (RAND_VECS_2D[i], RAND_VECS_2D[i | 1])
}

#[inline]
pub(crate) fn rand_vec_3d(hash: i32) -> (f32, f32, f32) {
    let i = rand_vec_index_3d(hash);
    (RAND_VECS_3D[i], RAND_VECS_3D[i | 1], RAND_VECS_3D[i | 2])
}

/// Gradient dot product scaled onto a random output direction.
#[inline]
pub(crate) fn grad_coord_dual_2d(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    xd: f32,
    yd: f32,
) -> (f32, f32) {
    let hash = hash_2d(seed, x_primed, y_primed);
    let g = gradient_index_2d(hash);
    let value = xd * GRADIENTS_2D[g] + yd * GRADIENTS_2D[g | 1];
    let (xo, yo) = rand_vec_2d(hash);
    (value * xo, value * yo)
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub(crate) fn grad_coord_dual_3d(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    z_primed: i32,
    xd: f32,
    yd: f32,
    zd: f32,
) -> (f32, f32, f32) {
    let hash = hash_3d(seed, x_primed, y_primed, z_primed);
    let g = gradient_index_3d(hash);
    let value = xd * GRADIENTS_3D[g] + yd * GRADIENTS_3D[g | 1] + zd * GRADIENTS_3D[g | 2];
    let (xo, yo, zo) = rand_vec_3d(hash);
    (value * xo, value * yo, value * zo)
}

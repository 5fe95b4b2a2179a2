//! Sampling helpers layered over the seeded generator.
//!
//! Every draw goes through an explicit `&mut R` so two gardeners with
//! independent generators never observe each other's state.

use rand::{Rng, distributions::Alphanumeric, seq::SliceRandom};
use uuid::Builder;

/// Draws a standard normal variate using the Box-Muller transform.
pub(crate) fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.r#gen();
    let u2: f64 = rng.r#gen();
    // `1 - u1` lies in (0, 1], keeping the logarithm finite.
    let radius = (-2.0 * (1.0 - u1).ln()).sqrt();
    radius * (std::f64::consts::TAU * u2).cos()
}

/// Returns the first `count` entries of a random permutation of `0..n`.
pub(crate) fn random_choice<R: Rng + ?Sized>(rng: &mut R, count: usize, n: usize) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(rng);
    permutation.truncate(count);
    permutation
}

/// Mints an opaque token shaped like a v4 UUID from the generator's bytes.
pub(crate) fn token<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.r#gen();
    Builder::from_random_bytes(bytes).into_uuid().to_string()
}

/// Produces an alphanumeric filler string of `len` characters.
pub(crate) fn filler<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

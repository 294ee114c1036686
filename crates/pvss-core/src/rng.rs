//! Randomness sources for key and polynomial generation
//!
//! Every operation that needs fresh scalars takes a [`RandomSource`] argument,
//! so deterministic behaviour is selected per call and never process-wide.

use crate::Scalar;
use elliptic_curve::{CurveArithmetic, NonZeroScalar};
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

/// Source of non-zero scalars
pub trait RandomSource {
    /// Draw the next non-zero scalar of curve `C`
    fn next_scalar<C: CurveArithmetic>(&mut self) -> Scalar<C>;
}

/// Operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn next_scalar<C: CurveArithmetic>(&mut self) -> Scalar<C> {
        Scalar::new(*NonZeroScalar::<C>::random(&mut OsRng))
    }
}

/// Reproducible ChaCha20 stream, for tests and demos
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    /// Create a stream from a 64-bit seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_scalar<C: CurveArithmetic>(&mut self) -> Scalar<C> {
        Scalar::new(*NonZeroScalar::<C>::random(&mut self.rng))
    }
}

/// Always yields the scalar `1`.
///
/// Every key pair it generates is the generator itself and every polynomial
/// has all-one coefficients, which makes outputs predictable for debugging.
/// Never use it for real sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom;

impl RandomSource for FixedRandom {
    fn next_scalar<C: CurveArithmetic>(&mut self) -> Scalar<C> {
        Scalar::one()
    }
}

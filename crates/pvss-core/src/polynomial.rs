//! Secret sharing polynomials
//!
//! The dealer splits its secret with a random polynomial of degree
//! `threshold - 1` whose constant term is the secret. Holding the polynomial
//! is equivalent to holding the secret, so it is never serialised or printed
//! and its coefficients are wiped on drop.

use crate::{Error, RandomSource, Result, Scalar};
use elliptic_curve::CurveArithmetic;
use zeroize::Zeroize;

/// Polynomial over the scalar field of curve `C`
pub struct Polynomial<C: CurveArithmetic> {
    coefficients: Vec<Scalar<C>>,
}

impl<C: CurveArithmetic> Polynomial<C> {
    /// Draw `threshold` independent coefficients; the first one is the secret
    pub fn generate<R: RandomSource + ?Sized>(threshold: usize, rng: &mut R) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold(threshold));
        }

        let coefficients = (0..threshold).map(|_| rng.next_scalar()).collect();
        Ok(Self { coefficients })
    }

    /// Number of coefficients, i.e. shares required for reconstruction
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// Polynomial degree
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate at `x`: `Σ coeff[d] · x^d mod N`
    pub fn evaluate(&self, x: &Scalar<C>) -> Scalar<C> {
        let mut result = Scalar::zero();
        let mut x_power = Scalar::one();

        for coef in &self.coefficients {
            result = result + (*coef * x_power);
            x_power = x_power * *x;
        }

        result
    }

    /// The shared secret, `coeff[0]`
    pub(crate) fn secret(&self) -> &Scalar<C> {
        &self.coefficients[0]
    }
}

impl<C: CurveArithmetic> Drop for Polynomial<C> {
    fn drop(&mut self) {
        for coef in self.coefficients.iter_mut() {
            coef.0.zeroize();
        }
    }
}

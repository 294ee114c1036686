//! Participant and dealer key pairs

use crate::{Point, RandomSource, Scalar};
use elliptic_curve::CurveArithmetic;
use std::fmt;
use zeroize::Zeroize;

/// Private scalar and matching public point `public = private · G`
#[derive(Clone)]
pub struct KeyPair<C: CurveArithmetic> {
    secret: Scalar<C>,
    public: Point<C>,
}

impl<C: CurveArithmetic> KeyPair<C> {
    /// Generate a fresh key pair from the given randomness source
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::from_secret(rng.next_scalar())
    }

    /// Rebuild a key pair from its private scalar
    pub fn from_secret(secret: Scalar<C>) -> Self {
        let public = Point::base_point_multiply(&secret);
        Self { secret, public }
    }

    /// Private scalar; never transmitted
    pub fn secret(&self) -> &Scalar<C> {
        &self.secret
    }

    /// Public point handed to the dealer
    pub fn public(&self) -> &Point<C> {
        &self.public
    }
}

impl<C: CurveArithmetic> Drop for KeyPair<C> {
    fn drop(&mut self) {
        self.secret.0.zeroize();
    }
}

impl<C: CurveArithmetic> fmt::Debug for KeyPair<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedRandom, SeededRandom};
    use k256::Secp256k1;
    use p256::NistP256;

    #[test]
    fn test_public_matches_secret() {
        let mut rng = SeededRandom::from_seed(1);
        let kp = KeyPair::<Secp256k1>::generate(&mut rng);

        assert_eq!(*kp.public(), Point::base_point_multiply(kp.secret()));
        assert!(!kp.secret().is_zero());
    }

    #[test]
    fn test_fixed_keypair_is_generator() {
        let kp = KeyPair::<NistP256>::generate(&mut FixedRandom);

        assert_eq!(*kp.secret(), Scalar::one());
        assert_eq!(*kp.public(), Point::generator());
    }

    #[test]
    fn test_distinct_keypairs() {
        let mut rng = SeededRandom::from_seed(2);
        let a = KeyPair::<NistP256>::generate(&mut rng);
        let b = KeyPair::<NistP256>::generate(&mut rng);

        assert_ne!(a.public(), b.public());
    }

    #[test]
    fn test_debug_hides_secret() {
        let kp = KeyPair::<Secp256k1>::from_secret(Scalar::from_u64(9));
        let rendered = format!("{:?}", kp);

        assert!(rendered.contains("public"));
        assert!(!rendered.contains("secret"));
    }
}

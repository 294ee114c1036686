//! Curve point arithmetic over the configured elliptic curve
//!
//! Point validation and constant-time scalar multiplication come from the
//! curve implementation; this module only adds the operations the sharing
//! protocol is phrased in.

use crate::{Error, Result, Scalar};
use elliptic_curve::{
    group::{Curve as _, Group},
    ops::MulByGenerator,
    point::AffineCoordinates,
    CurveArithmetic,
};
use hkdf::Hkdf;
use sha2::Sha256;
use std::fmt;
use std::ops::{Add, Mul};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Affine point on curve `C`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point<C: CurveArithmetic>(C::AffinePoint);

impl<C: CurveArithmetic> Point<C> {
    /// The curve's base point
    pub fn generator() -> Self {
        Self(C::ProjectivePoint::generator().to_affine())
    }

    /// The point at infinity
    pub fn identity() -> Self {
        Self(C::ProjectivePoint::identity().to_affine())
    }

    /// `scalar · G`
    pub fn base_point_multiply(scalar: &Scalar<C>) -> Self {
        Self(C::ProjectivePoint::mul_by_generator(scalar.inner()).to_affine())
    }

    /// `scalar · self`
    pub fn scalar_multiply(&self, scalar: &Scalar<C>) -> Self {
        Self((self.projective() * *scalar.inner()).to_affine())
    }

    /// `scalar⁻¹ · self`, undoing a previous [`Point::scalar_multiply`]
    pub fn scalar_divide(&self, scalar: &Scalar<C>) -> Result<Self> {
        let inverse = scalar.invert()?;
        Ok(self.scalar_multiply(&inverse))
    }

    /// Raw secret material: the point's x-coordinate
    pub fn to_secret_material(&self) -> DhSecret {
        DhSecret(self.0.x().to_vec())
    }

    /// Whether this is the point at infinity
    pub fn is_identity(&self) -> bool {
        self.projective().is_identity().into()
    }

    /// Underlying affine point
    pub fn to_affine(&self) -> C::AffinePoint {
        self.0
    }

    pub(crate) fn projective(&self) -> C::ProjectivePoint {
        C::ProjectivePoint::from(self.0)
    }

    pub(crate) fn from_projective(point: C::ProjectivePoint) -> Self {
        Self(point.to_affine())
    }
}

impl<C: CurveArithmetic> Add for Point<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_projective(self.projective() + rhs.projective())
    }
}

impl<C: CurveArithmetic> Mul<Scalar<C>> for Point<C> {
    type Output = Self;

    fn mul(self, rhs: Scalar<C>) -> Self {
        self.scalar_multiply(&rhs)
    }
}

/// Raw keying material shared between the dealer and a pooling quorum.
///
/// This is the fixed-width x-coordinate of a curve point. It is meant as
/// input to a key derivation function such as [`DhSecret::derive_key`], not
/// as a key by itself.
///
/// Leading zero bytes of the coordinate are kept. Implementations that strip
/// them feed a shorter input to their KDF, so for such points (about one in
/// 256) the derived keys will not match.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DhSecret(Vec<u8>);

impl DhSecret {
    /// Raw secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Derive a 32-byte symmetric key with HKDF-SHA256
    pub fn derive_key(&self, salt: &[u8], info: &[u8]) -> Result<[u8; 32]> {
        let mut key = [0u8; 32];
        Hkdf::<Sha256>::new(Some(salt), &self.0)
            .expand(info, &mut key)
            .map_err(|e| Error::Derivation(e.to_string()))?;
        Ok(key)
    }
}

impl PartialEq for DhSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for DhSecret {}

impl fmt::Debug for DhSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhSecret").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RandomSource, SeededRandom};
    use k256::Secp256k1;
    use p256::NistP256;

    const SECP256K1_GX: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const P256_GX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

    #[test]
    fn test_generator_secret_material() {
        let secret =
            Point::<Secp256k1>::base_point_multiply(&Scalar::one()).to_secret_material();
        assert_eq!(hex::encode(secret.as_bytes()), SECP256K1_GX);

        let secret = Point::<NistP256>::generator().to_secret_material();
        assert_eq!(hex::encode(secret.as_bytes()), P256_GX);
        assert_eq!(secret.as_bytes().len(), Scalar::<NistP256>::width());
    }

    fn divide_undoes_multiply<C: CurveArithmetic>() {
        let mut rng = SeededRandom::from_seed(5);
        let k: Scalar<C> = rng.next_scalar();
        let s: Scalar<C> = rng.next_scalar();

        let p = Point::<C>::base_point_multiply(&k);
        let blinded = p.scalar_multiply(&s);
        assert_ne!(blinded, p);
        assert_eq!(blinded.scalar_divide(&s).unwrap(), p);
    }

    #[test]
    fn test_divide_undoes_multiply() {
        divide_undoes_multiply::<Secp256k1>();
        divide_undoes_multiply::<NistP256>();
    }

    #[test]
    fn test_divide_by_zero_fails() {
        let g = Point::<Secp256k1>::generator();
        assert_eq!(
            g.scalar_divide(&Scalar::zero()).unwrap_err(),
            Error::NonInvertibleScalar
        );
    }

    #[test]
    fn test_add_is_linear() {
        let two = Scalar::<NistP256>::from_u64(2);
        let three = Scalar::<NistP256>::from_u64(3);
        let g = Point::<NistP256>::generator();

        assert_eq!(g * two + g * three, Point::base_point_multiply(&(two + three)));
        assert_eq!(g + Point::identity(), g);
        assert!(Point::<NistP256>::identity().is_identity());
        assert!(!g.is_identity());
    }

    #[test]
    fn test_derive_key() {
        let a = Point::<Secp256k1>::generator().to_secret_material();
        let b = Point::<Secp256k1>::generator().to_secret_material();
        let other =
            (Point::<Secp256k1>::generator() * Scalar::from_u64(2)).to_secret_material();

        assert_eq!(a, b);
        assert_ne!(a, other);

        let key_a = a.derive_key(b"salt", b"pvss").unwrap();
        assert_eq!(key_a, b.derive_key(b"salt", b"pvss").unwrap());
        assert_ne!(key_a, a.derive_key(b"salt", b"other").unwrap());
        assert_ne!(key_a, other.derive_key(b"salt", b"pvss").unwrap());
    }

    #[test]
    fn test_derive_key_rfc5869_vector() {
        // RFC 5869 test case 1, first 32 bytes of the OKM
        let ikm = DhSecret(vec![0x0b; 22]);
        let salt = hex::decode("000102030405060708090a0b0c").unwrap();
        let info = hex::decode("f0f1f2f3f4f5f6f7f8f9").unwrap();

        let key = ikm.derive_key(&salt, &info).unwrap();
        assert_eq!(
            hex::encode(key),
            "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf"
        );
    }

    #[test]
    fn test_debug_redacts() {
        let secret = Point::<Secp256k1>::generator().to_secret_material();
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("79"));
    }
}

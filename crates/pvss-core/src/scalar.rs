//! Scalar field arithmetic modulo the curve order
//!
//! Scalars are residues modulo the group order `N` of the configured curve.
//! Their canonical encoding is a fixed-width big-endian byte string whose
//! length is the curve's field size (32 bytes for secp256k1 and P-256).

use crate::{Error, Result};
use elliptic_curve::{
    bigint::ArrayEncoding,
    ff::{Field, PrimeField},
    generic_array::typenum::Unsigned,
    CurveArithmetic, FieldBytes, ScalarPrimitive,
};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Element of the scalar field `Z/NZ` of curve `C`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Scalar<C: CurveArithmetic>(pub(crate) C::Scalar);

impl<C: CurveArithmetic> Scalar<C> {
    /// Wrap a scalar produced by the curve implementation
    pub fn new(inner: C::Scalar) -> Self {
        Self(inner)
    }

    /// The additive identity
    pub fn zero() -> Self {
        Self(<C::Scalar as Field>::ZERO)
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        Self(<C::Scalar as Field>::ONE)
    }

    /// Scalar from an unsigned machine integer
    pub fn from_u64(value: u64) -> Self {
        Self(C::Scalar::from(value))
    }

    /// Scalar from a signed machine integer.
    ///
    /// Negative values are normalised by adding `N`. Every `i64` magnitude is
    /// far below `N`, so the result always fits the fixed encoding width.
    pub fn from_integer(value: i64) -> Self {
        let magnitude = Self::from_u64(value.unsigned_abs());
        if value < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Decode a fixed-width big-endian encoding.
    ///
    /// Fails when the length differs from [`Scalar::width`] or the encoded
    /// value is not below the group order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let width = Self::width();
        if bytes.len() != width {
            return Err(Error::InvalidScalarEncoding(format!(
                "expected {} bytes, got {}",
                width,
                bytes.len()
            )));
        }

        let repr = FieldBytes::<C>::clone_from_slice(bytes);
        Option::<C::Scalar>::from(<C::Scalar as PrimeField>::from_repr(repr))
            .map(Self)
            .ok_or_else(|| Error::InvalidScalarEncoding("value exceeds group order".into()))
    }

    /// Fixed-width big-endian encoding, always [`Scalar::width`] bytes
    pub fn to_bytes(&self) -> FieldBytes<C> {
        <C::Scalar as PrimeField>::to_repr(&self.0)
    }

    /// Build a scalar from the curve's big integer type, rejecting values >= `N`
    pub fn from_uint(value: C::Uint) -> Result<Self> {
        Option::<ScalarPrimitive<C>>::from(ScalarPrimitive::<C>::new(value))
            .map(|primitive| Self(C::Scalar::from(primitive)))
            .ok_or_else(|| Error::InvalidScalarEncoding("value exceeds group order".into()))
    }

    /// Integer value in `[0, N - 1]`
    pub fn to_uint(&self) -> C::Uint {
        let primitive: ScalarPrimitive<C> = self.0.into();
        *primitive.as_uint()
    }

    /// Multiplicative inverse modulo `N`
    pub fn invert(&self) -> Result<Self> {
        Option::<C::Scalar>::from(<C::Scalar as Field>::invert(&self.0))
            .map(Self)
            .ok_or(Error::NonInvertibleScalar)
    }

    /// Whether this is the zero residue
    pub fn is_zero(&self) -> bool {
        <C::Scalar as Field>::is_zero(&self.0).into()
    }

    /// Encoding width in bytes
    pub fn width() -> usize {
        <C::FieldBytesSize as Unsigned>::USIZE
    }

    /// Big-endian encoding of the group order `N`
    pub fn modulus_bytes() -> Vec<u8> {
        C::ORDER.to_be_byte_array().to_vec()
    }

    /// Underlying curve scalar
    pub fn inner(&self) -> &C::Scalar {
        &self.0
    }
}

impl<C: CurveArithmetic> fmt::Debug for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar").finish_non_exhaustive()
    }
}

impl<C: CurveArithmetic> Add for Scalar<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<C: CurveArithmetic> Sub for Scalar<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<C: CurveArithmetic> Mul for Scalar<C> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<C: CurveArithmetic> Neg for Scalar<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

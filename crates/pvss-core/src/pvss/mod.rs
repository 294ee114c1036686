//! Escrow, share decryption and pooling
//!
//! Implements the sharing half of Schoenmakers' PVSS scheme
//! (<http://www.win.tue.nl/~berry/papers/crypto99.pdf>):
//!
//! 1. [`escrow`]: the dealer draws a random polynomial, keeps
//!    `coeff[0] · G` as the DH secret and encrypts one evaluation to each
//!    participant's public key.
//! 2. [`decrypt_share`]: each participant strips its own key from its share,
//!    obtaining `f(sid) · G`. The raw evaluation `f(sid)` is never learned.
//! 3. [`pool`]: any `threshold` decrypted shares are combined by Lagrange
//!    interpolation at `x = 0` in the exponent, yielding `coeff[0] · G`.
//!
//! ## Verifiability
//!
//! Shares are trusted, not proven. There are no polynomial commitments and
//! no DLEQ proofs, so a dealer handing out inconsistent shares, or a
//! participant decrypting with the wrong key, goes undetected and pooling
//! silently yields a different secret. Proof generation belongs in
//! [`escrow`] and proof checking in front of [`pool`].

mod decrypt;
mod escrow;
mod pool;

pub use decrypt::decrypt_share;
pub use escrow::escrow;
pub use pool::{lagrange_coefficient_at_zero, pool};

use crate::{Point, ShareId};
use elliptic_curve::CurveArithmetic;

/// One participant's share, encrypted to its public key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptedShare<C: CurveArithmetic> {
    /// Evaluation point of the share
    pub sid: ShareId,
    /// `f(sid) · public_key`
    pub encrypted_val: Point<C>,
}

/// A share lifted onto the curve, ready for pooling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptedShare<C: CurveArithmetic> {
    /// Evaluation point of the share
    pub sid: ShareId,
    /// `f(sid) · G`
    pub decrypted_val: Point<C>,
}

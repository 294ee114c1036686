//! # PVSS Core
//!
//! Share generation and share reconstruction for a publicly verifiable
//! secret sharing scheme: Shamir's polynomial sharing lifted onto an
//! elliptic-curve group.
//!
//! This crate provides the fundamental building blocks for:
//! - Scalar field arithmetic modulo the curve order
//! - Curve point arithmetic and secret material extraction
//! - Participant key pairs
//! - Secret sharing polynomials
//! - The escrow / decrypt / pool protocol
//!
//! ## Protocol Overview
//!
//! A dealer splits a fresh secret into `n` shares, each encrypted to one
//! participant's public key. Every participant decrypts its own share into
//! a curve point, and any `threshold` of those points can be pooled to
//! recover the dealer's DH secret by Lagrange interpolation in the exponent.
//! No private key and no raw share value ever leaves its owner.
//!
//! ## Example
//!
//! ```rust
//! use pvss_core::{pvss, KeyPair, Secp256k1, SeededRandom};
//!
//! let mut rng = SeededRandom::from_seed(7);
//! let parties: Vec<KeyPair<Secp256k1>> = (0..3).map(|_| KeyPair::generate(&mut rng)).collect();
//! let publics: Vec<_> = parties.iter().map(|kp| *kp.public()).collect();
//!
//! let (secret, shares) = pvss::escrow(2, &publics, &mut rng)?;
//!
//! let decrypted = vec![
//!     pvss::decrypt_share(&shares[0], parties[0].secret())?,
//!     pvss::decrypt_share(&shares[2], parties[2].secret())?,
//! ];
//! assert_eq!(pvss::pool(&decrypted, 2)?, secret);
//! # Ok::<(), pvss_core::Error>(())
//! ```

pub mod error;
pub mod group;
pub mod keys;
pub mod polynomial;
pub mod pvss;
pub mod rng;
pub mod scalar;
pub mod types;

pub use error::{Error, Result};
pub use group::{DhSecret, Point};
pub use keys::KeyPair;
pub use polynomial::Polynomial;
pub use pvss::{DecryptedShare, EncryptedShare};
pub use rng::{FixedRandom, RandomSource, SeededRandom, SystemRandom};
pub use scalar::Scalar;
pub use types::{SharingConfig, ShareId};

// Curves supported out of the box
pub use k256::Secp256k1;
pub use p256::NistP256;

/// Protocol version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default threshold for a 3-party setup
pub const DEFAULT_THRESHOLD: usize = 2;

/// Default number of participants
pub const DEFAULT_PARTICIPANTS: usize = 3;

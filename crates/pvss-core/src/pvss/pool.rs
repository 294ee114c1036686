//! Combiner side: Lagrange interpolation in the exponent

use super::DecryptedShare;
use crate::{DhSecret, Error, Point, Result, Scalar, ShareId};
use elliptic_curve::{group::Group, CurveArithmetic};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Lagrange basis polynomial `l_j(0) = Π_{m≠j} x_m / (x_m − x_j) mod N`
///
/// `sid` is `x_j` and `others` yields every other identifier of the quorum.
/// An identifier in `others` equal to `sid` fails with
/// [`Error::DuplicateShareIdentifier`].
pub fn lagrange_coefficient_at_zero<C, I>(sid: ShareId, others: I) -> Result<Scalar<C>>
where
    C: CurveArithmetic,
    I: IntoIterator<Item = ShareId>,
{
    let x_j = Scalar::<C>::from_u64(sid);
    let mut coefficient = Scalar::one();

    for other in others {
        if other == sid {
            return Err(Error::DuplicateShareIdentifier(sid));
        }
        let x_m = Scalar::<C>::from_u64(other);
        coefficient = coefficient * x_m * (x_m - x_j).invert()?;
    }

    Ok(coefficient)
}

/// Reconstruct the dealer's DH secret from decrypted shares.
///
/// `threshold` is the value the shares were escrowed with. Every share is
/// used in the interpolation, so passing more than `threshold` shares is
/// fine as long as they all come from the same escrow.
///
/// # Arguments
/// * `shares` - Decrypted shares with distinct identifiers
/// * `threshold` - Shares required by the sharing session
///
/// # Returns
/// The same [`DhSecret`] the dealer obtained from escrow
#[instrument(skip(shares), fields(n_shares = shares.len()))]
pub fn pool<C: CurveArithmetic>(
    shares: &[DecryptedShare<C>],
    threshold: usize,
) -> Result<DhSecret> {
    if threshold == 0 {
        return Err(Error::InvalidThreshold(threshold));
    }
    if shares.len() < threshold {
        return Err(Error::InsufficientShares {
            required: threshold,
            actual: shares.len(),
        });
    }

    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if share.sid == 0 {
            return Err(Error::InvalidShareIdentifier(share.sid));
        }
        if !seen.insert(share.sid) {
            return Err(Error::DuplicateShareIdentifier(share.sid));
        }
    }

    let mut combined = C::ProjectivePoint::identity();

    for (j, share) in shares.iter().enumerate() {
        let others = shares
            .iter()
            .enumerate()
            .filter(|(m, _)| *m != j)
            .map(|(_, other)| other.sid);
        let coefficient = lagrange_coefficient_at_zero::<C, _>(share.sid, others)?;

        debug!(sid = share.sid, "Folding share");
        combined = combined + share.decrypted_val.scalar_multiply(&coefficient).projective();
    }

    info!("Pool completed");

    Ok(Point::<C>::from_projective(combined).to_secret_material())
}

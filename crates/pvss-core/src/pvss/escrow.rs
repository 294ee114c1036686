//! Dealer side: split a fresh secret into encrypted shares

use super::EncryptedShare;
use crate::{DhSecret, Point, Polynomial, RandomSource, Result, Scalar, SharingConfig};
use elliptic_curve::CurveArithmetic;
use tracing::{debug, info, instrument};

/// Create one encrypted share per participant for a brand new secret.
///
/// Any `threshold` of the shares, once decrypted, pool back to the returned
/// [`DhSecret`]. Shares are index-aligned with `participants`; the share for
/// `participants[i]` has identifier `i + 2`.
///
/// # Arguments
/// * `threshold` - Shares required to reconstruct
/// * `participants` - Public keys of the share holders
/// * `rng` - Randomness for the sharing polynomial
///
/// # Returns
/// The dealer's DH secret and the encrypted shares
#[instrument(skip(participants, rng), fields(n_participants = participants.len()))]
pub fn escrow<C, R>(
    threshold: usize,
    participants: &[Point<C>],
    rng: &mut R,
) -> Result<(DhSecret, Vec<EncryptedShare<C>>)>
where
    C: CurveArithmetic,
    R: RandomSource + ?Sized,
{
    SharingConfig::new(threshold, participants.len())?;

    let poly = Polynomial::<C>::generate(threshold, rng)?;
    let secret = Point::base_point_multiply(poly.secret()).to_secret_material();

    let shares = participants
        .iter()
        .enumerate()
        .map(|(index, public_key)| {
            let sid = SharingConfig::share_id(index);
            let eval = poly.evaluate(&Scalar::from_u64(sid));
            debug!(sid, "Encrypting share");
            EncryptedShare {
                sid,
                encrypted_val: public_key.scalar_multiply(&eval),
            }
        })
        .collect::<Vec<_>>();

    info!(threshold, shares = shares.len(), "Escrow completed");

    Ok((secret, shares))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, FixedRandom, KeyPair, SeededRandom};
    use k256::Secp256k1;
    use p256::NistP256;

    fn publics<C: CurveArithmetic>(keys: &[KeyPair<C>]) -> Vec<Point<C>> {
        keys.iter().map(|kp| *kp.public()).collect()
    }

    #[test]
    fn test_share_layout() {
        let mut rng = SeededRandom::from_seed(21);
        let keys: Vec<KeyPair<Secp256k1>> = (0..4).map(|_| KeyPair::generate(&mut rng)).collect();

        let (_, shares) = escrow(3, &publics(&keys), &mut rng).unwrap();

        let sids: Vec<_> = shares.iter().map(|s| s.sid).collect();
        assert_eq!(sids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_fixed_random_known_answer() {
        // All keys are G and f(x) = 1 + x, so the secret is G and share i is (i + 3) · G.
        let keys: Vec<KeyPair<NistP256>> =
            (0..3).map(|_| KeyPair::generate(&mut FixedRandom)).collect();

        let (secret, shares) = escrow(2, &publics(&keys), &mut FixedRandom).unwrap();

        assert_eq!(secret, Point::<NistP256>::generator().to_secret_material());
        for (i, share) in shares.iter().enumerate() {
            let expected = Point::base_point_multiply(&Scalar::from_u64(i as u64 + 3));
            assert_eq!(share.encrypted_val, expected);
        }
    }

    #[test]
    fn test_fresh_secret_per_run() {
        let mut rng = SeededRandom::from_seed(22);
        let keys: Vec<KeyPair<Secp256k1>> = (0..3).map(|_| KeyPair::generate(&mut rng)).collect();

        let (first, _) = escrow(2, &publics(&keys), &mut rng).unwrap();
        let (second, _) = escrow(2, &publics(&keys), &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_rejects_bad_participant_counts() {
        let keys: Vec<KeyPair<Secp256k1>> =
            (0..2).map(|_| KeyPair::generate(&mut FixedRandom)).collect();

        let err = escrow(3, &publics(&keys), &mut FixedRandom).unwrap_err();
        assert_eq!(
            err,
            Error::ParticipantCountMismatch {
                threshold: 3,
                participants: 2
            }
        );

        let err = escrow::<Secp256k1, _>(1, &[], &mut FixedRandom).unwrap_err();
        assert!(matches!(err, Error::ParticipantCountMismatch { .. }));

        let err = escrow(0, &publics(&keys), &mut FixedRandom).unwrap_err();
        assert_eq!(err, Error::InvalidThreshold(0));
    }
}

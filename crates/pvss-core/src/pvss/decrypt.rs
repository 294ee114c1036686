//! Participant side: strip the encryption from an escrowed share

use super::{DecryptedShare, EncryptedShare};
use crate::{Result, Scalar};
use elliptic_curve::CurveArithmetic;
use tracing::{debug, instrument};

/// Decrypt a share with the owner's private key.
///
/// Computes `encrypted_val / secret`, which is `f(sid) · G` when `secret`
/// matches the public key the share was encrypted to. A different key
/// yields a valid but unrelated point; nothing here can detect that.
#[instrument(skip_all, fields(sid = share.sid))]
pub fn decrypt_share<C: CurveArithmetic>(
    share: &EncryptedShare<C>,
    secret: &Scalar<C>,
) -> Result<DecryptedShare<C>> {
    let decrypted_val = share.encrypted_val.scalar_divide(secret)?;
    debug!("Share decrypted");

    Ok(DecryptedShare {
        sid: share.sid,
        decrypted_val,
    })
}

impl<C: CurveArithmetic> EncryptedShare<C> {
    /// Decrypt this share with the owner's private key
    pub fn decrypt(&self, secret: &Scalar<C>) -> Result<DecryptedShare<C>> {
        decrypt_share(self, secret)
    }
}

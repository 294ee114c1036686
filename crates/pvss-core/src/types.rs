//! Core types for PVSS sessions

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Share identifier; also the share's evaluation point `x`
pub type ShareId = u64;

/// Identifier of the first participant's share.
///
/// `x = 0` is where the secret lives, and `x = 1` is left unused.
pub const FIRST_SHARE_ID: ShareId = 2;

/// Configuration for a sharing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharingConfig {
    /// Shares required to reconstruct (t-of-n)
    pub threshold: usize,

    /// Number of participants receiving a share
    pub n_participants: usize,
}

impl SharingConfig {
    /// Create a new, validated sharing configuration
    pub fn new(threshold: usize, n_participants: usize) -> Result<Self> {
        let config = Self {
            threshold,
            n_participants,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration allows reconstruction at all
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        if self.n_participants == 0 || self.threshold > self.n_participants {
            return Err(Error::ParticipantCountMismatch {
                threshold: self.threshold,
                participants: self.n_participants,
            });
        }
        Ok(())
    }

    /// Share identifier assigned to the participant at `index`
    pub fn share_id(index: usize) -> ShareId {
        index as ShareId + FIRST_SHARE_ID
    }
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            threshold: crate::DEFAULT_THRESHOLD,
            n_participants: crate::DEFAULT_PARTICIPANTS,
        }
    }
}

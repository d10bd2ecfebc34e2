use crate::Result;
use chrono::{DateTime, Utc};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SECRET_SIZE: usize = 32;
pub const TAG_SIZE: usize = 32;

/// Trait for commitment schemes
pub trait CommitmentScheme {
    /// Commit to a fresh random value in `[0, range)`.
    fn commit(&mut self, range: u32) -> Result<Commitment>;

    /// Disclose the held-back value and secret. Consumes the commitment.
    fn reveal(&mut self, commitment: Commitment) -> Opening {
        commitment.open()
    }
}

/// HMAC key for a single round
#[derive(Clone, PartialEq, Eq)]
pub struct Secret([u8; SECRET_SIZE]);

impl Secret {
    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; SECRET_SIZE];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; SECRET_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({}..)", hex::encode(&self.0[..4]))
    }
}

/// Tag = HMAC-SHA256(secret, decimal(value))
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag([u8; TAG_SIZE]);

impl Tag {
    pub fn from_bytes(bytes: [u8; TAG_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(text: &str) -> Result<Self> {
        let mut bytes = [0u8; TAG_SIZE];
        hex::decode_to_slice(text.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; TAG_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

/// A commitment in the fair random protocol.
///
/// Only the tag and the range are readable before the commitment is opened;
/// the value and the secret stay inside until [`Commitment::open`] consumes it.
pub struct Commitment {
    tag: Tag,
    range: u32,
    created_at: DateTime<Utc>,
    opening: Opening,
}

impl Commitment {
    pub fn new(value: u32, range: u32, secret: Secret) -> Result<Self> {
        let tag = super::compute_tag(secret.as_bytes(), value)?;

        Ok(Self {
            tag,
            range,
            created_at: Utc::now(),
            opening: Opening { value, secret },
        })
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn range(&self) -> u32 {
        self.range
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn open(self) -> Opening {
        self.opening
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("tag", &self.tag)
            .field("range", &self.range)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// The disclosed half of a commitment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opening {
    value: u32,
    secret: Secret,
}

impl Opening {
    pub fn new(value: u32, secret: Secret) -> Self {
        Self { value, secret }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Recompute the MAC and compare it against a previously disclosed tag.
    pub fn verify(&self, tag: &Tag) -> Result<bool> {
        super::verify_tag(self.secret.as_bytes(), self.value, tag)
    }
}

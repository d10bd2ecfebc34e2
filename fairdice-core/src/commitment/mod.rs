pub mod proof;
pub mod scheme;

pub use proof::{Round, RoundProof};
pub use scheme::{Commitment, CommitmentScheme, Opening, Secret, Tag, SECRET_SIZE, TAG_SIZE};

use crate::{GameError, Result};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 commit-reveal impl
#[derive(Debug)]
pub struct HmacScheme<R = OsRng> {
    rng: R,
}

impl HmacScheme<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for HmacScheme<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> HmacScheme<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> CommitmentScheme for HmacScheme<R> {
    fn commit(&mut self, range: u32) -> Result<Commitment> {
        if range == 0 {
            return Err(GameError::InvalidRange);
        }

        let value = self.rng.gen_range(0..range);
        let secret = Secret::random(&mut self.rng);
        let commitment = Commitment::new(value, range, secret)?;

        tracing::debug!("Committed to a value in 0..{}: {}", range, commitment.tag());
        Ok(commitment)
    }
}

fn keyed_mac(key: &[u8], value: u32) -> Result<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| GameError::InvalidKey)?;
    mac.update(value.to_string().as_bytes());
    Ok(mac)
}

/// MAC over the decimal text of `value`, keyed by `key`
pub fn compute_tag(key: &[u8], value: u32) -> Result<Tag> {
    let digest = keyed_mac(key, value)?.finalize().into_bytes();
    Ok(Tag::from_bytes(digest.into()))
}

/// Constant-time comparison of a recomputed MAC against `tag`
pub fn verify_tag(key: &[u8], value: u32, tag: &Tag) -> Result<bool> {
    Ok(keyed_mac(key, value)?.verify_slice(tag.as_bytes()).is_ok())
}

/// Check a disclosed round from its hex-encoded tag and secret.
pub fn verify_disclosure(tag_hex: &str, value: u32, secret_hex: &str) -> Result<bool> {
    let tag = Tag::from_hex(tag_hex)?;
    let secret = hex::decode(secret_hex.trim())?;
    verify_tag(&secret, value, &tag)
}

/// Fair value from two contributions: `(a + b) mod modulus`
pub fn combine(a: i64, b: i64, modulus: u32) -> Result<u32> {
    if modulus == 0 {
        return Err(GameError::InvalidRange);
    }

    let m = i64::from(modulus);
    Ok(((a.rem_euclid(m) + b.rem_euclid(m)) % m) as u32)
}

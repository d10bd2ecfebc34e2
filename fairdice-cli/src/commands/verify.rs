use anyhow::{bail, Result};
use fairdice_core::verify_disclosure;

pub fn verify(tag: &str, value: u32, secret: &str) -> Result<()> {
    if verify_disclosure(tag, value, secret)? {
        println!("HMAC matches: the value {} was fixed before your move.", value);
        Ok(())
    } else {
        bail!("HMAC mismatch: value {} and the given key do not produce this tag", value)
    }
}

//! Keccak-256 hashing.

use tiny_keccak::{Hasher, Keccak};

/// Computes the Keccak-256 digest of `data`.
///
/// This is the original Keccak padding used by the EVM, not NIST SHA3-256.
///
/// # Examples
///
/// ```
/// use cpmm_pair::math::keccak256;
///
/// let digest = keccak256(b"");
/// assert_eq!(
///     hex::encode(digest),
///     "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
/// );
/// ```
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// Computes the Keccak-256 digest of the concatenation of `parts`
/// without allocating an intermediate buffer.
#[must_use]
pub fn keccak256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

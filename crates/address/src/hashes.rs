//! Bitcoin-style double-sha2, used for Base58Check checksums.

use sha2::{Digest, Sha256};

/// Length of a Base58Check checksum in bytes.
pub const CHECKSUM_LENGTH: usize = 4;

/// Compute `sha256(sha256(data))`.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&second[..]);
    digest
}

/// The first 4 bytes of `hash256(data)`.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    checksum.copy_from_slice(&hash256(data)[..CHECKSUM_LENGTH]);
    checksum
}

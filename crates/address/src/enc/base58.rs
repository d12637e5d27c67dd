//! Base58Check legacy addresses.

use crate::{
    hashes::{checksum, CHECKSUM_LENGTH},
    nets::Network,
    types::{DecodedPayload, Encoding},
    DecodeError, DecodeResult,
};

/// Decode a base58 check string into its version byte and payload. Any version byte is
/// accepted; see `decode` for the network-aware form.
pub fn decode_b58_check(s: &str) -> DecodeResult<(u8, Vec<u8>)> {
    let data = bs58::decode(s).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidCharacter { character, .. } => {
            DecodeError::InvalidCharacter(character)
        }
        bs58::decode::Error::NonAsciiCharacter { index } => DecodeError::InvalidCharacter(
            s.get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        ),
        _ => DecodeError::TooShort,
    })?;

    // version byte, then checksum
    if data.len() < 1 + CHECKSUM_LENGTH {
        return Err(DecodeError::TooShort);
    }

    let idx = data.len() - CHECKSUM_LENGTH;
    let (payload, check) = data.split_at(idx);
    if checksum(payload) != check {
        return Err(DecodeError::ChecksumMismatch);
    }

    Ok((payload[0], payload[1..].to_vec()))
}

/// Encode a version byte and payload into a base58 check String
pub fn encode_b58_check(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LENGTH);
    data.push(version);
    data.extend_from_slice(payload);

    let check = checksum(&data);
    data.extend_from_slice(&check);

    bs58::encode(data).into_string()
}

/// Decode a legacy address. The version byte must be in the network's prefix table.
pub fn decode(s: &str, network: &Network) -> DecodeResult<DecodedPayload> {
    let (version, program) = decode_b58_check(s)?;
    let kind = network
        .legacy_kind(version)
        .ok_or(DecodeError::UnknownVersion(version))?;

    Ok(DecodedPayload {
        encoding: Encoding::Base58Check(kind),
        version,
        program,
        hrp: None,
    })
}

//! Bech32 and Bech32m witness addresses.

use bech32::{u5, FromBase32, ToBase32, Variant};

use crate::{
    nets::Network,
    types::{DecodedPayload, Encoding},
    DecodeError, DecodeResult,
};

/// Separates the human-readable part from the data part.
pub const SEPARATOR: char = '1';

/// Number of checksum characters at the end of the data part.
pub const CHECKSUM_LENGTH: usize = 6;

/// Highest witness version.
pub const MAX_WITNESS_VERSION: u8 = 16;

const MAX_HRP_LENGTH: usize = 83;

/// Longest string BIP173 allows, separator and checksum included.
pub const MAX_LENGTH: usize = 90;

/// Program length of a P2WPKH (and v0 legacy-hash sized) witness program.
pub const WPKH_PROGRAM_LENGTH: usize = 20;

/// Program length of P2WSH and P2TR witness programs.
pub const WSH_PROGRAM_LENGTH: usize = 32;

impl From<bech32::Error> for DecodeError {
    fn from(e: bech32::Error) -> Self {
        match e {
            bech32::Error::MissingSeparator => DecodeError::MissingSeparator,
            bech32::Error::InvalidChecksum => DecodeError::ChecksumMismatch,
            bech32::Error::InvalidChar(c) => DecodeError::InvalidCharacter(c),
            bech32::Error::InvalidData(v) => DecodeError::InvalidWitnessVersion(v),
            bech32::Error::InvalidPadding => DecodeError::NonZeroPadding,
            bech32::Error::MixedCase => DecodeError::MixedCase,
            // HRP length is checked before decoding, so only a data part shorter than
            // the checksum gets here
            bech32::Error::InvalidLength => DecodeError::TooShort,
        }
    }
}

/// A structurally valid segwit string: checksum verified, witness version in range,
/// program regrouped into bytes. No rules about which programs are meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessProgram {
    /// Lowercased human-readable part
    pub hrp: String,
    /// Which checksum constant verified
    pub variant: Variant,
    /// Witness version, 0 to 16
    pub version: u8,
    /// The program bytes
    pub program: Vec<u8>,
}

/// The variant BIP350 requires for a witness version.
pub fn variant_for(version: u8) -> Variant {
    if version == 0 {
        Variant::Bech32
    } else {
        Variant::Bech32m
    }
}

/// Split off the human-readable part of a candidate, if it has a separator.
pub(crate) fn split_hrp(s: &str) -> Option<&str> {
    s.rfind(SEPARATOR).map(|idx| &s[..idx])
}

/// Decode a witness program from a bech32 or bech32m string.
pub fn decode_bech32(s: &str) -> DecodeResult<WitnessProgram> {
    if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
        return Err(DecodeError::InvalidCharacter(c));
    }
    if s.len() > MAX_LENGTH {
        return Err(DecodeError::TooLong(s.len()));
    }

    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(DecodeError::MixedCase);
    }
    let s = s.to_ascii_lowercase();

    let hrp = split_hrp(&s).ok_or(DecodeError::MissingSeparator)?;
    if hrp.is_empty()
        || hrp.len() > MAX_HRP_LENGTH
        || !hrp.bytes().all(|b| (33..=126).contains(&b))
    {
        return Err(DecodeError::InvalidHrp);
    }

    // witness version, then checksum
    if s.len() - hrp.len() - 1 < 1 + CHECKSUM_LENGTH {
        return Err(DecodeError::TooShort);
    }

    let (hrp, data, variant) = bech32::decode(&s)?;

    let version = data[0].to_u8();
    if version > MAX_WITNESS_VERSION {
        return Err(DecodeError::InvalidWitnessVersion(version));
    }
    let program = Vec::<u8>::from_base32(&data[1..])?;

    Ok(WitnessProgram {
        hrp,
        variant,
        version,
        program,
    })
}

/// Encode a witness program to bech32, or bech32m for versions above 0.
pub fn encode_bech32(hrp: &str, version: u8, program: &[u8]) -> DecodeResult<String> {
    if version > MAX_WITNESS_VERSION {
        return Err(DecodeError::InvalidWitnessVersion(version));
    }

    let mut data = vec![u5::try_from_u8(version)?];
    data.extend(program.to_base32());
    bech32::encode(hrp, data, variant_for(version)).map_err(|e| match e {
        bech32::Error::InvalidLength | bech32::Error::InvalidChar(_) => DecodeError::InvalidHrp,
        e => e.into(),
    })
}

/// Decode a witness address. The HRP must be in the network table, and the program must
/// be a P2WPKH, P2WSH or P2TR program under the matching checksum variant.
pub fn decode(s: &str, network: &Network) -> DecodeResult<DecodedPayload> {
    let WitnessProgram {
        hrp,
        variant,
        version,
        program,
    } = decode_bech32(s)?;

    if !network.has_hrp(&hrp) {
        return Err(DecodeError::UnknownHrp(hrp));
    }

    if variant != variant_for(version) {
        return Err(DecodeError::ChecksumMismatch);
    }

    let length = program.len();
    match (version, length) {
        (0, WPKH_PROGRAM_LENGTH) | (0, WSH_PROGRAM_LENGTH) | (1, WSH_PROGRAM_LENGTH) => {}
        (0, _) | (1, _) => return Err(DecodeError::InvalidProgramLength { version, length }),
        _ => return Err(DecodeError::UnsupportedWitnessVersion(version)),
    }

    Ok(DecodedPayload {
        encoding: Encoding::from(variant),
        version,
        program,
        hrp: Some(hrp),
    })
}

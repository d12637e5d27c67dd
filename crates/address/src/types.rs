//! Address types and the decoded form shared by both decoders.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The address formats a caller can ask for.
///
/// `BECH32` and `ANY` are request-side conveniences. A decoded address is always
/// classified as one of the concrete types, and `expand` turns a request into the
/// concrete types it accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AddressType {
    /// Legacy Pay to Pubkeyhash
    P2PKH,
    /// Legacy Pay to Scripthash
    P2SH,
    /// Any witness v0 address, either P2WPKH or P2WSH
    BECH32,
    /// Witness Pay to Pubkeyhash
    P2WPKH,
    /// Witness Pay to Scripthash
    P2WSH,
    /// Witness v1 Pay to Taproot
    P2TR,
    /// Any recognized address
    ANY,
}

impl AddressType {
    /// Every type a decoded address can be classified as.
    pub const CONCRETE: [AddressType; 5] = [
        AddressType::P2PKH,
        AddressType::P2SH,
        AddressType::P2WPKH,
        AddressType::P2WSH,
        AddressType::P2TR,
    ];

    /// A short human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "Pay to Public Key Hash (P2PKH)",
            AddressType::P2SH => "Pay to Script Hash (P2SH)",
            AddressType::BECH32 => "Native SegWit (Bech32)",
            AddressType::P2WPKH => "Pay to Witness Public Key Hash (P2WPKH)",
            AddressType::P2WSH => "Pay to Witness Script Hash (P2WSH)",
            AddressType::P2TR => "Pay to Taproot (P2TR)",
            AddressType::ANY => "any Bitcoin address",
        }
    }

    /// The concrete types this request matches.
    pub fn expand(&self) -> &'static [AddressType] {
        match self {
            AddressType::P2PKH => &[AddressType::P2PKH],
            AddressType::P2SH => &[AddressType::P2SH],
            AddressType::BECH32 => &[AddressType::P2WPKH, AddressType::P2WSH],
            AddressType::P2WPKH => &[AddressType::P2WPKH],
            AddressType::P2WSH => &[AddressType::P2WSH],
            AddressType::P2TR => &[AddressType::P2TR],
            AddressType::ANY => &Self::CONCRETE,
        }
    }

    /// True if a decoded address can be classified as this type.
    pub fn is_concrete(&self) -> bool {
        !matches!(self, AddressType::BECH32 | AddressType::ANY)
    }

    fn name(&self) -> &'static str {
        match self {
            AddressType::P2PKH => "P2PKH",
            AddressType::P2SH => "P2SH",
            AddressType::BECH32 => "BECH32",
            AddressType::P2WPKH => "P2WPKH",
            AddressType::P2WSH => "P2WSH",
            AddressType::P2TR => "P2TR",
            AddressType::ANY => "ANY",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown `AddressType` name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown address type {0:?}")]
pub struct ParseAddressTypeError(pub String);

impl FromStr for AddressType {
    type Err = ParseAddressTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            AddressType::P2PKH,
            AddressType::P2SH,
            AddressType::BECH32,
            AddressType::P2WPKH,
            AddressType::P2WSH,
            AddressType::P2TR,
            AddressType::ANY,
        ]
        .into_iter()
        .find(|t| t.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| ParseAddressTypeError(s.to_owned()))
    }
}

/// The two kinds of legacy Base58Check address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegacyKind {
    /// Version byte marks a pubkey hash
    PubkeyHash,
    /// Version byte marks a script hash
    ScriptHash,
}

impl From<LegacyKind> for AddressType {
    fn from(kind: LegacyKind) -> Self {
        match kind {
            LegacyKind::PubkeyHash => AddressType::P2PKH,
            LegacyKind::ScriptHash => AddressType::P2SH,
        }
    }
}

/// The encoding a payload was decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Base58Check, with the kind its version byte resolved to
    Base58Check(LegacyKind),
    /// Bech32 checksum constant, witness v0
    Bech32,
    /// Bech32m checksum constant, witness v1
    Bech32m,
}

impl From<bech32::Variant> for Encoding {
    fn from(variant: bech32::Variant) -> Self {
        match variant {
            bech32::Variant::Bech32 => Encoding::Bech32,
            bech32::Variant::Bech32m => Encoding::Bech32m,
        }
    }
}

/// A successfully decoded address. Only produced by the decoders in `enc`, which check
/// every structural rule before building one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedPayload {
    /// Which encoding succeeded
    pub encoding: Encoding,
    /// Base58Check version byte, or witness version
    pub version: u8,
    /// Hash (legacy) or witness program (segwit), without version or checksum
    pub program: Vec<u8>,
    /// Lowercased human-readable part, for segwit addresses
    pub hrp: Option<String>,
}

impl DecodedPayload {
    /// Classify this payload. See `classify::classify`.
    pub fn address_type(&self) -> AddressType {
        crate::classify(self)
    }
}

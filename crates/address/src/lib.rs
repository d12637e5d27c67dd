//! # Coins Address
//!
//! `coins-address` decodes, classifies and validates Bitcoin addresses.
//!
//! ## Crate Layout
//!
//! ### Encodings
//!
//! The `enc` module holds the two address decoders. `enc::base58` handles legacy
//! Base58Check addresses (P2PKH and P2SH). `enc::segwit` handles Bech32 (witness v0) and
//! Bech32m (witness v1, Taproot) addresses. Both produce a `DecodedPayload`, or a
//! `DecodeError` describing exactly why the string was rejected.
//!
//! ### Networks
//!
//! Which version bytes and human-readable parts are accepted is configured by a `Network`
//! table. `Network::mainnet()` is the default. Other networks are assembled from
//! `NetworkParams` structs, merged together, or extended one prefix at a time.
//!
//! ### Validation
//!
//! The `AddressValidator` is the entry point for constraint frameworks. It is built once
//! from a set of allowed `AddressType`s and answers `is_valid` for any number of
//! candidates. Decoding errors never escape it: every rejection is a plain `false`.
//!
//! ```
//! use coins_address::{AddressType, AddressValidator};
//!
//! let validator = AddressValidator::new([AddressType::BECH32]);
//! assert!(validator.is_valid(Some("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq")));
//! assert!(!validator.is_valid(Some("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod classify;
pub mod enc;
pub mod hashes;
pub mod nets;
pub mod types;
pub mod validator;

pub use classify::classify;
pub use nets::{LegacyPrefix, Network, NetworkParams};
pub use types::{AddressType, DecodedPayload, Encoding, LegacyKind, ParseAddressTypeError};
pub use validator::{is_valid, AddressValidator, AllowedTypes, ValidationRequest};

use thiserror::Error;

/// Errors produced while decoding an address string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside the encoding's alphabet
    #[error("Invalid character {0:?}")]
    InvalidCharacter(char),

    /// Not enough data for a version and checksum
    #[error("Decoded data is too short to hold a version and checksum")]
    TooShort,

    /// Bech32 string longer than the 90 characters BIP173 allows
    #[error("Bech32 string of {0} characters exceeds the length limit")]
    TooLong(usize),

    /// Checksum did not verify. Also returned when a witness program was checksummed
    /// with the wrong Bech32 variant for its witness version.
    #[error("Checksum mismatch")]
    ChecksumMismatch,

    /// Base58Check version byte is not in the network table
    #[error("Version byte 0x{0:02x} doesn't match any network prefix")]
    UnknownVersion(u8),

    /// Bech32 string mixes upper and lower case characters
    #[error("Bech32 string mixes upper and lower case")]
    MixedCase,

    /// Bech32 string has no `'1'` separator
    #[error("Bech32 separator not found")]
    MissingSeparator,

    /// Bech32 HRP is empty, too long, or contains non-printable characters
    #[error("Invalid bech32 human-readable part")]
    InvalidHrp,

    /// Bech32 HRP is well-formed but not in the network table
    #[error("Bech32 HRP {0:?} doesn't match any network. Hint: Is this address for another network?")]
    UnknownHrp(String),

    /// Witness version above 16
    #[error("Witness version {0} out of range")]
    InvalidWitnessVersion(u8),

    /// Witness version in range, but with no known address type
    #[error("Witness version {0} has no known address type")]
    UnsupportedWitnessVersion(u8),

    /// Leftover bits after regrouping the witness program were not zero
    #[error("Non-zero padding in witness program")]
    NonZeroPadding,

    /// Witness program length not allowed for its version
    #[error("Witness program of {length} bytes is invalid for witness version {version}")]
    InvalidProgramLength {
        /// The witness version
        version: u8,
        /// The program length in bytes
        length: usize,
    },
}

/// A simple result type alias
pub type DecodeResult<T> = Result<T, DecodeError>;

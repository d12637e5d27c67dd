//! Network prefix tables.
//!
//! A `Network` is the set of Base58Check version bytes and Bech32 human-readable parts
//! that the decoders accept. It is plain data: build it from `NetworkParams`, merge
//! several together, or load it with serde.

use serde::{Deserialize, Serialize};

use crate::types::LegacyKind;

/// NetworkParams holds the encoding parameters for a network. This is composed of the
/// address version bytes for Legacy PKH and SH addresses, and the bech32 human-readable
/// prefix for witness addresses.
pub trait NetworkParams {
    /// The BECH32 HRP. "bc" for mainnet.
    const HRP: &'static str;
    /// The Legacy PKH base58check version byte. 0x00 for mainnet.
    const PKH_VERSION: u8;
    /// The Legacy SH base58check version byte. 0x05 for mainnet.
    const SH_VERSION: u8;
}

/// A param struct for Bitcoin Mainnet
#[derive(Debug)]
pub struct Main;

impl NetworkParams for Main {
    const HRP: &'static str = "bc";
    const PKH_VERSION: u8 = 0x00;
    const SH_VERSION: u8 = 0x05;
}

/// A param struct for Bitcoin Testnet
#[derive(Debug)]
pub struct Test;

impl NetworkParams for Test {
    const HRP: &'static str = "tb";
    const PKH_VERSION: u8 = 0x6f;
    const SH_VERSION: u8 = 0xc4;
}

/// A param struct for Bitcoin Signet. Signet shares testnet's prefixes.
#[derive(Debug)]
pub struct Sig;

impl NetworkParams for Sig {
    const HRP: &'static str = "tb";
    const PKH_VERSION: u8 = 0x6f;
    const SH_VERSION: u8 = 0xc4;
}

/// A param struct for Bitcoin Regtest
#[derive(Debug)]
pub struct Regtest;

impl NetworkParams for Regtest {
    const HRP: &'static str = "bcrt";
    const PKH_VERSION: u8 = 0x6f;
    const SH_VERSION: u8 = 0xc4;
}

/// One `(version byte, kind)` entry of the legacy prefix table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegacyPrefix {
    /// The Base58Check version byte
    pub version: u8,
    /// What the version byte marks
    pub kind: LegacyKind,
}

/// The prefixes accepted by the decoders. Defaults to Bitcoin mainnet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    hrps: Vec<String>,
    legacy: Vec<LegacyPrefix>,
}

impl Default for Network {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl Network {
    /// A table that accepts nothing.
    pub fn empty() -> Self {
        Self {
            hrps: vec![],
            legacy: vec![],
        }
    }

    /// Build a table from a `NetworkParams` struct.
    pub fn from_params<P: NetworkParams>() -> Self {
        Self::empty()
            .with_hrp(P::HRP)
            .with_legacy_prefix(P::PKH_VERSION, LegacyKind::PubkeyHash)
            .with_legacy_prefix(P::SH_VERSION, LegacyKind::ScriptHash)
    }

    /// Bitcoin mainnet: `bc`, `0x00`, `0x05`.
    pub fn mainnet() -> Self {
        Self::from_params::<Main>()
    }

    /// Bitcoin testnet: `tb`, `0x6f`, `0xc4`.
    pub fn testnet() -> Self {
        Self::from_params::<Test>()
    }

    /// Bitcoin signet. Same prefixes as testnet.
    pub fn signet() -> Self {
        Self::from_params::<Sig>()
    }

    /// Bitcoin regtest: `bcrt`, `0x6f`, `0xc4`.
    pub fn regtest() -> Self {
        Self::from_params::<Regtest>()
    }

    /// Accept a bech32 human-readable part. Stored lowercased.
    pub fn with_hrp(mut self, hrp: &str) -> Self {
        let hrp = hrp.to_ascii_lowercase();
        if !self.hrps.contains(&hrp) {
            self.hrps.push(hrp);
        }
        self
    }

    /// Map a Base58Check version byte to a legacy kind. A later mapping for the same
    /// version byte replaces the earlier one.
    pub fn with_legacy_prefix(mut self, version: u8, kind: LegacyKind) -> Self {
        self.legacy.retain(|p| p.version != version);
        self.legacy.push(LegacyPrefix { version, kind });
        self
    }

    /// Accept everything `other` accepts as well.
    pub fn merge(self, other: Network) -> Self {
        let with_hrps = other.hrps.iter().fold(self, |net, hrp| net.with_hrp(hrp));
        other
            .legacy
            .iter()
            .fold(with_hrps, |net, p| net.with_legacy_prefix(p.version, p.kind))
    }

    /// The legacy kind for a version byte, if configured.
    pub fn legacy_kind(&self, version: u8) -> Option<LegacyKind> {
        self.legacy
            .iter()
            .find(|p| p.version == version)
            .map(|p| p.kind)
    }

    /// True if `hrp` is configured. Case-insensitive.
    pub fn has_hrp(&self, hrp: &str) -> bool {
        self.hrps.iter().any(|h| h.eq_ignore_ascii_case(hrp))
    }

    /// The configured human-readable parts.
    pub fn hrps(&self) -> impl Iterator<Item = &str> {
        self.hrps.iter().map(String::as_str)
    }

    /// The configured legacy prefixes.
    pub fn legacy_prefixes(&self) -> &[LegacyPrefix] {
        &self.legacy
    }
}

//! Maps decoded payloads to address types.

use crate::{
    enc::segwit::WPKH_PROGRAM_LENGTH,
    types::{AddressType, DecodedPayload, Encoding, LegacyKind},
};

/// Classify a decoded payload. Total over decoder output: the decoders have already
/// rejected unknown version bytes, unsupported witness versions and bad program lengths.
pub fn classify(payload: &DecodedPayload) -> AddressType {
    match payload.encoding {
        Encoding::Base58Check(LegacyKind::PubkeyHash) => AddressType::P2PKH,
        Encoding::Base58Check(LegacyKind::ScriptHash) => AddressType::P2SH,
        Encoding::Bech32 if payload.program.len() == WPKH_PROGRAM_LENGTH => AddressType::P2WPKH,
        Encoding::Bech32 => AddressType::P2WSH,
        Encoding::Bech32m => AddressType::P2TR,
    }
}

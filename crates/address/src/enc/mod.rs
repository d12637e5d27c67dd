//! Address decoders. Each turns a string into a `DecodedPayload` or a `DecodeError`, and
//! exposes the raw codec beneath it for round-tripping.

pub mod base58;
pub mod segwit;

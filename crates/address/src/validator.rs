//! The validation entry point.
//!
//! Validation is a two-step pipeline: decode with Base58Check, falling back to
//! Bech32/Bech32m, then test the classified type against the allowed set. Decoding errors
//! are logged and collapse to `false`.

use std::{collections::BTreeSet, fmt};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    classify::classify,
    enc::{base58, segwit},
    nets::Network,
    types::{AddressType, DecodedPayload},
    DecodeResult,
};

/// A set of requested address types, with aliases expanded for containment checks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AddressType>", into = "Vec<AddressType>")]
pub struct AllowedTypes {
    requested: BTreeSet<AddressType>,
    accepted: BTreeSet<AddressType>,
}

impl AllowedTypes {
    /// Build from any collection of requested types. Order and duplicates are irrelevant.
    pub fn new<I>(types: I) -> Self
    where
        I: IntoIterator<Item = AddressType>,
    {
        let requested: BTreeSet<AddressType> = types.into_iter().collect();
        let accepted = requested
            .iter()
            .flat_map(|t| t.expand().iter().copied())
            .collect();
        Self {
            requested,
            accepted,
        }
    }

    /// True if an address classified as `classified` satisfies this set.
    pub fn contains(&self, classified: AddressType) -> bool {
        self.accepted.contains(&classified)
    }

    /// True if nothing was requested. An empty set matches no address.
    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }

    /// The types as requested, before alias expansion.
    pub fn requested(&self) -> impl Iterator<Item = AddressType> + '_ {
        self.requested.iter().copied()
    }

    /// Comma-separated descriptions of the requested types, for violation messages.
    pub fn descriptions(&self) -> String {
        self.requested
            .iter()
            .map(AddressType::description)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<AddressType> for AllowedTypes {
    fn from_iter<I: IntoIterator<Item = AddressType>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<AddressType>> for AllowedTypes {
    fn from(types: Vec<AddressType>) -> Self {
        Self::new(types)
    }
}

impl From<AllowedTypes> for Vec<AddressType> {
    fn from(types: AllowedTypes) -> Self {
        types.requested.into_iter().collect()
    }
}

impl fmt::Display for AllowedTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.requested.iter().map(ToString::to_string).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Decode with Base58Check, then Bech32/Bech32m. When both fail, the error reported is
/// the segwit one if the candidate carries a configured HRP, and the legacy one otherwise.
fn decode(candidate: &str, network: &Network) -> DecodeResult<DecodedPayload> {
    let legacy = match base58::decode(candidate, network) {
        Ok(payload) => return Ok(payload),
        Err(e) => e,
    };
    trace!("{:?} is not a legacy address: {}", candidate, legacy);

    segwit::decode(candidate, network).map_err(|e| {
        trace!("{:?} is not a segwit address: {}", candidate, e);
        let has_network_hrp =
            segwit::split_hrp(candidate).map_or(false, |hrp| network.has_hrp(hrp));
        if has_network_hrp {
            e
        } else {
            legacy
        }
    })
}

fn check(candidate: Option<&str>, allowed: &AllowedTypes, network: &Network) -> bool {
    // Absence is a not-null constraint's concern
    let candidate = match candidate {
        Some(candidate) => candidate,
        None => return true,
    };

    match decode(candidate, network).map(|payload| classify(&payload)) {
        Ok(classified) if allowed.contains(classified) => {
            trace!("{:?} is a valid {} address", candidate, classified);
            true
        }
        Ok(classified) => {
            debug!(
                "Rejecting {:?}: {} address, expected one of {}",
                candidate, classified, allowed
            );
            false
        }
        Err(e) => {
            debug!("Rejecting {:?}: {}", candidate, e);
            false
        }
    }
}

/// Validates candidates against a fixed set of allowed types. Build once, query many
/// times; the validator is immutable and can be shared across threads.
///
/// ```
/// use coins_address::{AddressType, AddressValidator, Network};
///
/// let validator = AddressValidator::new([AddressType::P2PKH, AddressType::P2TR])
///     .with_network(Network::mainnet().merge(Network::testnet()));
///
/// assert!(validator.is_valid(Some("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2")));
/// assert!(validator.is_valid(Some("mrS8eVKXguwufwvsVe9GtgGb7fif9UQeAu")));
/// assert!(!validator.is_valid(Some("342ftSRCvFHfCeFFBuz4xwbeqnDw6BGUey")));
/// assert!(validator.is_valid(None));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressValidator {
    allowed: AllowedTypes,
    #[serde(default)]
    network: Network,
}

impl AddressValidator {
    /// A mainnet validator accepting the given types.
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator<Item = AddressType>,
    {
        Self {
            allowed: AllowedTypes::new(allowed),
            network: Network::default(),
        }
    }

    /// Replace the network prefix table.
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// The allowed types.
    pub fn allowed(&self) -> &AllowedTypes {
        &self.allowed
    }

    /// The network prefix table.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Decode a candidate without checking the allowed types.
    pub fn decode(&self, candidate: &str) -> DecodeResult<DecodedPayload> {
        decode(candidate, &self.network)
    }

    /// Decode and classify a candidate without checking the allowed types.
    pub fn classify(&self, candidate: &str) -> DecodeResult<AddressType> {
        self.decode(candidate).map(|payload| classify(&payload))
    }

    /// True if the candidate is absent, or decodes to one of the allowed types.
    pub fn is_valid(&self, candidate: Option<&str>) -> bool {
        check(candidate, &self.allowed, &self.network)
    }
}

/// A single `(candidate, allowed types)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationRequest<'a> {
    candidate: Option<&'a str>,
    allowed: AllowedTypes,
}

impl<'a> ValidationRequest<'a> {
    /// Pair a candidate with the types it may be.
    pub fn new<I>(candidate: Option<&'a str>, allowed: I) -> Self
    where
        I: IntoIterator<Item = AddressType>,
    {
        Self {
            candidate,
            allowed: AllowedTypes::new(allowed),
        }
    }

    /// The candidate string.
    pub fn candidate(&self) -> Option<&'a str> {
        self.candidate
    }

    /// The allowed types.
    pub fn allowed(&self) -> &AllowedTypes {
        &self.allowed
    }

    /// Validate against mainnet prefixes.
    pub fn is_valid(&self) -> bool {
        self.is_valid_on(&Network::mainnet())
    }

    /// Validate against the given prefix table.
    pub fn is_valid_on(&self, network: &Network) -> bool {
        check(self.candidate, &self.allowed, network)
    }
}

/// Validate a candidate against mainnet prefixes.
///
/// ```
/// use coins_address::{is_valid, AddressType};
///
/// let taproot = "bc1p5d7rjq7g6rdk2yhzks9smlaqtedr4dekq08ge8ztwac72sfr9rusxg3297";
/// assert!(is_valid(Some(taproot), [AddressType::ANY]));
/// assert!(!is_valid(Some(taproot), [AddressType::BECH32]));
/// ```
pub fn is_valid<I>(candidate: Option<&str>, allowed: I) -> bool
where
    I: IntoIterator<Item = AddressType>,
{
    ValidationRequest::new(candidate, allowed).is_valid()
}

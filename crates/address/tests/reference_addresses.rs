use coins_address::{is_valid, AddressType, AddressType::*, AddressValidator, ValidationRequest};

const P2PKH_ADDR: &str = "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2";
const P2SH_ADDR: &str = "342ftSRCvFHfCeFFBuz4xwbeqnDw6BGUey";
const BECH32_ADDR: &str = "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq";
const P2WSH_ADDR: &str = "bc1qeklep85ntjz4605drds6aww9u0qr46qzrv5xswd35uhjuj8ahfcqgf6hak";
const P2WPKH_ADDR: &str = "bc1q34aq5drpuwy3wgl9lhup9892qp6svr8ldzyy7c";
const P2TR_ADDR: &str = "bc1p5d7rjq7g6rdk2yhzks9smlaqtedr4dekq08ge8ztwac72sfr9rusxg3297";

/// Each requestable type, paired with an address that satisfies it.
const SINGLE: [(AddressType, &str); 6] = [
    (P2PKH, P2PKH_ADDR),
    (P2SH, P2SH_ADDR),
    (BECH32, BECH32_ADDR),
    (P2WSH, P2WSH_ADDR),
    (P2WPKH, P2WPKH_ADDR),
    (P2TR, P2TR_ADDR),
];

const ALL: [&str; 6] = [
    P2PKH_ADDR,
    P2SH_ADDR,
    BECH32_ADDR,
    P2WSH_ADDR,
    P2WPKH_ADDR,
    P2TR_ADDR,
];

#[test]
fn it_accepts_every_reference_address_as_any() {
    for addr in ALL.iter() {
        assert!(
            is_valid(Some(*addr), [ANY]),
            "should be a valid {} address. Tested value: {}",
            ANY.description(),
            addr
        );
    }
}

#[test]
fn it_accepts_every_reference_address_as_its_type() {
    for (t, addr) in SINGLE.iter() {
        assert!(
            is_valid(Some(*addr), [*t]),
            "should be a valid {} address. Tested value: {}",
            t.description(),
            addr
        );
    }
}

#[test]
fn it_classifies_every_reference_address() {
    let validator = AddressValidator::new([ANY]);
    let expected = [P2PKH, P2SH, P2WPKH, P2WSH, P2WPKH, P2TR];
    for (addr, t) in ALL.iter().zip(expected.iter()) {
        assert_eq!(validator.classify(addr), Ok(*t));
    }
}

#[test]
fn it_accepts_pairs_in_either_order() {
    for (first, addr) in SINGLE.iter() {
        for (second, _) in SINGLE.iter().filter(|(t, _)| t != first) {
            let types = [*first, *second];
            let descriptions = types
                .iter()
                .map(AddressType::description)
                .collect::<Vec<_>>()
                .join(",");
            assert!(
                is_valid(Some(*addr), types),
                "should be a valid {} address. Tested value: {}",
                descriptions,
                addr
            );
            assert!(ValidationRequest::new(Some(*addr), [*second, *first]).is_valid());
        }
    }
}

#[test]
fn it_rejects_types_that_dont_match() {
    let validator = AddressValidator::new([BECH32]);
    assert!(validator.is_valid(Some(P2WPKH_ADDR)));
    assert!(validator.is_valid(Some(P2WSH_ADDR)));
    assert!(!validator.is_valid(Some(P2TR_ADDR)));

    assert!(!is_valid(Some(P2PKH_ADDR), [P2SH]));
    assert!(!is_valid(Some(P2SH_ADDR), [P2PKH]));
    assert!(!is_valid(Some(P2WSH_ADDR), [P2WPKH]));
    assert!(!is_valid(Some(P2WPKH_ADDR), [P2WSH, P2TR]));
    assert!(!is_valid(Some(P2TR_ADDR), [P2PKH, P2SH, BECH32, P2WPKH, P2WSH]));
}

#[test]
fn it_accepts_uppercase_segwit_and_rejects_mixed_case() {
    for addr in [BECH32_ADDR, P2WSH_ADDR, P2WPKH_ADDR, P2TR_ADDR].iter() {
        assert!(is_valid(Some(addr.to_uppercase().as_str()), [ANY]));

        let mut mixed = addr.to_string();
        mixed.replace_range(0..1, "B");
        assert!(!is_valid(Some(mixed.as_str()), [ANY]), "{}", mixed);
    }
}

#[test]
fn it_rejects_every_single_character_substitution() {
    let validator = AddressValidator::new([ANY]);
    let replacements: Vec<char> = ('0'..='9').chain('a'..='z').chain('A'..='Z').collect();

    for addr in ALL.iter() {
        for (idx, original) in addr.char_indices() {
            for c in replacements.iter().filter(|c| **c != original) {
                let mut mutated = addr.to_string();
                mutated.replace_range(idx..idx + 1, &c.to_string());
                assert!(
                    !validator.is_valid(Some(mutated.as_str())),
                    "mutation {} of {} should be invalid",
                    mutated,
                    addr
                );
            }
        }
    }
}

#[test]
fn it_rejects_non_ascii_substitutions() {
    let validator = AddressValidator::new([ANY]);
    // case-folding look-alikes, accented letters, digits and whitespace outside ASCII
    let replacements = [
        '\u{212A}', '\u{17F}', '\u{130}', '\u{131}', 'é', 'ß', '\u{FF11}', '\u{A0}',
    ];

    for addr in [BECH32_ADDR, P2WSH_ADDR, P2WPKH_ADDR, P2TR_ADDR].iter() {
        for form in [addr.to_string(), addr.to_uppercase()].iter() {
            for idx in 0..form.len() {
                for c in replacements.iter() {
                    let mut mutated = form.clone();
                    mutated.replace_range(idx..idx + 1, &c.to_string());
                    assert!(
                        !validator.is_valid(Some(mutated.as_str())),
                        "mutation {} of {} should be invalid",
                        mutated,
                        form
                    );
                }
            }
        }
    }

    for addr in [P2PKH_ADDR, P2SH_ADDR].iter() {
        for idx in 0..addr.len() {
            for c in replacements.iter() {
                let mut mutated = addr.to_string();
                mutated.replace_range(idx..idx + 1, &c.to_string());
                assert!(!validator.is_valid(Some(mutated.as_str())), "{}", mutated);
            }
        }
    }
}

#[test]
fn it_is_idempotent() {
    let validator = AddressValidator::new([P2WSH, P2PKH]);
    for addr in ALL.iter() {
        let first = validator.is_valid(Some(*addr));
        for _ in 0..3 {
            assert_eq!(validator.is_valid(Some(*addr)), first);
        }
    }
}

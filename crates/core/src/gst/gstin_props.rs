//! Property-based tests for GSTIN parsing and checksum verification.

use proptest::prelude::*;

use super::gstin::{checksum_char, Gstin, GstinParseError};

/// Strategy to generate a structurally valid GSTIN with a correct
/// check character.
fn valid_gstin() -> impl Strategy<Value = String> {
    let state = prop_oneof![1u8..=38u8, Just(97u8), Just(99u8)];
    (state, "[A-Z]{5}", "[0-9]{4}", "[A-Z]", "[1-9A-Z]").prop_map(
        |(state, surname, serial, holder, entity)| {
            let mut gstin = format!("{state:02}{surname}{serial}{holder}{entity}Z");
            let check = checksum_char(gstin.as_bytes());
            gstin.push(check);
            gstin
        },
    )
}

/// Strategy to generate one character from the GSTIN alphabet.
fn charset_char() -> impl Strategy<Value = char> {
    prop_oneof![
        (0u32..10).prop_map(|d| char::from_digit(d, 10).unwrap()),
        (0u8..26).prop_map(|i| (b'A' + i) as char),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* well-formed GSTIN, parsing succeeds and the embedded
    /// state code survives the round trip.
    #[test]
    fn prop_valid_gstin_parses(gstin in valid_gstin()) {
        let parsed = Gstin::parse(&gstin).unwrap();
        prop_assert_eq!(parsed.as_str(), gstin.as_str());

        let state: u8 = gstin[..2].parse().unwrap();
        prop_assert_eq!(parsed.state_code().value(), state);
    }

    /// *For any* well-formed GSTIN, changing a single character to any
    /// other charset character makes parsing fail. Either a structural
    /// rule breaks or the mod-36 checksum no longer matches.
    #[test]
    fn prop_single_char_mutation_is_rejected(
        gstin in valid_gstin(),
        position in 0usize..15,
        replacement in charset_char(),
    ) {
        let original = gstin.as_bytes()[position] as char;
        prop_assume!(replacement != original);

        let mut mutated = gstin.into_bytes();
        mutated[position] = replacement as u8;
        let mutated = String::from_utf8(mutated).unwrap();

        prop_assert!(Gstin::parse(&mutated).is_err());
    }

    /// *For any* truncation of a valid GSTIN, parsing reports the
    /// observed length.
    #[test]
    fn prop_truncation_is_rejected(gstin in valid_gstin(), cut in 0usize..15) {
        let result = Gstin::parse(&gstin[..cut]);
        prop_assert_eq!(result, Err(GstinParseError::InvalidLength { length: cut }));
    }

    /// *For any* valid GSTIN with a character appended, parsing rejects
    /// the oversized input.
    #[test]
    fn prop_extension_is_rejected(gstin in valid_gstin(), extra in charset_char()) {
        let mut extended = gstin;
        extended.push(extra);
        prop_assert_eq!(
            Gstin::parse(&extended),
            Err(GstinParseError::InvalidLength { length: 16 })
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Specific example: transposing two PAN characters breaks the
    /// checksum even though every position class still holds.
    #[test]
    fn test_transposition_is_caught() {
        assert!(Gstin::parse("27AAPFU0939F1ZV").is_ok());
        assert!(matches!(
            Gstin::parse("27APAFU0939F1ZV"),
            Err(GstinParseError::ChecksumMismatch { .. })
        ));
    }
}

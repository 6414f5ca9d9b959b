use mkpw::{
    AdjacencyTable, CharClass, ConfigError, GenerateError, GenerationConfig, Keystream, generate,
};
use proptest::prelude::*;

// --- STRATEGIES ---

// Configurations whose quotas always fit in the requested length.
prop_compose! {
    fn arb_valid_config()(
        length in 1usize..40,
        use_digit in any::<bool>(),
        use_punct in any::<bool>(),
        strict in any::<bool>(),
        digit_share in 0.0..1.0f64,
        punct_share in 0.0..1.0f64,
    ) -> GenerationConfig {
        let digit_num = (length as f64 * digit_share) as usize;
        let punct_num = ((length - digit_num) as f64 * punct_share) as usize;
        GenerationConfig {
            length,
            use_digit,
            use_alpha: true,
            use_punct,
            strict,
            digit_num,
            punct_num,
        }
    }
}

fn count(password: &str, class: CharClass) -> usize {
    password
        .chars()
        .filter(|&c| CharClass::of(c) == Some(class))
        .count()
}

proptest! {
    #[test]
    fn output_has_requested_length(cfg in arb_valid_config(), seed in any::<u64>()) {
        let table = AdjacencyTable::qwerty();
        let password = generate(&cfg, &table, &mut Keystream::from_seed(seed)).unwrap();
        prop_assert_eq!(password.chars().count(), cfg.length);
    }

    #[test]
    fn class_counts_match_quotas(cfg in arb_valid_config(), seed in any::<u64>()) {
        let table = AdjacencyTable::qwerty();
        let password = generate(&cfg, &table, &mut Keystream::from_seed(seed)).unwrap();
        let effective = cfg.effective();

        let digits = if effective.use_digit { cfg.digit_num } else { 0 };
        let punct = if effective.use_punct { cfg.punct_num } else { 0 };

        prop_assert_eq!(count(&password, CharClass::Digit), digits);
        prop_assert_eq!(count(&password, CharClass::Punct), punct);
        prop_assert_eq!(count(&password, CharClass::Letter), cfg.length - digits - punct);
    }

    #[test]
    fn no_consecutive_pair_is_adjacent(cfg in arb_valid_config(), seed in any::<u64>()) {
        let table = AdjacencyTable::qwerty();
        let password = generate(&cfg, &table, &mut Keystream::from_seed(seed)).unwrap();
        let chars: Vec<char> = password.chars().collect();
        for pair in chars.windows(2) {
            prop_assert!(!table.is_illegal_next(pair[0], pair[1]), "{:?} in {}", pair, password.as_str());
        }
    }

    #[test]
    fn too_many_digits_is_rejected(length in 0usize..30, extra in 1usize..10) {
        let cfg = GenerationConfig {
            length,
            digit_num: length + extra,
            ..Default::default()
        };
        let err = generate(&cfg, &AdjacencyTable::qwerty(), &mut Keystream::from_seed(0)).unwrap_err();
        prop_assert_eq!(
            err,
            GenerateError::Config(ConfigError::LengthBelowDigits { length, digits: length + extra })
        );
    }

    #[test]
    fn too_many_punct_is_rejected(length in 0usize..30, extra in 1usize..10) {
        let cfg = GenerationConfig {
            length,
            use_punct: true,
            digit_num: 0,
            punct_num: length + extra,
            ..Default::default()
        };
        let err = generate(&cfg, &AdjacencyTable::qwerty(), &mut Keystream::from_seed(0)).unwrap_err();
        prop_assert_eq!(
            err,
            GenerateError::Config(ConfigError::LengthBelowPunct { length, punct: length + extra })
        );
    }

    #[test]
    fn digits_plus_punct_over_length_is_rejected(
        length in 2usize..30,
        digit_share in 0.0..1.0f64,
        extra in 1usize..10,
    ) {
        let digit_num = (length as f64 * digit_share) as usize;
        let residual = length - digit_num;
        let punct_num = residual + extra;
        prop_assume!(punct_num <= length);

        let cfg = GenerationConfig {
            length,
            use_punct: true,
            digit_num,
            punct_num,
            ..Default::default()
        };
        let err = generate(&cfg, &AdjacencyTable::qwerty(), &mut Keystream::from_seed(0)).unwrap_err();
        prop_assert!(
            matches!(err, GenerateError::Config(ConfigError::ResidualBelowPunct { .. })),
            "unexpected error: {:?}",
            err
        );
    }
}

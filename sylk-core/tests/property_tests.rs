//! Property tests for syllabification invariants

use proptest::prelude::*;
use sylk_core::{destress, inventory, syllabify, syllabify_with, Syllable, SyllabifierConfig};

/// A mix of inventory vowels, inventory consonants, and one symbol the
/// tables do not know about.
const ALPHABET: &[&str] = &[
    "ə", "ˈæ", "ˌɪ", "ˈuː", "aɪ", "ɚ", "əl", "iə", "ˈɑː", "p", "t", "k", "b", "d", "ɡ", "s",
    "z", "f", "l", "m", "n", "ɹ", "j", "w", "h", "dʒ", "θ", "ʔ",
];

fn pron_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(ALPHABET.to_vec()).prop_map(str::to_owned),
        0..12,
    )
}

proptest! {
    #[test]
    fn conservation_holds(pron in pron_strategy()) {
        let syls = syllabify(&pron).unwrap();
        let flat: Vec<String> = syls
            .iter()
            .flat_map(Syllable::segments)
            .map(str::to_owned)
            .collect();
        prop_assert_eq!(flat, pron);
    }

    #[test]
    fn conservation_holds_without_alaska_rule(pron in pron_strategy()) {
        let config = SyllabifierConfig { alaska_rule: false };
        let syls = syllabify_with(&pron, config).unwrap();
        let flat: Vec<String> = syls
            .iter()
            .flat_map(Syllable::segments)
            .map(str::to_owned)
            .collect();
        prop_assert_eq!(flat, pron);
    }

    #[test]
    fn syllable_count_follows_vowel_count(pron in pron_strategy()) {
        let syls = syllabify(&pron).unwrap();
        let vowels = pron.iter().filter(|s| inventory().is_vowel(s)).count();
        if vowels == 0 {
            // Degenerate single syllable with an empty nucleus
            prop_assert_eq!(syls.len(), 1);
            prop_assert!(syls[0].nucleus.is_empty());
        } else {
            prop_assert_eq!(syls.len(), vowels);
        }
    }

    #[test]
    fn destress_is_idempotent(pron in pron_strategy()) {
        let syls = syllabify(&pron).unwrap();
        let once = destress(&syls);
        let twice = destress(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn nuclei_stay_within_reattachment_bounds(pron in pron_strategy()) {
        let syls = syllabify(&pron).unwrap();
        for syl in &syls {
            // One vowel, plus at most one absorbed rhotic and one glide
            prop_assert!(syl.nucleus.len() <= 3);
        }
    }
}

//! Phoneme inventory tables with O(1) lookup
//!
//! Membership in these tables is the sole source of phonotactic knowledge
//! used during boundary resolution. Symbols are compared by exact value,
//! so stress-marked vowels are listed as their own entries.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Primary stress marker, fused to the leading character of a vowel symbol.
pub const PRIMARY_STRESS: char = 'ˈ';
/// Secondary stress marker, fused to the leading character of a vowel symbol.
pub const SECONDARY_STRESS: char = 'ˌ';

/// Lax (short/checked) stressed vowels. Only consulted by the ambiguous-"s"
/// rule; every entry is also a vowel.
const LAX_VOWELS: &[&str] = &["ˈɪ", "ˌɪ", "ˈɛ", "ˌɛ", "ˈæ", "ˌæ", "ˈʌ", "ˌʌ", "ˈʊ", "ˌʊ"];

/// Vowel symbols as emitted by eSpeak `--ipa=3`, beyond the lax set:
/// long vowels and diphthongs in stressed/secondary/unstressed form, bare
/// short vowels, and rhotic vowels (units in eSpeak output, so they are
/// nuclei here rather than vowel + coda `ɹ`).
const VOWELS: &[&str] = &[
    "ˈiː", "ˌiː", "iː", "ˈeɪ", "ˌeɪ", "eɪ", "ˈɑː", "ˌɑː", "ɑː", "ˈɜː", "ˌɜː", "ɜː", "ˈaʊ",
    "ˌaʊ", "aʊ", "ˈɔː", "ˌɔː", "ɔː", "ˈaɪ", "ˌaɪ", "aɪ", "ˈoʊ", "ˌoʊ", "oʊ", "ˈɔɪ", "ˌɔɪ",
    "ɔɪ", "ˈuː", "ˌuː", "uː", "i", "ɪ", "ɛ", "æ", "ʌ", "ə", "ʊ", "ɐ", "ˈaɪə", "ˈaɪʊɹ",
    "ˈɑːɹ", "ɚ", "ˈɛɹ", "ˈɪɹ", "ˈʊɹ", "ˈɔːɹ", "ˈoːɹ", "əl", "ˈoː", "iə",
];

/// Licit two-consonant medial onsets. Not a complete onset inventory of
/// English, merely the clusters that must be maximized in medial position.
/// `ɡ` is U+0261 throughout, matching eSpeak output.
const ONSET_PAIRS: &[(&str, &str)] = &[
    ("p", "ɹ"),
    ("t", "ɹ"),
    ("k", "ɹ"),
    ("b", "ɹ"),
    ("d", "ɹ"),
    ("ɡ", "ɹ"),
    ("f", "ɹ"),
    ("θ", "ɹ"),
    ("p", "l"),
    ("k", "l"),
    ("b", "l"),
    ("ɡ", "l"),
    ("f", "l"),
    ("s", "l"),
    ("k", "w"),
    ("ɡ", "w"),
    ("s", "w"),
    ("s", "p"),
    ("s", "t"),
    ("s", "k"),
    ("h", "j"), // "clerihew"
    ("ɹ", "w"),
];

/// Licit three-consonant medial onsets. A triple only applies when its last
/// two elements already qualify as a licit pair.
const ONSET_TRIPLES: &[(&str, &str, &str)] = &[
    ("s", "t", "ɹ"),
    ("s", "k", "l"),
    ("t", "ɹ", "w"), // "octroi"
];

/// Fast phoneme classification table
#[derive(Debug, Clone)]
pub struct PhonemeInventory {
    vowels: HashSet<&'static str>,
    lax: HashSet<&'static str>,
    onset_pairs: HashSet<(&'static str, &'static str)>,
    onset_triples: HashSet<(&'static str, &'static str, &'static str)>,
}

impl PhonemeInventory {
    fn new() -> Self {
        let mut vowels: HashSet<&'static str> = VOWELS.iter().copied().collect();
        vowels.extend(LAX_VOWELS.iter().copied());

        Self {
            vowels,
            lax: LAX_VOWELS.iter().copied().collect(),
            onset_pairs: ONSET_PAIRS.iter().copied().collect(),
            onset_triples: ONSET_TRIPLES.iter().copied().collect(),
        }
    }

    /// Check whether a symbol is a syllable nucleus; everything else is
    /// treated as a consonant, including symbols outside the inventory.
    #[inline]
    pub fn is_vowel(&self, seg: &str) -> bool {
        self.vowels.contains(seg)
    }

    /// Check whether a symbol is a lax stressed vowel.
    #[inline]
    pub fn is_lax(&self, seg: &str) -> bool {
        self.lax.contains(seg)
    }

    /// Check whether two consonants form a licit medial onset.
    #[inline]
    pub fn is_onset_pair(&self, c1: &str, c2: &str) -> bool {
        self.onset_pairs.contains(&(c1, c2))
    }

    /// Check whether three consonants form a licit medial onset.
    #[inline]
    pub fn is_onset_triple(&self, c1: &str, c2: &str, c3: &str) -> bool {
        self.onset_triples.contains(&(c1, c2, c3))
    }
}

/// Shared inventory, built on first access and never modified.
pub fn inventory() -> &'static PhonemeInventory {
    static INVENTORY: OnceLock<PhonemeInventory> = OnceLock::new();
    INVENTORY.get_or_init(PhonemeInventory::new)
}

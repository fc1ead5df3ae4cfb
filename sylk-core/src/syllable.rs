//! Syllable records and the transforms that read them

use crate::inventory::{PRIMARY_STRESS, SECONDARY_STRESS};
use std::fmt;

/// One syllable of a word: onset consonants, the nucleus, coda consonants.
///
/// The nucleus holds a single vowel symbol, two when a glide or rhotic has
/// been reattached to it, and none in the degenerate case of a word without
/// any recognizable vowel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Syllable {
    /// Consonants before the nucleus
    pub onset: Vec<String>,
    /// The vowel at the core of the syllable, with any stress marker retained
    pub nucleus: Vec<String>,
    /// Consonants after the nucleus
    pub coda: Vec<String>,
}

impl Syllable {
    /// Create a syllable from its three segment groups
    pub fn new(onset: Vec<String>, nucleus: Vec<String>, coda: Vec<String>) -> Self {
        Self {
            onset,
            nucleus,
            coda,
        }
    }

    /// Iterate over all segments in onset, nucleus, coda order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.onset
            .iter()
            .chain(self.nucleus.iter())
            .chain(self.coda.iter())
            .map(String::as_str)
    }
}

impl fmt::Display for Syllable {
    /// Render as `onset-nucleus-coda`, segments within a group concatenated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.onset.concat(),
            self.nucleus.concat(),
            self.coda.concat()
        )
    }
}

/// Render a syllabification as a single display string, syllables joined
/// with `.` (e.g. `-ɐ-.l-ˈæ-s.k-ə-`). Diagnostic only.
pub fn pretty(syllables: &[Syllable]) -> String {
    syllables
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Return an equivalent syllabification with stress markers removed from
/// every nucleus symbol. Onsets and codas are untouched. Idempotent.
pub fn destress(syllables: &[Syllable]) -> Vec<Syllable> {
    syllables
        .iter()
        .map(|syl| Syllable {
            onset: syl.onset.clone(),
            nucleus: syl.nucleus.iter().map(|seg| strip_stress(seg)).collect(),
            coda: syl.coda.clone(),
        })
        .collect()
}

fn strip_stress(seg: &str) -> String {
    seg.strip_prefix(PRIMARY_STRESS)
        .or_else(|| seg.strip_prefix(SECONDARY_STRESS))
        .unwrap_or(seg)
        .to_owned()
}

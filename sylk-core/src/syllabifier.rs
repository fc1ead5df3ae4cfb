//! Boundary resolution for phoneme sequences
//!
//! A single left-to-right pass collects nuclei and the consonant runs
//! between them (interludes); each interlude is then split into the
//! preceding syllable's coda and the following syllable's onset. The split
//! applies the special boundary cases first and generic onset maximization
//! last: rhotic and glide reattachment change the nucleus that the
//! ambiguous-"s" rule inspects, and the "s" rule must claim its consonant
//! before maximization can treat it as part of a candidate cluster. That
//! order is a correctness invariant, not a style choice.

use crate::error::{Result, SyllabifyError};
use crate::inventory::{inventory, PhonemeInventory};
use crate::syllable::Syllable;
use smallvec::{smallvec, SmallVec};

/// The rhotic consonant absorbed into a preceding nucleus
const RHOTIC: &str = "ɹ";
/// The palatal glide reattached to a following nucleus
const GLIDE: &str = "j";
/// The sibilant claimed by the ambiguous-"s" rule
const SIBILANT: &str = "s";

/// Interludes and segment groups are short; keep them inline
type SegBuf = SmallVec<[String; 4]>;

/// Tunable behavior of the syllabifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllabifierConfig {
    /// Resolve stress-sensitive ambisyllabic "s" ("Alaska") by moving it
    /// into the coda after a lax stressed vowel. On by default; turn off to
    /// let onset maximization handle the cluster alone.
    pub alaska_rule: bool,
}

impl Default for SyllabifierConfig {
    fn default() -> Self {
        Self { alaska_rule: true }
    }
}

/// Assigns prosodic structure to one word's phoneme sequence
#[derive(Debug, Clone, Default)]
pub struct Syllabifier {
    config: SyllabifierConfig,
}

impl Syllabifier {
    /// Create a syllabifier with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a syllabifier with specific configuration
    pub fn with_config(config: SyllabifierConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &SyllabifierConfig {
        &self.config
    }

    /// Partition a phoneme sequence into syllables.
    ///
    /// Symbols outside the vowel inventory are treated as consonants; they
    /// are never rejected. A word without any recognizable vowel produces a
    /// single syllable with an empty nucleus and every symbol in the onset.
    ///
    /// # Errors
    ///
    /// [`SyllabifyError::Integrity`] if the produced syllables no longer
    /// flatten back to the input. This indicates a fault in boundary
    /// resolution itself and is kept as a detectable signal rather than
    /// being swallowed.
    pub fn syllabify<S: AsRef<str>>(&self, pron: &[S]) -> Result<Vec<Syllable>> {
        let segs: Vec<String> = pron.iter().map(|s| s.as_ref().to_owned()).collect();
        let inv = inventory();

        // Nucleus/interlude scan. onsets[i] starts out holding the whole
        // interlude before nucleus i; resolution trims it down to the true
        // onset.
        let mut nuclei: Vec<SegBuf> = Vec::new();
        let mut onsets: Vec<SegBuf> = Vec::new();
        let mut start = 0;
        for (j, seg) in segs.iter().enumerate() {
            if inv.is_vowel(seg) {
                onsets.push(segs[start..j].iter().cloned().collect());
                nuclei.push(smallvec![seg.clone()]);
                start = j + 1;
            }
        }
        let trailing: SegBuf = segs[start..].iter().cloned().collect();

        // No nucleus at all: one degenerate syllable, nothing to resolve.
        if nuclei.is_empty() {
            return Ok(vec![Syllable::new(segs, Vec::new(), Vec::new())]);
        }

        // Resolving interlude i yields the coda of syllable i - 1; the run
        // after the last nucleus closes the final syllable.
        let mut codas: Vec<SegBuf> = Vec::with_capacity(nuclei.len());
        for i in 1..nuclei.len() {
            let mut coda = SegBuf::new();
            let interlude = &mut onsets[i];

            // Rhotic absorption: a leading "ɹ" in a longer interlude joins
            // the previous nucleus as an r-colored diphthong.
            if interlude.len() > 1 && interlude[0] == RHOTIC {
                nuclei[i - 1].push(interlude.remove(0));
            }

            // Glide reattachment: a trailing "j" in an interlude of three or
            // more becomes part of the following nucleus ("rescue"), while a
            // shorter cluster keeps it as a plain onset ("canyon").
            if interlude.len() > 2 && interlude.last().is_some_and(|s| s.as_str() == GLIDE) {
                if let Some(glide) = interlude.pop() {
                    nuclei[i].insert(0, glide);
                }
            }

            // Ambiguous "s": after a lax stressed vowel it closes the
            // previous syllable instead of opening the next one.
            if self.config.alaska_rule
                && interlude.len() > 1
                && interlude[0] == SIBILANT
                && nuclei[i - 1].last().is_some_and(|v| inv.is_lax(v))
            {
                coda.push(interlude.remove(0));
            }

            // Onset maximization: keep the longest licit tail as the next
            // onset, everything before it goes to the coda.
            let depth = onset_depth(inv, interlude);
            while interlude.len() > depth {
                coda.push(interlude.remove(0));
            }

            codas.push(coda);
        }
        codas.push(trailing);

        let syllables: Vec<Syllable> = onsets
            .into_iter()
            .zip(nuclei)
            .zip(codas)
            .map(|((onset, nucleus), coda)| {
                Syllable::new(onset.into_vec(), nucleus.into_vec(), coda.into_vec())
            })
            .collect();

        // Every input segment must come back out, in order.
        let reconstructed: Vec<String> = syllables
            .iter()
            .flat_map(Syllable::segments)
            .map(str::to_owned)
            .collect();
        if reconstructed != segs {
            return Err(SyllabifyError::Integrity {
                input: segs,
                reconstructed,
            });
        }

        Ok(syllables)
    }
}

/// Maximal licit onset depth for the tail of a remaining interlude.
/// A triple only counts when its last two consonants already form a licit
/// pair, so the pair check gates the triple check.
fn onset_depth(inv: &PhonemeInventory, interlude: &[String]) -> usize {
    let n = interlude.len();
    if n > 1 && inv.is_onset_pair(&interlude[n - 2], &interlude[n - 1]) {
        if n > 2 && inv.is_onset_triple(&interlude[n - 3], &interlude[n - 2], &interlude[n - 1]) {
            3
        } else {
            2
        }
    } else {
        1
    }
}

/// Syllabify with default configuration
pub fn syllabify<S: AsRef<str>>(pron: &[S]) -> Result<Vec<Syllable>> {
    Syllabifier::new().syllabify(pron)
}

/// Syllabify with specific configuration
pub fn syllabify_with<S: AsRef<str>>(
    pron: &[S],
    config: SyllabifierConfig,
) -> Result<Vec<Syllable>> {
    Syllabifier::with_config(config).syllabify(pron)
}

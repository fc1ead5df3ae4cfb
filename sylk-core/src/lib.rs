//! Rule-based syllabification of IPA phoneme transcriptions
//!
//! Given one word as an ordered sequence of phoneme symbols (stress markers
//! fused onto vowel tokens, as eSpeak `--ipa=3` emits them), this crate
//! partitions the sequence into syllables of onset, nucleus, and coda.
//! Consonant clusters between vowels are split by onset maximization against
//! fixed cluster tables, after three special boundary cases have been
//! applied: rhotic absorption into the previous nucleus, glide reattachment
//! onto the following nucleus, and the stress-sensitive ambiguous-"s" rule.
//!
//! The computation is pure and synchronous; every call is independent and
//! callers may parallelize across words freely.
//!
//! # Example
//!
//! ```rust
//! use sylk_core::{pretty, syllabify};
//!
//! let pron = "ɐ_l_ˈæ_s_k_ə".split('_').collect::<Vec<_>>();
//! let syllables = syllabify(&pron).unwrap();
//!
//! assert_eq!(syllables.len(), 3);
//! assert_eq!(pretty(&syllables), "-ɐ-.l-ˈæ-s.k-ə-");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod inventory;
pub mod syllabifier;
pub mod syllable;

pub use error::{Result, SyllabifyError};
pub use inventory::{inventory, PhonemeInventory};
pub use syllabifier::{syllabify, syllabify_with, Syllabifier, SyllabifierConfig};
pub use syllable::{destress, pretty, Syllable};

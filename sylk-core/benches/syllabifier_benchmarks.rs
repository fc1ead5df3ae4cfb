//! Syllabifier benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use sylk_core::{destress, Syllabifier};

const WORDS: &[&str] = &[
    "ɐ_l_ˈæ_s_k_ə",
    "m_ˈɪ_n_s_t_ɹ_əl",
    "ɹ_ˈɛ_s_k_j_uː",
    "ɛ_k_s_k_l_ˈuː_d",
    "m_ˈɪ_l_ə_t_ˌɛ_ɹ_i",
    "n_ə_s_t_ˈæ_l_dʒ_ɪ_k",
];

fn bench_syllabify(c: &mut Criterion) {
    let syllabifier = Syllabifier::new();
    let prons: Vec<Vec<&str>> = WORDS.iter().map(|w| w.split('_').collect()).collect();

    c.bench_function("syllabify_word_batch", |b| {
        b.iter(|| {
            for pron in &prons {
                black_box(syllabifier.syllabify(black_box(pron)).unwrap());
            }
        })
    });
}

fn bench_destress(c: &mut Criterion) {
    let syllabifier = Syllabifier::new();
    let syllabified: Vec<_> = WORDS
        .iter()
        .map(|w| {
            let pron: Vec<&str> = w.split('_').collect();
            syllabifier.syllabify(&pron).unwrap()
        })
        .collect();

    c.bench_function("destress_word_batch", |b| {
        b.iter(|| {
            for syls in &syllabified {
                black_box(destress(black_box(syls)));
            }
        })
    });
}

criterion_group!(benches, bench_syllabify, bench_destress);
criterion_main!(benches);

//! Benchmark corpus generation.
//!
//! Every generator takes a seed so benchmark inputs are reproducible
//! across runs and machines.

use fastrand::Rng;

/// Nucleotide alphabet.
pub const DNA: &[u8] = b"ACGT";

const WORDS: &[&str] = &[
    "the", "of", "and", "search", "pattern", "text", "quick", "brown", "fox", "jumps", "over",
    "lazy", "dog", "shift", "table", "suffix", "prefix", "match", "window", "hash",
];

/// A named text and pattern pair.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Short identifier used as the benchmark id
    pub name: &'static str,
    /// Text to search
    pub text: Vec<u8>,
    /// Pattern to search for
    pub pattern: Vec<u8>,
}

/// `len` symbols drawn uniformly from `alphabet`.
pub fn random_text(len: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    if alphabet.is_empty() {
        return Vec::new();
    }
    let mut rng = Rng::with_seed(seed);
    (0..len)
        .map(|_| alphabet[rng.usize(..alphabet.len())])
        .collect()
}

/// Space-separated words of a small English-like vocabulary, cut to `len` bytes.
pub fn english_like(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = Rng::with_seed(seed);
    let mut text = Vec::with_capacity(len + 16);
    while text.len() < len {
        text.extend_from_slice(WORDS[rng.usize(..WORDS.len())].as_bytes());
        text.push(b' ');
    }
    text.truncate(len);
    text
}

/// Writes `pattern` over `text` at `count` random offsets.
pub fn plant(text: &mut [u8], pattern: &[u8], count: usize, seed: u64) {
    if pattern.is_empty() || pattern.len() > text.len() {
        return;
    }
    let mut rng = Rng::with_seed(seed);
    let last = text.len() - pattern.len();
    for _ in 0..count {
        let at = rng.usize(..=last);
        text[at..at + pattern.len()].copy_from_slice(pattern);
    }
}

/// The standard workloads: natural text, DNA, and the periodic worst case.
pub fn standard_workloads(text_len: usize, seed: u64) -> Vec<Workload> {
    let english_pattern = b"jumps over the lazy".to_vec();
    let mut english = english_like(text_len, seed);
    plant(&mut english, &english_pattern, 8, seed ^ 0x5eed);

    let dna_pattern = random_text(32, DNA, seed.wrapping_add(1));
    let mut dna = random_text(text_len, DNA, seed);
    plant(&mut dna, &dna_pattern, 8, seed ^ 0xd0a);

    let mut periodic_pattern = vec![b'a'; 63];
    periodic_pattern.push(b'b');

    vec![
        Workload {
            name: "english",
            text: english,
            pattern: english_pattern,
        },
        Workload {
            name: "dna",
            text: dna,
            pattern: dna_pattern,
        },
        Workload {
            name: "periodic",
            text: vec![b'a'; text_len],
            pattern: periodic_pattern,
        },
    ]
}

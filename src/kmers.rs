//! Distinct k-mer counting, and the per-k observed and possible tables.
//!
//! Index `i` of every table corresponds to `k = i + 1`. The empty sequence
//! has no valid `k` and yields empty tables.

use crate::error::{Error, Result};
use crate::util::text_symbols;
use clap::ValueEnum;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Occurrence count of every distinct k-mer, in order of first occurrence.
///
/// Keys borrow from the sequence and compare by exact symbol content.
pub type KmerCounts<'s, T = u8> = IndexMap<&'s [T], usize>;

/// The alphabet-size term of the possible-count bound `min(σ^k, n - k + 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// σ = 4, the nucleotide alphabet.
    #[default]
    Nucleotide,
    /// σ = the number of distinct symbols present in the sequence.
    Observed,
}

impl Alphabet {
    pub fn size<T: Hash + Eq>(self, seq: &[T]) -> usize {
        match self {
            Alphabet::Nucleotide => 4,
            Alphabet::Observed => seq.iter().unique().count(),
        }
    }
}

fn check_k<T>(seq: &[T], k: usize) -> Result<()> {
    if k == 0 || k > seq.len() {
        return Err(Error::InvalidArgument { k, len: seq.len() });
    }
    Ok(())
}

/// Count every k-mer of `seq`.
///
/// Fails with [`Error::InvalidArgument`] unless `1 <= k <= seq.len()`.
pub fn count_kmers<T: Hash + Eq>(seq: &[T], k: usize) -> Result<KmerCounts<'_, T>> {
    check_k(seq, k)?;
    Ok(kmer_counts(seq, k))
}

/// Number of distinct k-mers of `seq`; same preconditions as [`count_kmers`].
pub fn distinct_kmers<T: Hash + Eq>(seq: &[T], k: usize) -> Result<usize> {
    Ok(count_kmers(seq, k)?.len())
}

/// [`count_kmers`] over the characters of `text`, keyed by owned strings.
///
/// Each `char` is one symbol, so multi-byte characters are never split.
pub fn count_text_kmers(text: &str, k: usize) -> Result<IndexMap<String, usize>> {
    let symbols = text_symbols(text);
    let counts = count_kmers(&symbols, k)?;
    Ok(counts
        .into_iter()
        .map(|(kmer, c)| (kmer.iter().collect(), c))
        .collect())
}

fn kmer_counts<T: Hash + Eq>(seq: &[T], k: usize) -> KmerCounts<'_, T> {
    let mut counts = KmerCounts::with_capacity(seq.len() - k + 1);
    for kmer in seq.windows(k) {
        *counts.entry(kmer).or_insert(0) += 1;
    }
    counts
}

/// Distinct k-mer counts for every `k` in `1..=seq.len()`.
pub fn observed_kmers<T: Hash + Eq>(seq: &[T]) -> Vec<usize> {
    (1..=seq.len()).map(|k| kmer_counts(seq, k).len()).collect()
}

/// Upper bounds `min(σ^k, n - k + 1)` for every `k` in `1..=seq.len()`.
pub fn possible_kmers<T: Hash + Eq>(seq: &[T], alphabet: Alphabet) -> Vec<usize> {
    let n = seq.len();
    let sigma = alphabet.size(seq);
    (1..=n).map(|k| max_kmers(n, k, sigma)).collect()
}

/// `min(sigma^k, n - k + 1)` for `1 <= k <= n`.
///
/// A power that overflows `usize` exceeds every window count, so it resolves
/// to the window count.
fn max_kmers(n: usize, k: usize, sigma: usize) -> usize {
    let windows = n - k + 1;
    u32::try_from(k)
        .ok()
        .and_then(|k| sigma.checked_pow(k))
        .map_or(windows, |bound| bound.min(windows))
}

/// K-mers whose occurrence count lies in `[2^log2, 2^(log2+1))`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpectrumBucket {
    pub log2: u32,
    /// Distinct k-mers in the bucket.
    pub kmers: usize,
    /// Total occurrences of those k-mers.
    pub occurrences: usize,
}

/// Histogram of k-mer multiplicities on a log2 scale.
///
/// Buckets run from `log2 = 0` up to the bucket of the most frequent k-mer,
/// including empty buckets in between.
pub fn frequency_spectrum<T>(counts: &KmerCounts<T>) -> Vec<SpectrumBucket> {
    let Some(&max) = counts.values().max() else {
        return vec![];
    };
    let mut buckets = (0..=max.ilog2())
        .map(|log2| SpectrumBucket {
            log2,
            ..Default::default()
        })
        .collect_vec();
    for &c in counts.values() {
        let bucket = &mut buckets[c.ilog2() as usize];
        bucket.kmers += 1;
        bucket.occurrences += c;
    }
    buckets
}

//! Aggregation of the observed and possible tables into a [`StatsTable`] and
//! the linguistic complexity `sum(observed) / sum(possible)`.

use crate::error::{Error, Result};
use crate::kmers::{observed_kmers, possible_kmers, Alphabet};
use crate::util::time;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash};

/// One row of the statistics table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KmerStats {
    pub k: usize,
    pub observed_kmers: usize,
    pub possible_kmers: usize,
}

impl KmerStats {
    /// `observed_kmers / possible_kmers`.
    pub fn proportion(&self) -> f64 {
        self.observed_kmers as f64 / self.possible_kmers as f64
    }
}

/// Rows `(k, observed_kmers, possible_kmers)` for `k = 1..=n`, by increasing `k`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsTable {
    rows: Vec<KmerStats>,
}

impl StatsTable {
    /// Zip per-k tables, where index `i` holds the value for `k = i + 1`.
    pub fn from_counts(observed: Vec<usize>, possible: Vec<usize>) -> Self {
        debug_assert_eq!(observed.len(), possible.len());
        let rows = observed
            .into_iter()
            .zip(possible)
            .enumerate()
            .map(|(i, (observed_kmers, possible_kmers))| KmerStats {
                k: i + 1,
                observed_kmers,
                possible_kmers,
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[KmerStats] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KmerStats> {
        self.rows.iter()
    }

    /// The first `rows` rows (fewer if the table is shorter).
    pub fn head(&self, rows: usize) -> &[KmerStats] {
        &self.rows[..rows.min(self.rows.len())]
    }

    /// Copy of the first `rows` rows.
    pub fn head_table(&self, rows: usize) -> StatsTable {
        Self {
            rows: self.head(rows).to_vec(),
        }
    }

    pub fn observed_kmers(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.observed_kmers).collect()
    }

    pub fn possible_kmers(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.possible_kmers).collect()
    }

    pub fn total_observed(&self) -> u64 {
        self.rows.iter().map(|r| r.observed_kmers as u64).sum()
    }

    pub fn total_possible(&self) -> u64 {
        self.rows.iter().map(|r| r.possible_kmers as u64).sum()
    }

    pub fn proportions(&self) -> Vec<f64> {
        self.rows.iter().map(KmerStats::proportion).collect()
    }

    /// Fails with [`Error::EmptySequence`] when the table has no rows.
    pub fn linguistic_complexity(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptySequence);
        }
        Ok(self.total_observed() as f64 / self.total_possible() as f64)
    }
}

impl fmt::Display for StatsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>6} {:>15} {:>15}", "k", "observed_kmers", "possible_kmers")?;
        for r in &self.rows {
            writeln!(f, "{:>6} {:>15} {:>15}", r.k, r.observed_kmers, r.possible_kmers)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsConfig {
    pub alphabet: Alphabet,
    /// Evaluate the observed and possible tables concurrently.
    pub parallel: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Nucleotide,
            parallel: true,
        }
    }
}

pub fn compute_statistics<T: Hash + Eq + Sync>(seq: &[T]) -> StatsTable {
    compute_statistics_with(seq, &StatsConfig::default())
}

pub fn compute_statistics_with<T: Hash + Eq + Sync>(
    seq: &[T],
    config: &StatsConfig,
) -> StatsTable {
    debug!(
        "Statistics for {} symbols, {:?} alphabet",
        seq.len(),
        config.alphabet
    );
    let observed = || time("observed k-mers", || observed_kmers(seq));
    let possible = || time("possible k-mers", || possible_kmers(seq, config.alphabet));
    let (observed, possible) = if config.parallel {
        rayon::join(observed, possible)
    } else {
        (observed(), possible())
    };
    StatsTable::from_counts(observed, possible)
}

/// Fails with [`Error::EmptySequence`] for the empty sequence.
pub fn linguistic_complexity<T: Hash + Eq + Sync>(seq: &[T]) -> Result<f64> {
    linguistic_complexity_with(seq, &StatsConfig::default())
}

pub fn linguistic_complexity_with<T: Hash + Eq + Sync>(
    seq: &[T],
    config: &StatsConfig,
) -> Result<f64> {
    if seq.is_empty() {
        return Err(Error::EmptySequence);
    }
    compute_statistics_with(seq, config).linguistic_complexity()
}

/// Everything the CLI reports for one sequence.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub label: String,
    pub length: usize,
    pub alphabet: Alphabet,
    pub alphabet_size: usize,
    pub linguistic_complexity: f64,
    pub table: StatsTable,
}

impl Report {
    pub fn new<T: Hash + Eq + Sync>(
        label: impl Into<String>,
        seq: &[T],
        config: &StatsConfig,
    ) -> Result<Self> {
        let table = compute_statistics_with(seq, config);
        let linguistic_complexity = table.linguistic_complexity()?;
        Ok(Self {
            label: label.into(),
            length: seq.len(),
            alphabet: config.alphabet,
            alphabet_size: config.alphabet.size(seq),
            linguistic_complexity,
            table,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_is_clamped() {
        let table = compute_statistics(b"ACG");
        assert_eq!(table.head(5).len(), 3);
        assert_eq!(table.head(2), &table.rows()[..2]);
        assert!(table.head(0).is_empty());
    }

    #[test]
    fn display_lists_every_row() {
        let table = compute_statistics(b"ATTTGGATT");
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].contains("observed_kmers"));
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            ["1", "3", "4"]
        );
    }

    #[test]
    fn sequential_matches_parallel() {
        let seq = b"GATTACAGATTACACCGT";
        for alphabet in [Alphabet::Nucleotide, Alphabet::Observed] {
            let parallel = StatsConfig { alphabet, parallel: true };
            let sequential = StatsConfig { alphabet, parallel: false };
            assert_eq!(
                compute_statistics_with(seq, &parallel),
                compute_statistics_with(seq, &sequential)
            );
        }
    }

    #[test]
    fn report_json() {
        let report = Report::new("x", b"ATTTGGATT", &StatsConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["label"], "x");
        assert_eq!(json["length"], 9);
        assert_eq!(json["alphabet"], "nucleotide");
        assert_eq!(json["linguistic_complexity"], 0.875);
        assert_eq!(json["table"][2]["k"], 3);
        assert_eq!(json["table"][2]["observed_kmers"], 6);
        assert_eq!(json["table"][2]["possible_kmers"], 7);
    }

    #[test]
    fn report_of_empty_sequence_fails() {
        assert!(matches!(
            Report::new("x", b"", &StatsConfig::default()),
            Err(Error::EmptySequence)
        ));
    }
}

//! K-mer statistics and linguistic complexity of a single sequence.
//!
//! For every `k` in `1..=n` the number of distinct k-mers that occur is
//! compared against the most that could occur, `min(4^k, n - k + 1)`.
//! The linguistic complexity is `sum(observed) / sum(possible)`.
//!
//! ```
//! use linguistic_complexity::*;
//!
//! let table = compute_statistics(b"ATTTGGATT");
//! assert_eq!(table.observed_kmers(), [3, 5, 6, 6, 5, 4, 3, 2, 1]);
//! assert_eq!(table.possible_kmers(), [4, 8, 7, 6, 5, 4, 3, 2, 1]);
//! assert_eq!(linguistic_complexity(b"ATTTGGATT").unwrap(), 0.875);
//! ```

pub mod error;
pub mod kmers;
pub mod plot;
#[cfg(feature = "python")]
pub mod py;
pub mod stats;
pub mod util;


pub use error::{Error, Result};
pub use kmers::{
    count_kmers, count_text_kmers, distinct_kmers, frequency_spectrum, observed_kmers,
    possible_kmers, Alphabet, KmerCounts, SpectrumBucket,
};
pub use plot::{render, write_pdf};
pub use stats::{
    compute_statistics, compute_statistics_with, linguistic_complexity,
    linguistic_complexity_with, KmerStats, Report, StatsConfig, StatsTable,
};
pub use util::*;

#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}

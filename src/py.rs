//! Python bindings, built with the `python` feature.

use crate::{error::Error, kmers, stats, util::text_symbols, Alphabet};
use clap::ValueEnum;
use indexmap::IndexMap;
use pyo3::{
    exceptions::{PyIOError, PyValueError},
    prelude::*,
};
use std::collections::HashMap;

impl From<Error> for PyErr {
    fn from(e: Error) -> Self {
        match e {
            Error::Io(_) => PyIOError::new_err(e.to_string()),
            _ => PyValueError::new_err(e.to_string()),
        }
    }
}

fn parse_alphabet(alphabet: &str) -> PyResult<Alphabet> {
    Alphabet::from_str(alphabet, true).map_err(PyValueError::new_err)
}

/// Occurrence count of every k-mer of `sequence`, in order of first occurrence.
#[pyfunction]
fn observed_kmer_dict_single_value(sequence: &str, k: i64) -> PyResult<IndexMap<String, usize>> {
    // Negative k maps to 0, which is rejected like any other out of range k.
    let k = usize::try_from(k).unwrap_or(0);
    Ok(kmers::count_text_kmers(sequence, k)?)
}

#[pyfunction]
fn observed_kmers_list(sequence: &str) -> Vec<usize> {
    kmers::observed_kmers(&text_symbols(sequence))
}

#[pyfunction]
#[pyo3(signature = (sequence, alphabet = "nucleotide"))]
fn possible_kmers_list(sequence: &str, alphabet: &str) -> PyResult<Vec<usize>> {
    Ok(kmers::possible_kmers(
        &text_symbols(sequence),
        parse_alphabet(alphabet)?,
    ))
}

/// Columns `k`, `observed_kmers` and `possible_kmers`.
#[pyfunction]
#[pyo3(signature = (sequence, alphabet = "nucleotide"))]
fn kmers_table(sequence: &str, alphabet: &str) -> PyResult<HashMap<&'static str, Vec<usize>>> {
    let config = stats::StatsConfig {
        alphabet: parse_alphabet(alphabet)?,
        ..Default::default()
    };
    let table = stats::compute_statistics_with(&text_symbols(sequence), &config);
    Ok(HashMap::from([
        ("k", table.iter().map(|r| r.k).collect()),
        ("observed_kmers", table.observed_kmers()),
        ("possible_kmers", table.possible_kmers()),
    ]))
}

#[pyfunction]
#[pyo3(name = "linguistic_complexity", signature = (sequence, alphabet = "nucleotide"))]
fn py_linguistic_complexity(sequence: &str, alphabet: &str) -> PyResult<f64> {
    let config = stats::StatsConfig {
        alphabet: parse_alphabet(alphabet)?,
        ..Default::default()
    };
    Ok(stats::linguistic_complexity_with(
        &text_symbols(sequence),
        &config,
    )?)
}

#[pymodule]
#[pyo3(name = "linguistic_complexity")]
fn module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(observed_kmer_dict_single_value, m)?)?;
    m.add_function(wrap_pyfunction!(observed_kmers_list, m)?)?;
    m.add_function(wrap_pyfunction!(possible_kmers_list, m)?)?;
    m.add_function(wrap_pyfunction!(kmers_table, m)?)?;
    m.add_function(wrap_pyfunction!(py_linguistic_complexity, m)?)?;
    Ok(())
}

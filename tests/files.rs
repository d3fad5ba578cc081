//! Reading sequences from disk and writing plots.

use linguistic_complexity::{
    compute_statistics, linguistic_complexity, plot::plot_path, read_sequence, render, Error,
};
use std::fs;

#[test]
fn plain_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seq.txt");
    fs::write(&path, "ATTTGGATT\n").unwrap();

    let seq = read_sequence(&path).unwrap();
    assert_eq!(seq, b"ATTTGGATT");
    assert_eq!(linguistic_complexity(&seq).unwrap(), 0.875);
}

#[test]
fn fasta_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seq.fa");
    fs::write(&path, ">chr1 test\nATTTG\nGATT\n").unwrap();

    let seq = read_sequence(&path).unwrap();
    assert_eq!(seq, b"ATTTGGATT");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_sequence(&dir.path().join("missing.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn empty_file_has_no_complexity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let seq = read_sequence(&path).unwrap();
    assert!(compute_statistics(&seq).is_empty());
    assert!(matches!(
        linguistic_complexity(&seq),
        Err(Error::EmptySequence)
    ));
}

#[test]
fn render_writes_pdf_next_to_label() {
    let dir = tempfile::tempdir().unwrap();
    let label = dir.path().join("seq.txt");
    let label = label.to_str().unwrap();

    let table = compute_statistics(b"ATTTGGATT");
    let path = render(&table, label).unwrap();
    assert_eq!(path, plot_path(label));
    assert!(path
        .to_str()
        .unwrap()
        .ends_with("seq.txt_proportion_kmers.pdf"));

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(bytes.ends_with(b"%%EOF\n"));
}

#[test]
fn render_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let label = dir.path().join("no/such/dir/seq");
    let table = compute_statistics(b"ACGT");
    assert!(matches!(
        render(&table, label.to_str().unwrap()),
        Err(Error::Io(_))
    ));
}

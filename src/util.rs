use crate::error::{Error, Result};
use log::{debug, info};
use rand::Rng;
use std::{io::Cursor, path::Path, time::Instant};

pub type Seq = [u8];
pub type Sequence = Vec<u8>;

/// Read a sequence from `path`.
///
/// Plain text is taken verbatim, except that trailing `\n`/`\r` are
/// removed: unlike a raw read of the file, the final line terminator is not
/// counted as a symbol. FASTA/FASTQ files (first non-blank byte `>` or `@`)
/// are parsed and all records are concatenated. Symbols are never validated
/// or normalized.
pub fn read_sequence(path: &Path) -> Result<Sequence> {
    let bytes = std::fs::read(path)?;
    info!("Read {} bytes from {path:?}", bytes.len());
    parse_sequence(bytes)
}

/// Interpret raw file contents as a sequence, see [`read_sequence`].
pub fn parse_sequence(mut bytes: Vec<u8>) -> Result<Sequence> {
    match bytes.iter().position(|c| !c.is_ascii_whitespace()) {
        Some(start) if matches!(bytes[start], b'>' | b'@') => {
            bytes.drain(..start);
            parse_fastx(bytes)
        }
        _ => {
            while matches!(bytes.last(), Some(b'\n' | b'\r')) {
                bytes.pop();
            }
            Ok(bytes)
        }
    }
}

fn parse_fastx(bytes: Vec<u8>) -> Result<Sequence> {
    let mut reader = needletail::parse_fastx_reader(Cursor::new(bytes))
        .map_err(|e| Error::Parse(e.to_string()))?;
    let mut out = vec![];
    let mut records = 0;
    while let Some(record) = reader.next() {
        let record = record.map_err(|e| Error::Parse(e.to_string()))?;
        out.extend_from_slice(&record.seq());
        records += 1;
    }
    debug!("Concatenated {records} records into {} symbols", out.len());
    Ok(out)
}

/// The characters of `text`, one symbol per `char`.
pub fn text_symbols(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Generate a random nucleotide sequence of length n.
pub fn random_sequence(n: usize, rng: &mut impl Rng) -> Sequence {
    let mut seq = Vec::with_capacity(n);
    for _ in 0..n {
        seq.push(b"ACGT"[rng.gen_range(0..4)]);
    }
    seq
}

pub fn time<T>(t: &str, f: impl FnOnce() -> T) -> T {
    debug!("{t}: Starting");
    let start = Instant::now();
    let r = f();
    debug!("{t}: Elapsed: {:?}", start.elapsed());
    r
}

use super::error::Error;
use std::io::BufRead;

/// Reads a protein sequence file: one chain per line, one-letter codes.
///
/// Lines are trimmed and blank lines skipped. Letters are not checked here;
/// that happens when the chain topology is built.
pub fn read_sequences<R: BufRead>(reader: R) -> Result<Vec<String>, Error> {
    let mut sequences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            sequences.push(trimmed.to_owned());
        }
    }
    Ok(sequences)
}

use crate::io::{Format, error::Error, util::column};
use log::debug;
use std::io::BufRead;

/// A DNA strand recovered from an atomistic reference structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceChain {
    pub id: char,
    /// One-letter nucleotide codes, 5' to 3'.
    pub sequence: String,
}

/// Reads the strand sequences of a reference PDB.
///
/// Only `ATOM` records of the first model are used. A new strand starts
/// wherever the chain identifier changes, a new nucleotide wherever the
/// residue number changes, so numbering gaps are harmless. The nucleotide
/// letter is the last character of the residue name (`DA` and `A` both
/// read as `A`).
pub fn read_dna_reference<R: BufRead>(reader: R) -> Result<Vec<ReferenceChain>, Error> {
    let mut chains: Vec<ReferenceChain> = Vec::new();
    let mut last_residue: Option<(char, i32)> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if line.starts_with("ENDMDL") {
            break;
        }
        if !line.starts_with("ATOM") {
            continue;
        }

        let res_name = column(&line, 17, 20);
        let chain_id = column(&line, 21, 22).chars().next().unwrap_or(' ');
        let res_seq = column(&line, 22, 26);
        let res_seq: i32 = res_seq.parse().map_err(|_| {
            Error::parse(
                Format::Pdb,
                line_no,
                format!("invalid residue number '{res_seq}'"),
            )
        })?;
        let letter = res_name
            .chars()
            .last()
            .ok_or_else(|| Error::parse(Format::Pdb, line_no, "missing residue name"))?;

        let new_chain = chains.last().is_none_or(|c| c.id != chain_id);
        if new_chain {
            chains.push(ReferenceChain {
                id: chain_id,
                sequence: String::new(),
            });
            last_residue = None;
        }
        if last_residue != Some((chain_id, res_seq)) {
            if let Some(chain) = chains.last_mut() {
                chain.sequence.push(letter);
            }
            last_residue = Some((chain_id, res_seq));
        }
    }

    debug!(
        "read {} DNA strand(s) from reference: {:?}",
        chains.len(),
        chains.iter().map(|c| c.sequence.len()).collect::<Vec<_>>()
    );
    Ok(chains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const REFERENCE: &str = "\
REMARK   generated reference
ATOM      1  P    DA A   1      -0.546   8.667  -2.142  1.00  0.00           P
ATOM      2  OP1  DA A   1      -0.127   9.891  -2.872  1.00  0.00           O
ATOM      3  P    DC A   2       1.103   9.014   1.360  1.00  0.00           P
ATOM      4  P    DG A   4       3.921   7.226   4.416  1.00  0.00           P
ATOM      5  N1   DG A   4       4.000   7.000   4.000  1.00  0.00           N
TER
ATOM      6  P    DC B   1      -3.004  -7.117   1.942  1.00  0.00           P
ATOM      7  P    DT B   2      -2.190  -6.220   5.112  1.00  0.00           P
HETATM    8  O   HOH W   1       0.000   0.000   0.000  1.00  0.00           O
END
";

    #[test]
    fn splits_strands_and_counts_residues() {
        let chains = read_dna_reference(Cursor::new(REFERENCE)).unwrap();

        assert_eq!(
            chains,
            [
                ReferenceChain {
                    id: 'A',
                    sequence: "ACG".into()
                },
                ReferenceChain {
                    id: 'B',
                    sequence: "CT".into()
                },
            ]
        );
    }

    #[test]
    fn only_first_model_is_read() {
        let text = format!("MODEL        1\n{REFERENCE}ENDMDL\nMODEL        2\n{REFERENCE}ENDMDL\n");

        let chains = read_dna_reference(Cursor::new(text)).unwrap();

        assert_eq!(chains.len(), 2);
    }

    #[test]
    fn bad_residue_number_is_reported() {
        let text = "ATOM      1  P    DA A   x      -0.546   8.667  -2.142  1.00  0.00           P\n";

        let err = read_dna_reference(Cursor::new(text)).unwrap_err();

        assert!(matches!(err, Error::Parse { format: Format::Pdb, line: 1, .. }));
    }
}

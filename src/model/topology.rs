use super::residue::{ChainKind, StandardResidue};
use thiserror::Error;

/// Problems with the sequence inputs a [`ChainTopology`] is built from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// The protein sequence input holds no chain.
    #[error("protein sequence is empty: at least one chain is required")]
    EmptySequence,

    /// A sequence letter outside the chain's alphabet.
    #[error("unrecognized {kind} residue '{letter}' in chain {chain} at position {position}")]
    UnknownResidue {
        /// Chain identifier the letter belongs to.
        chain: char,
        /// Polymer type of that chain.
        kind: ChainKind,
        /// 1-based position within the chain.
        position: usize,
        /// The offending letter.
        letter: char,
    },
}

/// One chain of the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: char,
    pub kind: ChainKind,
    pub residues: Vec<StandardResidue>,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn sequence(&self) -> String {
        self.residues.iter().map(|r| r.one_letter_code()).collect()
    }
}

/// Chain layout shared by every frame of a conversion run.
///
/// Residues are numbered from 1 across the whole system, protein chains
/// first, then DNA strands. `boundaries[k]` is the index of the last residue
/// of chain `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTopology {
    chains: Vec<Chain>,
    boundaries: Vec<usize>,
    protein_chains: usize,
}

impl ChainTopology {
    /// Builds the topology from one-letter sequences, one entry per chain.
    ///
    /// Surrounding whitespace is ignored and blank entries are skipped.
    /// Chain letters are assigned in order starting at `A`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptySequence`] when no protein chain
    /// remains and [`TopologyError::UnknownResidue`] for a letter outside
    /// the amino-acid or nucleotide alphabet.
    pub fn build<P, D>(protein: &[P], dna: &[D]) -> Result<Self, TopologyError>
    where
        P: AsRef<str>,
        D: AsRef<str>,
    {
        let protein: Vec<&str> = non_blank(protein).collect();
        if protein.is_empty() {
            return Err(TopologyError::EmptySequence);
        }

        let mut chains = Vec::new();
        let sequences = protein
            .into_iter()
            .map(|s| (ChainKind::Protein, s))
            .chain(non_blank(dna).map(|s| (ChainKind::Dna, s)));

        for (kind, sequence) in sequences {
            let id = chain_letter(chains.len());
            let residues = sequence
                .chars()
                .enumerate()
                .map(|(i, letter)| {
                    kind.residue(letter).ok_or(TopologyError::UnknownResidue {
                        chain: id,
                        kind,
                        position: i + 1,
                        letter,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            chains.push(Chain { id, kind, residues });
        }

        let protein_chains = chains
            .iter()
            .filter(|c| c.kind == ChainKind::Protein)
            .count();

        let boundaries = chains
            .iter()
            .scan(0usize, |total, chain| {
                *total += chain.len();
                Some(*total)
            })
            .collect();

        Ok(Self {
            chains,
            boundaries,
            protein_chains,
        })
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Cumulative chain lengths.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    pub fn total_residues(&self) -> usize {
        self.boundaries.last().copied().unwrap_or(0)
    }

    pub fn protein_chain_count(&self) -> usize {
        self.protein_chains
    }

    pub fn dna_chain_count(&self) -> usize {
        self.chains.len() - self.protein_chains
    }

    /// Index of the last protein residue.
    pub fn protein_residues(&self) -> usize {
        self.protein_chains
            .checked_sub(1)
            .map_or(0, |last| self.boundaries[last])
    }

    pub fn dna_residues(&self) -> usize {
        self.total_residues() - self.protein_residues()
    }

    /// Position in [`chains`](Self::chains) of the chain holding `residue`.
    pub fn chain_index(&self, residue: usize) -> Option<usize> {
        if residue == 0 || residue > self.total_residues() {
            return None;
        }
        Some(self.boundaries.partition_point(|&end| end < residue))
    }

    pub fn chain(&self, residue: usize) -> Option<&Chain> {
        self.chain_index(residue).map(|idx| &self.chains[idx])
    }

    pub fn chain_id(&self, residue: usize) -> Option<char> {
        self.chain(residue).map(|c| c.id)
    }

    pub fn residue_name(&self, residue: usize) -> Option<StandardResidue> {
        let idx = self.chain_index(residue)?;
        let offset = residue - 1 - self.chain_start_offset(idx);
        self.chains[idx].residues.get(offset).copied()
    }

    /// Whether `residue` opens a protein chain.
    pub fn is_protein_chain_start(&self, residue: usize) -> bool {
        self.chain_index(residue).is_some_and(|idx| {
            idx < self.protein_chains && self.chain_start_offset(idx) + 1 == residue
        })
    }

    /// Whether `residue` closes a protein chain.
    pub fn is_protein_chain_end(&self, residue: usize) -> bool {
        self.boundaries[..self.protein_chains].contains(&residue)
    }

    /// Residue indices at which a sugar bead opens a new nucleotide.
    ///
    /// These are the last protein residue (the first DNA strand starts
    /// with a phosphate-less 5' nucleotide right after it) and the residue
    /// following the end of every DNA strand but the last.
    pub fn dna_checkpoints(&self) -> Vec<usize> {
        if self.dna_chain_count() == 0 {
            return Vec::new();
        }
        let dna_ends = &self.boundaries[self.protein_chains..];
        std::iter::once(self.protein_residues())
            .chain(dna_ends[..dna_ends.len() - 1].iter().map(|end| end + 1))
            .collect()
    }

    fn chain_start_offset(&self, idx: usize) -> usize {
        if idx == 0 { 0 } else { self.boundaries[idx - 1] }
    }
}

fn non_blank<S: AsRef<str>>(sequences: &[S]) -> impl Iterator<Item = &str> {
    sequences
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
}

fn chain_letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_u32('A' as u32 + i))
        .unwrap_or('?')
}

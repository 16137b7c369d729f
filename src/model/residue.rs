use std::fmt;

/// Residues the topology can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardResidue {
    ALA,
    ARG,
    ASN,
    ASP,
    CYS,
    GLN,
    GLU,
    GLY,
    HIS,
    ILE,
    LEU,
    LYS,
    MET,
    PHE,
    PRO,
    SER,
    THR,
    TRP,
    TYR,
    VAL,
    DA,
    DC,
    DG,
    DT,
}

impl StandardResidue {
    /// Amino acid for a one-letter code (uppercase only).
    pub fn from_amino_code(code: char) -> Option<Self> {
        Some(match code {
            'A' => Self::ALA,
            'R' => Self::ARG,
            'N' => Self::ASN,
            'D' => Self::ASP,
            'C' => Self::CYS,
            'Q' => Self::GLN,
            'E' => Self::GLU,
            'G' => Self::GLY,
            'H' => Self::HIS,
            'I' => Self::ILE,
            'L' => Self::LEU,
            'K' => Self::LYS,
            'M' => Self::MET,
            'F' => Self::PHE,
            'P' => Self::PRO,
            'S' => Self::SER,
            'T' => Self::THR,
            'W' => Self::TRP,
            'Y' => Self::TYR,
            'V' => Self::VAL,
            _ => return None,
        })
    }

    /// Deoxynucleotide for a base letter (uppercase only).
    pub fn from_nucleotide_code(code: char) -> Option<Self> {
        Some(match code {
            'A' => Self::DA,
            'C' => Self::DC,
            'G' => Self::DG,
            'T' => Self::DT,
            _ => return None,
        })
    }

    /// Residue name as written to PDB records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ALA => "ALA",
            Self::ARG => "ARG",
            Self::ASN => "ASN",
            Self::ASP => "ASP",
            Self::CYS => "CYS",
            Self::GLN => "GLN",
            Self::GLU => "GLU",
            Self::GLY => "GLY",
            Self::HIS => "HIS",
            Self::ILE => "ILE",
            Self::LEU => "LEU",
            Self::LYS => "LYS",
            Self::MET => "MET",
            Self::PHE => "PHE",
            Self::PRO => "PRO",
            Self::SER => "SER",
            Self::THR => "THR",
            Self::TRP => "TRP",
            Self::TYR => "TYR",
            Self::VAL => "VAL",
            Self::DA => "DA",
            Self::DC => "DC",
            Self::DG => "DG",
            Self::DT => "DT",
        }
    }

    pub fn one_letter_code(&self) -> char {
        match self {
            Self::ALA | Self::DA => 'A',
            Self::ARG => 'R',
            Self::ASN => 'N',
            Self::ASP => 'D',
            Self::CYS | Self::DC => 'C',
            Self::GLN => 'Q',
            Self::GLU => 'E',
            Self::GLY | Self::DG => 'G',
            Self::HIS => 'H',
            Self::ILE => 'I',
            Self::LEU => 'L',
            Self::LYS => 'K',
            Self::MET => 'M',
            Self::PHE => 'F',
            Self::PRO => 'P',
            Self::SER => 'S',
            Self::THR | Self::DT => 'T',
            Self::TRP => 'W',
            Self::TYR => 'Y',
            Self::VAL => 'V',
        }
    }
}

impl fmt::Display for StandardResidue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Polymer type of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainKind {
    Protein,
    Dna,
}

impl ChainKind {
    /// Parses one sequence letter according to this chain kind.
    pub fn residue(&self, code: char) -> Option<StandardResidue> {
        match self {
            ChainKind::Protein => StandardResidue::from_amino_code(code),
            ChainKind::Dna => StandardResidue::from_nucleotide_code(code),
        }
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainKind::Protein => write!(f, "protein"),
            ChainKind::Dna => write!(f, "DNA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amino_codes_map_to_three_letter_names() {
        assert_eq!(StandardResidue::from_amino_code('A'), Some(StandardResidue::ALA));
        assert_eq!(StandardResidue::from_amino_code('W').unwrap().name(), "TRP");
        assert_eq!(StandardResidue::from_amino_code('C').unwrap().to_string(), "CYS");
        assert_eq!(StandardResidue::from_amino_code('B'), None);
        assert_eq!(StandardResidue::from_amino_code('a'), None);
    }

    #[test]
    fn nucleotide_codes_are_deoxy() {
        assert_eq!(StandardResidue::from_nucleotide_code('G').unwrap().name(), "DG");
        assert_eq!(StandardResidue::from_nucleotide_code('U'), None);
    }

    #[test]
    fn one_letter_code_inverts_parsing() {
        for c in "ACDEFGHIKLMNPQRSTVWY".chars() {
            assert_eq!(StandardResidue::from_amino_code(c).unwrap().one_letter_code(), c);
        }
        for c in "ACGT".chars() {
            assert_eq!(StandardResidue::from_nucleotide_code(c).unwrap().one_letter_code(), c);
        }
    }

    #[test]
    fn chain_kind_selects_alphabet() {
        assert_eq!(ChainKind::Protein.residue('T'), Some(StandardResidue::THR));
        assert_eq!(ChainKind::Dna.residue('T'), Some(StandardResidue::DT));
        assert_eq!(ChainKind::Dna.residue('L'), None);
    }
}

//! Coarse-grained atom-type tables.
//!
//! A dump file only carries numeric type codes. Which role a code stands
//! for, and which PDB atom name and element it is written with, depends on
//! whether the simulation contained DNA: the 3SPN.2 DNA model claims type
//! codes 1–14, pushing the protein beads to 15–20. Each [`ResidueMode`]
//! carries its own table; the mode is chosen once per run.

use super::types::{Element, Role};

/// One entry of an atom-type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomType {
    /// Numeric type code as found in the dump file.
    pub id: u32,
    /// Semantic role of beads with this code.
    pub role: Role,
    /// Atom name written to the PDB record.
    pub name: &'static str,
    /// Element symbol written to the PDB record.
    pub element: Element,
}

impl AtomType {
    const fn new(id: u32, role: Role, name: &'static str, element: Element) -> Self {
        Self {
            id,
            role,
            name,
            element,
        }
    }
}

static PROTEIN_TYPES: [AtomType; 6] = [
    AtomType::new(1, Role::CAlpha, "CA", Element::C),
    AtomType::new(2, Role::N, "N", Element::N),
    AtomType::new(3, Role::O, "O", Element::O),
    AtomType::new(4, Role::CBeta, "CB", Element::C),
    AtomType::new(5, Role::HBeta, "HB", Element::H),
    AtomType::new(6, Role::CPrime, "C", Element::C),
];

// 3..=14 are the A/T/G/C bases in their plain, 5' and 3' variants.
static PROTEIN_DNA_TYPES: [AtomType; 20] = [
    AtomType::new(1, Role::Phosphate, "P", Element::P),
    AtomType::new(2, Role::Sugar, "S", Element::S),
    AtomType::new(3, Role::Base, "N", Element::N),
    AtomType::new(4, Role::Base, "N", Element::N),
    AtomType::new(5, Role::Base, "N", Element::N),
    AtomType::new(6, Role::Base, "N", Element::N),
    AtomType::new(7, Role::Base, "N", Element::N),
    AtomType::new(8, Role::Base, "N", Element::N),
    AtomType::new(9, Role::Base, "N", Element::N),
    AtomType::new(10, Role::Base, "N", Element::N),
    AtomType::new(11, Role::Base, "N", Element::N),
    AtomType::new(12, Role::Base, "N", Element::N),
    AtomType::new(13, Role::Base, "N", Element::N),
    AtomType::new(14, Role::Base, "N", Element::N),
    AtomType::new(15, Role::CAlpha, "CA", Element::C),
    AtomType::new(16, Role::N, "N", Element::N),
    AtomType::new(17, Role::O, "O", Element::O),
    AtomType::new(18, Role::CBeta, "CB", Element::C),
    AtomType::new(19, Role::HBeta, "HB", Element::H),
    AtomType::new(20, Role::CPrime, "C", Element::C),
];

/// Which kinds of residues the simulated system contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResidueMode {
    /// Protein chains only.
    #[default]
    Protein,
    /// Protein chains followed by 3SPN.2 DNA strands.
    ProteinDna,
}

impl ResidueMode {
    /// The full type table of this mode, ordered by type code.
    pub fn atom_types(self) -> &'static [AtomType] {
        match self {
            ResidueMode::Protein => &PROTEIN_TYPES,
            ResidueMode::ProteinDna => &PROTEIN_DNA_TYPES,
        }
    }

    /// Looks up a type code.
    ///
    /// Returns `None` for codes outside the table.
    pub fn atom_type(self, id: u32) -> Option<&'static AtomType> {
        self.atom_types().iter().find(|t| t.id == id)
    }

    /// Type used for rebuilt amide nitrogens.
    pub fn nitrogen(self) -> &'static AtomType {
        match self {
            ResidueMode::Protein => &PROTEIN_TYPES[1],
            ResidueMode::ProteinDna => &PROTEIN_DNA_TYPES[15],
        }
    }

    /// Type used for rebuilt carbonyl carbons.
    pub fn carbonyl_carbon(self) -> &'static AtomType {
        match self {
            ResidueMode::Protein => &PROTEIN_TYPES[5],
            ResidueMode::ProteinDna => &PROTEIN_DNA_TYPES[19],
        }
    }

    pub fn includes_dna(self) -> bool {
        matches!(self, ResidueMode::ProteinDna)
    }

    /// Number of beads a frame must declare for `total_residues` residues.
    ///
    /// Every residue contributes three beads. In DNA mode the two 5'
    /// nucleotides have no phosphate bead, hence the `- 2`.
    pub fn expected_atom_count(self, total_residues: usize) -> usize {
        match self {
            ResidueMode::Protein => 3 * total_residues,
            ResidueMode::ProteinDna => (3 * total_residues).saturating_sub(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protein_table_maps_codes_to_roles() {
        let mode = ResidueMode::Protein;
        assert_eq!(mode.atom_type(1).unwrap().role, Role::CAlpha);
        assert_eq!(mode.atom_type(3).unwrap().role, Role::O);
        assert_eq!(mode.atom_type(4).unwrap().name, "CB");
        assert_eq!(mode.atom_type(5).unwrap().element, Element::H);
        assert!(mode.atom_type(7).is_none());
        assert!(mode.atom_type(0).is_none());
    }

    #[test]
    fn dna_table_shifts_protein_codes() {
        let mode = ResidueMode::ProteinDna;
        assert_eq!(mode.atom_type(1).unwrap().role, Role::Phosphate);
        assert_eq!(mode.atom_type(2).unwrap().role, Role::Sugar);
        for id in 3..=14 {
            assert_eq!(mode.atom_type(id).unwrap().role, Role::Base);
        }
        assert_eq!(mode.atom_type(15).unwrap().role, Role::CAlpha);
        assert_eq!(mode.atom_type(18).unwrap().role, Role::CBeta);
        assert!(mode.atom_type(21).is_none());
    }

    #[test]
    fn rebuilt_backbone_types_follow_mode() {
        assert_eq!(ResidueMode::Protein.nitrogen().id, 2);
        assert_eq!(ResidueMode::Protein.carbonyl_carbon().id, 6);
        assert_eq!(ResidueMode::ProteinDna.nitrogen().id, 16);
        assert_eq!(ResidueMode::ProteinDna.carbonyl_carbon().id, 20);

        for mode in [ResidueMode::Protein, ResidueMode::ProteinDna] {
            assert_eq!(mode.nitrogen().role, Role::N);
            assert_eq!(mode.nitrogen().name, "N");
            assert_eq!(mode.carbonyl_carbon().role, Role::CPrime);
            assert_eq!(mode.carbonyl_carbon().name, "C");
        }
    }

    #[test]
    fn expected_atom_count_accounts_for_missing_phosphates() {
        assert_eq!(ResidueMode::Protein.expected_atom_count(3), 9);
        assert_eq!(ResidueMode::ProteinDna.expected_atom_count(10), 28);
        assert_eq!(ResidueMode::ProteinDna.expected_atom_count(0), 0);
    }
}

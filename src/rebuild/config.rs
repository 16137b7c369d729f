use super::error::Error;
use crate::model::mode::ResidueMode;
use crate::model::topology::ChainTopology;

/// Settings of a rebuilding run.
#[derive(Debug, Clone)]
pub struct RebuildConfig {
    pub mode: ResidueMode,
    /// Rebuild the N of chain-opening residues and the C′ of chain-closing
    /// residues with the exact terminal constructions.
    pub terminal_atoms: bool,
}

impl Default for RebuildConfig {
    fn default() -> Self {
        Self {
            mode: ResidueMode::Protein,
            terminal_atoms: true,
        }
    }
}

impl RebuildConfig {
    pub fn new(mode: ResidueMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn terminal_atoms(mut self, enabled: bool) -> Self {
        self.terminal_atoms = enabled;
        self
    }

    /// Checks that the mode agrees with the chain layout.
    pub fn validate(&self, topology: &ChainTopology) -> Result<(), Error> {
        match (self.mode, topology.dna_chain_count()) {
            (ResidueMode::ProteinDna, 0) => Err(Error::Configuration(
                "protein+DNA mode requires at least one DNA strand".into(),
            )),
            (ResidueMode::Protein, n) if n > 0 => Err(Error::Configuration(format!(
                "topology has {n} DNA strand(s) but protein+DNA mode is not enabled"
            ))),
            _ => Ok(()),
        }
    }

    /// Bead count every frame must declare.
    pub fn expected_atom_count(&self, topology: &ChainTopology) -> usize {
        self.mode.expected_atom_count(topology.total_residues())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rebuilds_terminal_atoms_for_proteins() {
        let config = RebuildConfig::default();
        assert_eq!(config.mode, ResidueMode::Protein);
        assert!(config.terminal_atoms);
        assert!(!RebuildConfig::new(ResidueMode::ProteinDna).terminal_atoms(false).terminal_atoms);
    }

    #[test]
    fn validate_matches_mode_against_strands() {
        let protein = ChainTopology::build(&["AG"], &[] as &[&str]).unwrap();
        let mixed = ChainTopology::build(&["AG"], &["ACGT", "ACGT"]).unwrap();

        assert!(RebuildConfig::new(ResidueMode::Protein).validate(&protein).is_ok());
        assert!(RebuildConfig::new(ResidueMode::ProteinDna).validate(&mixed).is_ok());
        assert!(matches!(
            RebuildConfig::new(ResidueMode::ProteinDna).validate(&protein),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            RebuildConfig::new(ResidueMode::Protein).validate(&mixed),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn expected_atom_count_uses_total_residues() {
        let mixed = ChainTopology::build(&["AG"], &["ACGT", "ACGT"]).unwrap();
        assert_eq!(
            RebuildConfig::new(ResidueMode::ProteinDna).expected_atom_count(&mixed),
            3 * 10 - 2
        );
    }
}

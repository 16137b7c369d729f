use anyhow::{Context, Result, bail};
use log::warn;

use bead_forge::io::{read_dna_reference, read_sequences};
use bead_forge::{ChainTopology, RebuildConfig, ResidueMode};

use crate::cli::{InputOptions, ModelOptions};
use crate::io::open_input;

pub fn build_rebuild_config(model: &ModelOptions) -> RebuildConfig {
    let mode = if model.dna {
        ResidueMode::ProteinDna
    } else {
        ResidueMode::Protein
    };
    RebuildConfig::new(mode).terminal_atoms(!model.no_terminal)
}

/// Reads the sequence file (and the DNA reference in DNA mode) into the
/// chain topology shared by every frame.
pub fn load_topology(input: &InputOptions, model: &ModelOptions) -> Result<ChainTopology> {
    let sequences = read_sequences(open_input(&input.sequence)?).with_context(|| {
        format!(
            "Failed to read sequence file: {}",
            input.sequence.display()
        )
    })?;

    let strands = match (&model.dna_reference, model.dna) {
        (Some(path), true) => read_dna_reference(open_input(path)?)
            .with_context(|| format!("Failed to read DNA reference: {}", path.display()))?
            .into_iter()
            .map(|chain| chain.sequence)
            .collect(),
        (Some(path), false) => {
            warn!(
                "ignoring DNA reference {} without --dna",
                path.display()
            );
            Vec::new()
        }
        (None, true) => bail!("DNA mode requires --dna-reference"),
        (None, false) => Vec::new(),
    };

    if model.dna && strands.is_empty() {
        bail!("DNA reference contains no ATOM records");
    }

    ChainTopology::build(&sequences, &strands).context("Invalid chain sequences")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn model(dna: bool, no_terminal: bool) -> ModelOptions {
        ModelOptions {
            dna,
            dna_reference: None,
            no_terminal,
        }
    }

    #[test]
    fn protein_mode_by_default() {
        let config = build_rebuild_config(&model(false, false));
        assert_eq!(config.mode, ResidueMode::Protein);
        assert!(config.terminal_atoms);
    }

    #[test]
    fn dna_and_terminal_switches() {
        let config = build_rebuild_config(&model(true, true));
        assert_eq!(config.mode, ResidueMode::ProteinDna);
        assert!(!config.terminal_atoms);
    }

    #[test]
    fn unreadable_sequence_file_is_reported() {
        let input = InputOptions {
            dump: PathBuf::from("unused.dump"),
            sequence: PathBuf::from("/nonexistent/bforge/seq.txt"),
            quiet: true,
            verbose: false,
        };
        let err = load_topology(&input, &model(true, false)).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bforge/seq.txt"));
    }
}

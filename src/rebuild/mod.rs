mod assemble;
mod backbone;
mod config;
mod error;
mod geometry;

pub use backbone::{
    ANGLE_N_CA_C, N_AZIMUTH, R_C_O, R_CA_C, R_N_CA, c_terminal, carbonyl_on_circle, n_terminal,
    peptide_unit,
};
pub use config::RebuildConfig;
pub use error::{Clamp, Error, GeometryWarning};
pub use geometry::Vec3;

use std::collections::BTreeMap;

use log::debug;

use crate::model::atom::Site;
use crate::model::frame::{DumpFrame, Residue};
use crate::model::topology::ChainTopology;

/// A frame whose protein backbone has been completed.
#[derive(Debug, Clone)]
pub struct RebuiltFrame {
    pub timestep: Option<u64>,
    pub residues: BTreeMap<usize, Residue>,
    pub warnings: Vec<GeometryWarning>,
}

impl RebuiltFrame {
    pub fn residue(&self, index: usize) -> Option<&Residue> {
        self.residues.get(&index)
    }

    /// Atoms of residues `1..=total_residues` in output order, each paired
    /// with its residue index.
    pub fn sites(&self, total_residues: usize) -> impl Iterator<Item = (usize, &Site)> {
        self.residues
            .range(1..total_residues + 1)
            .flat_map(|(&index, residue)| residue.sites().map(move |site| (index, site)))
    }

    pub fn record_count(&self, total_residues: usize) -> usize {
        self.sites(total_residues).count()
    }
}

/// Groups the beads of `frame` into residues and rebuilds the missing
/// backbone atoms.
pub fn rebuild(
    frame: &DumpFrame,
    topology: &ChainTopology,
    config: &RebuildConfig,
) -> Result<RebuiltFrame, Error> {
    config.validate(topology)?;

    let mut residues = assemble::assemble(&frame.atoms, topology, config.mode);
    assemble::validate(&residues, topology.protein_residues())?;

    let warnings = backbone::reconstruct(&mut residues, topology, config)?;

    debug!(
        "rebuilt timestep {:?}: {} residues, {} geometry warnings",
        frame.timestep,
        residues.len(),
        warnings.len()
    );

    Ok(RebuiltFrame {
        timestep: frame.timestep,
        residues,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::RawAtom;
    use crate::model::frame::BoxBounds;
    use crate::model::mode::ResidueMode;
    use crate::model::types::Role;

    fn frame(mode: ResidueMode, beads: &[(u32, [f64; 3])]) -> DumpFrame {
        DumpFrame {
            timestep: Some(100),
            box_bounds: BoxBounds::new([0.0; 3], [1.0; 3]),
            atoms: beads
                .iter()
                .enumerate()
                .map(|(i, &(id, p))| RawAtom::new(i as u64 + 1, mode.atom_type(id).unwrap(), p))
                .collect(),
        }
    }

    fn protein_beads() -> Vec<(u32, [f64; 3])> {
        vec![
            (1, [0.0, 0.0, 0.0]),
            (3, [1.2, 1.6, 0.3]),
            (4, [-0.6, -0.8, 1.2]),
            (1, [3.8, 0.0, 0.0]),
            (3, [4.9, -1.5, -0.2]),
            (5, [3.2, 0.9, -0.7]),
            (1, [9.0, 2.0, 1.0]),
            (3, [10.1, 3.4, 0.6]),
            (4, [8.3, 1.1, 2.1]),
        ]
    }

    #[test]
    fn two_protein_chains_produce_five_atoms_per_residue() {
        let topo = ChainTopology::build(&["AG", "C"], &[] as &[&str]).unwrap();
        let frame = frame(ResidueMode::Protein, &protein_beads());

        let rebuilt = rebuild(&frame, &topo, &RebuildConfig::default()).unwrap();

        assert_eq!(rebuilt.timestep, Some(100));
        assert_eq!(rebuilt.record_count(3), 15);
        let names: Vec<_> = rebuilt
            .sites(3)
            .take(5)
            .map(|(_, s)| s.atom_type.name)
            .collect();
        assert_eq!(names, ["N", "CA", "C", "O", "CB"]);
        assert_eq!(rebuilt.residue(2).unwrap().cb.unwrap().atom_type.name, "HB");
    }

    #[test]
    fn missing_oxygen_aborts_the_frame() {
        let topo = ChainTopology::build(&["AG", "C"], &[] as &[&str]).unwrap();
        let mut beads = protein_beads();
        beads.remove(4);
        let frame = frame(ResidueMode::Protein, &beads);

        let err = rebuild(&frame, &topo, &RebuildConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            Error::MissingAtom {
                residue: 2,
                role: Role::O
            }
        ));
    }

    #[test]
    fn dna_residues_are_passed_through() {
        let topo = ChainTopology::build(&["A"], &["AC"]).unwrap();
        let mode = ResidueMode::ProteinDna;
        let beads = [
            (15, [0.0, 0.0, 0.0]),
            (17, [1.2, 1.6, 0.3]),
            (18, [-0.6, -0.8, 1.2]),
            (2, [5.0, 0.0, 0.0]),
            (3, [5.5, 1.0, 0.0]),
            (1, [8.0, 0.0, 0.0]),
            (2, [9.0, 0.0, 0.0]),
            (6, [9.5, 1.0, 0.0]),
        ];
        let frame = frame(mode, &beads);

        let rebuilt = rebuild(&frame, &topo, &RebuildConfig::new(mode)).unwrap();

        // 5 protein atoms + 2 + 3 nucleotide beads.
        assert_eq!(rebuilt.record_count(3), 10);
        assert_eq!(rebuilt.residue(1).unwrap().n.unwrap().atom_type.id, 16);
        assert_eq!(rebuilt.residue(1).unwrap().c.unwrap().atom_type.id, 20);
        assert!(rebuilt.residue(2).unwrap().n.is_none());
        assert!(rebuilt.residue(3).unwrap().p.is_some());
    }

    #[test]
    fn dna_mode_without_strands_is_rejected() {
        let topo = ChainTopology::build(&["AG", "C"], &[] as &[&str]).unwrap();
        let frame = frame(ResidueMode::Protein, &protein_beads());

        let err = rebuild(&frame, &topo, &RebuildConfig::new(ResidueMode::ProteinDna)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}

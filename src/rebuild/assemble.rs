use std::collections::BTreeMap;

use super::error::Error;
use crate::model::atom::RawAtom;
use crate::model::frame::Residue;
use crate::model::mode::ResidueMode;
use crate::model::topology::ChainTopology;
use crate::model::types::Role;

/// Groups a frame's beads into residues.
///
/// Beads are consumed in stream order. A Cα opens a new residue; in DNA mode
/// a phosphate does too, and a sugar opens one when it sits on a strand
/// transition or follows a complete nucleotide (the 5' nucleotide of every
/// strand carries no phosphate). Every other bead fills the current residue.
/// Incoming N and C′ beads are dropped since both are always rebuilt.
///
/// Beads seen before the first opener land in residue 0, which is never
/// written out.
pub fn assemble(
    atoms: &[RawAtom],
    topology: &ChainTopology,
    mode: ResidueMode,
) -> BTreeMap<usize, Residue> {
    let dna = mode.includes_dna();
    let checkpoints = if dna {
        topology.dna_checkpoints()
    } else {
        Vec::new()
    };

    let (_, residues) = atoms.iter().fold(
        (0usize, BTreeMap::<usize, Residue>::new()),
        |(mut current, mut residues), atom| {
            match atom.role() {
                Role::N | Role::CPrime => return (current, residues),
                Role::CAlpha => current += 1,
                Role::Phosphate if dna => current += 1,
                Role::Sugar if dna => {
                    let has_base = residues
                        .get(&current)
                        .is_some_and(|r| r.base.is_some());
                    if has_base || checkpoints.contains(&current) {
                        current += 1;
                    }
                }
                _ => {}
            }
            *residues.entry(current).or_default().slot_mut(atom.role()) = Some(atom.site());
            (current, residues)
        },
    );

    residues
}

/// Checks that every protein residue carries its Cα, side-chain and
/// carbonyl oxygen beads.
pub fn validate(residues: &BTreeMap<usize, Residue>, protein_residues: usize) -> Result<(), Error> {
    for index in 1..=protein_residues {
        let residue = residues.get(&index);
        for role in [Role::CAlpha, Role::CBeta, Role::O] {
            if residue.and_then(|r| r.slot(role)).is_none() {
                return Err(Error::missing_atom(index, role));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_DNA: [&str; 0] = [];

    fn beads(mode: ResidueMode, ids: &[u32]) -> Vec<RawAtom> {
        ids.iter()
            .enumerate()
            .map(|(i, &id)| {
                RawAtom::new(
                    i as u64 + 1,
                    mode.atom_type(id).unwrap(),
                    [i as f64, 0.0, 0.0],
                )
            })
            .collect()
    }

    #[test]
    fn protein_beads_group_by_c_alpha() {
        let topo = ChainTopology::build(&["AG", "C"], &NO_DNA).unwrap();
        // CA O CB | CA O HB | CA O CB
        let atoms = beads(ResidueMode::Protein, &[1, 3, 4, 1, 3, 5, 1, 3, 4]);

        let residues = assemble(&atoms, &topo, ResidueMode::Protein);

        assert_eq!(residues.len(), 3);
        for index in 1..=3 {
            let r = &residues[&index];
            assert_eq!(r.site_count(), 3);
            assert!(r.n.is_none() && r.c.is_none());
        }
        assert_eq!(residues[&2].cb.unwrap().atom_type.name, "HB");
        assert_eq!(residues[&3].ca.unwrap().position[0], 6.0);
        assert!(validate(&residues, 3).is_ok());
    }

    #[test]
    fn input_backbone_beads_are_ignored() {
        let topo = ChainTopology::build(&["A"], &NO_DNA).unwrap();
        // N CA C O CB
        let atoms = beads(ResidueMode::Protein, &[2, 1, 6, 3, 4]);

        let residues = assemble(&atoms, &topo, ResidueMode::Protein);

        assert!(!residues.contains_key(&0));
        assert!(residues[&1].n.is_none());
        assert!(residues[&1].c.is_none());
        assert_eq!(residues[&1].site_count(), 3);
    }

    #[test]
    fn later_beads_of_a_role_overwrite_earlier_ones() {
        let topo = ChainTopology::build(&["A"], &NO_DNA).unwrap();
        let atoms = beads(ResidueMode::Protein, &[1, 3, 3, 4]);

        let residues = assemble(&atoms, &topo, ResidueMode::Protein);

        assert_eq!(residues[&1].o.unwrap().position[0], 2.0);
    }

    #[test]
    fn dna_strands_split_at_checkpoints_and_bases() {
        // Protein "AG" then strands "ACG" and "CG": residues 3..=5 and 6..=7.
        let topo = ChainTopology::build(&["AG"], &["ACG", "CG"]).unwrap();
        let mode = ResidueMode::ProteinDna;
        #[rustfmt::skip]
        let ids = [
            15, 17, 18,   15, 17, 19, // protein
            2, 3,   1, 2, 4,   1, 2, 5, // strand 1: S B | P S B | P S B
            2, 6,   1, 2, 7, // strand 2: S B | P S B
        ];
        let atoms = beads(mode, &ids);
        assert_eq!(atoms.len(), mode.expected_atom_count(topo.total_residues()));

        let residues = assemble(&atoms, &topo, mode);

        assert_eq!(residues.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
        assert!(residues[&3].p.is_none());
        assert!(residues[&3].s.is_some() && residues[&3].base.is_some());
        assert!(residues[&4].p.is_some());
        assert!(residues[&6].p.is_none());
        assert!(residues[&6].s.is_some());
        assert_eq!(residues[&7].site_count(), 3);
        assert!(validate(&residues, topo.protein_residues()).is_ok());
    }

    #[test]
    fn missing_oxygen_is_reported_with_residue() {
        let topo = ChainTopology::build(&["AGC"], &NO_DNA).unwrap();
        let atoms = beads(ResidueMode::Protein, &[1, 3, 4, 1, 4, 1, 3, 4]);

        let residues = assemble(&atoms, &topo, ResidueMode::Protein);
        let err = validate(&residues, 3).unwrap_err();

        assert!(matches!(
            err,
            Error::MissingAtom {
                residue: 2,
                role: Role::O
            }
        ));
    }

    #[test]
    fn missing_residue_reports_c_alpha_first() {
        let residues = BTreeMap::new();
        assert!(matches!(
            validate(&residues, 1),
            Err(Error::MissingAtom {
                residue: 1,
                role: Role::CAlpha
            })
        ));
    }
}

//! Conversion of coarse-grained protein and protein–DNA trajectories into
//! atomistic PDB structures.
//!
//! A coarse-grained dump keeps one Cα, one carbonyl O and one side-chain bead
//! per amino acid (plus phosphate, sugar and base beads per nucleotide in the
//! 3SPN.2 DNA model). The amide N and carbonyl C′ are not simulated; they are
//! rebuilt from the surrounding beads with ideal peptide geometry before each
//! frame is written out.
//!
//! # Pipeline
//!
//! 1. [`ChainTopology::build`] turns the chain sequences into residue indices,
//!    chain letters and residue names. It is built once per run.
//! 2. [`DumpReader`] streams [`DumpFrame`]s from a LAMMPS text dump.
//! 3. [`rebuild`] groups a frame's beads into residues and places the
//!    missing backbone atoms.
//! 4. [`io::write_frame`] writes the completed frame as PDB records.
//!
//! # Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use bead_forge::{ChainTopology, DumpReader, RebuildConfig, ResidueMode, rebuild};
//! use bead_forge::io::write_frame;
//!
//! // Two chains: "AG" and "C".
//! let topology = ChainTopology::build(&["AG", "C"], &[] as &[&str])?;
//! let config = RebuildConfig::new(ResidueMode::Protein);
//!
//! let dump = "\
//! ITEM: TIMESTEP
//! 0
//! ITEM: NUMBER OF ATOMS
//! 9
//! ITEM: BOX BOUNDS pp pp pp
//! 0.0 50.0
//! 0.0 50.0
//! 0.0 50.0
//! ITEM: ATOMS id type xs ys zs
//! 1 1 0.500 0.500 0.500
//! 2 3 0.524 0.532 0.506
//! 3 4 0.488 0.484 0.524
//! 4 1 0.576 0.500 0.500
//! 5 3 0.598 0.470 0.496
//! 6 5 0.564 0.518 0.486
//! 7 1 0.680 0.540 0.520
//! 8 3 0.702 0.568 0.512
//! 9 4 0.666 0.522 0.542
//! ";
//!
//! let expected = config.expected_atom_count(&topology);
//! let mut output = Vec::new();
//! for frame in DumpReader::new(Cursor::new(dump), config.mode, expected) {
//!     let rebuilt = rebuild(&frame?, &topology, &config)?;
//!     let records = write_frame(&mut output, &rebuilt, &topology)?;
//!     // N, CA, C, O and CB/HB for each of the three residues.
//!     assert_eq!(records, 15);
//! }
//!
//! let pdb = String::from_utf8(output)?;
//! let records: Vec<&str> = pdb.lines().filter(|l| l.starts_with("ATOM")).collect();
//! assert_eq!(records.len(), 15);
//! // Residue name, chain and residue number of every record.
//! let residues = ["ALA A   1", "GLY A   2", "CYS B   3"];
//! for (k, record) in records.iter().enumerate() {
//!     assert_eq!(&record[17..26], residues[k / 5]);
//! }
//! assert!(records[6].contains(" CA  GLY A   2"));
//! assert!(records[14].contains(" CB  CYS B   3"));
//! assert_eq!(pdb.lines().last(), Some("END"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] – Dump decoding, sequence and DNA reference reading, PDB output
//! - [`rebuild()`] – Residue assembly and backbone reconstruction of one frame
//!
//! # Data Types
//!
//! - [`ChainTopology`] – Chains, residue names and chain boundaries
//! - [`ResidueMode`] – Atom-type table of protein-only or protein+DNA runs
//! - [`DumpFrame`] / [`RawAtom`] – One decoded trajectory snapshot
//! - [`Residue`] / [`Site`] – Per-residue atom slots
//! - [`RebuiltFrame`] – A frame with completed backbones, ready for output
//! - [`GeometryWarning`] – Notice that a rebuilt carbonyl is approximate

mod model;
mod rebuild;

pub mod io;

pub use model::atom::{RawAtom, Site};
pub use model::frame::{BoxBounds, DumpFrame, Residue};
pub use model::mode::{AtomType, ResidueMode};
pub use model::residue::{ChainKind, StandardResidue};
pub use model::topology::{Chain, ChainTopology, TopologyError};
pub use model::types::{Element, Role};

pub use io::DumpReader;

pub use rebuild::{
    ANGLE_N_CA_C, Clamp, GeometryWarning, N_AZIMUTH, R_C_O, R_CA_C, R_N_CA, RebuildConfig,
    RebuiltFrame, Vec3, c_terminal, carbonyl_on_circle, n_terminal, peptide_unit, rebuild,
};

pub use rebuild::Error as RebuildError;

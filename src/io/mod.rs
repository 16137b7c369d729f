//! Readers and writers for the files a conversion run touches.
//!
//! - [`dump`] – streaming decoder for LAMMPS text trajectories.
//! - [`pdb`] – DNA reference reader and frame writer.
//! - [`sequence`] – protein sequence files.

use std::fmt;

pub mod dump;
pub mod error;
pub mod pdb;
pub mod sequence;
pub mod util;

pub use dump::DumpReader;
pub use error::Error;
pub use pdb::{ReferenceChain, read_dna_reference, write_frame};
pub use sequence::read_sequences;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Dump,
    Pdb,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Dump => write!(f, "LAMMPS dump"),
            Format::Pdb => write!(f, "PDB"),
        }
    }
}

//! Error and warning types for backbone rebuilding.
//!
//! Errors abort the conversion run; [`GeometryWarning`]s only flag that a
//! rebuilt position is approximate and travel with the frame they belong to.

use std::fmt;

use crate::model::topology::TopologyError;
use crate::model::types::Role;
use thiserror::Error;

/// Errors that can occur while rebuilding a frame.
#[derive(Debug, Error)]
pub enum Error {
    /// The run configuration does not fit the inputs.
    ///
    /// Raised for inconsistent sequence inputs and for a protein+DNA
    /// mode whose topology has no DNA strand.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A protein residue lacks a bead every residue must carry.
    #[error("missing {role} atom in residue {residue}")]
    MissingAtom {
        /// 1-based residue index.
        residue: usize,
        /// The role that was not found.
        role: Role,
    },
}

impl From<TopologyError> for Error {
    fn from(e: TopologyError) -> Self {
        Error::Configuration(e.to_string())
    }
}

impl Error {
    /// Creates a [`MissingAtom`](Error::MissingAtom) error.
    pub fn missing_atom(residue: usize, role: Role) -> Self {
        Self::MissingAtom { residue, role }
    }
}

/// How the C-terminal carbonyl solve was relaxed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clamp {
    /// The Cα–O distance was out of reach; the distance term was pinned to
    /// its bound and the angle term derived from it.
    DistanceBound,
    /// The N–Cα–C′ angle was relaxed to the closest feasible value.
    ///
    /// `exceeds_bond_limit` is set when the relaxed angle term is larger
    /// than `r(N-Cα) · r(Cα-C′)`, i.e. the angle collapsed below zero.
    AngleRelaxed { exceeds_bond_limit: bool },
    /// N, Cα and O lie on one line, leaving the rotation about it free.
    Collinear,
}

/// Non-fatal notice that a rebuilt carbonyl carbon is approximate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryWarning {
    /// 1-based residue index.
    pub residue: usize,
    /// Discriminant before it was clamped to zero.
    pub discriminant: f64,
    pub clamp: Clamp,
}

impl fmt::Display for GeometryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "residue {}: C-terminal carbonyl has no exact solution (D = {:.4e}), ",
            self.residue, self.discriminant
        )?;
        match self.clamp {
            Clamp::DistanceBound => write!(f, "Cα–O distance clamped"),
            Clamp::AngleRelaxed {
                exceeds_bond_limit: false,
            } => write!(f, "N–Cα–C′ angle relaxed"),
            Clamp::AngleRelaxed {
                exceeds_bond_limit: true,
            } => write!(f, "N–Cα–C′ angle relaxed beyond bond limit"),
            Clamp::Collinear => write!(f, "N, Cα and O are collinear"),
        }
    }
}

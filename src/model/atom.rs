use super::mode::AtomType;
use super::types::Role;

/// A bead decoded from one trajectory frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAtom {
    pub serial: u64,
    pub atom_type: &'static AtomType,
    pub position: [f64; 3],
}

impl RawAtom {
    pub fn new(serial: u64, atom_type: &'static AtomType, position: [f64; 3]) -> Self {
        Self {
            serial,
            atom_type,
            position,
        }
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.atom_type.role
    }

    #[inline]
    pub fn site(&self) -> Site {
        Site::new(self.atom_type, self.position)
    }
}

/// An atom placed into a residue slot, either taken over from a bead or
/// rebuilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub atom_type: &'static AtomType,
    pub position: [f64; 3],
}

impl Site {
    pub fn new(atom_type: &'static AtomType, position: [f64; 3]) -> Self {
        Self {
            atom_type,
            position,
        }
    }
}

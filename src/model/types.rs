use std::fmt;

/// Elements written to the atomistic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    H,
    C,
    N,
    O,
    P,
    S,
}

impl Element {
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::P => "P",
            Element::S => "S",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Semantic role of a coarse-grained bead or a rebuilt backbone atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    CAlpha,
    N,
    CPrime,
    O,
    CBeta,
    HBeta,
    Phosphate,
    Sugar,
    Base,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::CAlpha => "C-Alpha",
            Role::N => "N",
            Role::CPrime => "C-Prime",
            Role::O => "O",
            Role::CBeta => "C-Beta",
            Role::HBeta => "H-Beta",
            Role::Phosphate => "P",
            Role::Sugar => "S",
            Role::Base => "B",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

use super::atom::{RawAtom, Site};
use super::types::Role;

/// Per-axis `[lo, hi]` extents of the simulation box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxBounds {
    pub lo: [f64; 3],
    pub hi: [f64; 3],
}

impl BoxBounds {
    pub fn new(lo: [f64; 3], hi: [f64; 3]) -> Self {
        Self { lo, hi }
    }

    /// Builds bounds from `[lo, hi]` pairs in x, y, z order.
    ///
    /// Returns `None` unless exactly three pairs are given.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Option<Self> {
        match pairs {
            [x, y, z] => Some(Self {
                lo: [x[0], y[0], z[0]],
                hi: [x[1], y[1], z[1]],
            }),
            _ => None,
        }
    }

    pub fn lengths(&self) -> [f64; 3] {
        [
            self.hi[0] - self.lo[0],
            self.hi[1] - self.lo[1],
            self.hi[2] - self.lo[2],
        ]
    }

    /// Converts box-fractional coordinates to absolute ones.
    pub fn descale(&self, fractional: [f64; 3]) -> [f64; 3] {
        let len = self.lengths();
        [
            self.lo[0] + len[0] * fractional[0],
            self.lo[1] + len[1] * fractional[1],
            self.lo[2] + len[2] * fractional[2],
        ]
    }
}

/// One decoded trajectory snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpFrame {
    pub timestep: Option<u64>,
    pub box_bounds: BoxBounds,
    pub atoms: Vec<RawAtom>,
}

/// Atom slots of one residue.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Residue {
    pub n: Option<Site>,
    pub ca: Option<Site>,
    pub c: Option<Site>,
    pub o: Option<Site>,
    /// Cβ, or Hβ for glycine.
    pub cb: Option<Site>,
    pub p: Option<Site>,
    pub s: Option<Site>,
    pub base: Option<Site>,
}

impl Residue {
    /// Slot that holds atoms of `role`.
    pub fn slot(&self, role: Role) -> Option<&Site> {
        match role {
            Role::N => self.n.as_ref(),
            Role::CAlpha => self.ca.as_ref(),
            Role::CPrime => self.c.as_ref(),
            Role::O => self.o.as_ref(),
            Role::CBeta | Role::HBeta => self.cb.as_ref(),
            Role::Phosphate => self.p.as_ref(),
            Role::Sugar => self.s.as_ref(),
            Role::Base => self.base.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, role: Role) -> &mut Option<Site> {
        match role {
            Role::N => &mut self.n,
            Role::CAlpha => &mut self.ca,
            Role::CPrime => &mut self.c,
            Role::O => &mut self.o,
            Role::CBeta | Role::HBeta => &mut self.cb,
            Role::Phosphate => &mut self.p,
            Role::Sugar => &mut self.s,
            Role::Base => &mut self.base,
        }
    }

    /// Filled slots in output order: N, CA, C, O, CB/HB, P, S, base.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        [
            &self.n, &self.ca, &self.c, &self.o, &self.cb, &self.p, &self.s, &self.base,
        ]
        .into_iter()
        .filter_map(Option::as_ref)
    }

    pub fn site_count(&self) -> usize {
        self.sites().count()
    }
}

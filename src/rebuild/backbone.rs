//! Placement of the amide nitrogen and carbonyl carbon of protein residues.
//!
//! Interior peptide units are rebuilt from the affine combination of two
//! consecutive Cα beads and the carbonyl oxygen. The chain-opening N and the
//! chain-closing C′ have no neighbouring Cα to work from and are placed from
//! ideal bond lengths and angles instead.

use std::collections::BTreeMap;

use log::warn;

use super::config::RebuildConfig;
use super::error::{Clamp, Error, GeometryWarning};
use super::geometry::Vec3;
use crate::model::atom::Site;
use crate::model::frame::Residue;
use crate::model::topology::ChainTopology;
use crate::model::types::Role;

/// N–Cα bond length (Å).
pub const R_N_CA: f64 = 1.45808;
/// Cα–C′ bond length (Å).
pub const R_CA_C: f64 = 1.52469;
/// C′–O bond length (Å).
pub const R_C_O: f64 = 1.23156;
/// N–Cα–C′ bond angle (rad).
pub const ANGLE_N_CA_C: f64 = 1.94437215835;
/// Azimuth of the chain-opening N around the Cα–C′ axis (rad).
pub const N_AZIMUTH: f64 = -2.4;

// Weights of Cα(i), Cα(i+1) and O(i).
const N_WEIGHTS: [f64; 3] = [0.4831806, 0.7032820, -0.1864262];
const C_WEIGHTS: [f64; 3] = [0.4436538, 0.2352006, 0.3211455];

fn combine(w: [f64; 3], ca: Vec3, ca_next: Vec3, o: Vec3) -> Vec3 {
    ca.scale(w[0]).add(ca_next.scale(w[1])).add(o.scale(w[2]))
}

/// Rebuilds the peptide unit between residues `i` and `i + 1`.
///
/// Returns `(N(i+1), C′(i))`.
pub fn peptide_unit(ca: Vec3, ca_next: Vec3, o: Vec3) -> (Vec3, Vec3) {
    (
        combine(N_WEIGHTS, ca, ca_next, o),
        combine(C_WEIGHTS, ca, ca_next, o),
    )
}

/// Places the N of a chain-opening residue from its Cα, C′ and O.
pub fn n_terminal(ca: Vec3, c: Vec3, o: Vec3) -> Vec3 {
    let z = c.sub(ca).normalized().unwrap_or(Vec3::new(0.0, 0.0, 1.0));
    let y = c
        .sub(o)
        .cross(z)
        .normalized()
        .unwrap_or_else(|| z.any_orthogonal());
    let x = y.cross(z);

    let (sin_psi, cos_psi) = ANGLE_N_CA_C.sin_cos();
    let (sin_theta, cos_theta) = N_AZIMUTH.sin_cos();

    let local = x
        .scale(sin_psi * cos_theta)
        .add(y.scale(sin_psi * sin_theta))
        .add(z.scale(cos_psi));
    ca.add(local.scale(R_N_CA))
}

/// Places the C′ of a chain-closing residue from its Cα, N and O.
///
/// C′ must sit at `R_CA_C` from Cα, at `R_C_O` from O and close the
/// `ANGLE_N_CA_C` angle with N. Of the two mirror solutions the one on the
/// negative side of `(N − Cα) × (O − Cα)` is taken. When the beads admit no
/// exact solution the constraints are relaxed and a [`GeometryWarning`] is
/// returned alongside the approximate position.
pub fn c_terminal(residue: usize, ca: Vec3, n: Vec3, o: Vec3) -> (Vec3, Option<GeometryWarning>) {
    let xn = n.sub(ca);
    let xo = o.sub(ca);
    let normal = xn.cross(xo);

    let xn2 = xn.norm_squared();
    let xo2 = xo.norm_squared();
    let c2 = normal.norm_squared();
    let dot = xn.dot(xo);
    let r2sq = R_CA_C * R_CA_C;

    if c2 < 1e-12 {
        let away = ca.sub(n);
        let c = carbonyl_on_circle(ca, o, away);
        let warning = GeometryWarning {
            residue,
            discriminant: 0.0,
            clamp: Clamp::Collinear,
        };
        warn!("{warning}");
        return (c, Some(warning));
    }

    let mut a = R_N_CA * R_CA_C * ANGLE_N_CA_C.cos();
    let mut b = xo2 + r2sq - R_C_O * R_C_O;
    let mut d = c2 * r2sq - a * a * xo2 - 0.25 * b * b * xn2 + a * b * dot;

    let mut warning = None;
    if d < 0.0 {
        let reach = 2.0 * xo2.sqrt() * R_CA_C;
        let clamp = if b.abs() > reach {
            b = reach;
            a = b * dot / xo2;
            Clamp::DistanceBound
        } else {
            a = 0.5 * (b * dot + (c2 * (4.0 * xo2 * r2sq - b * b)).sqrt()) / xo2;
            Clamp::AngleRelaxed {
                exceeds_bond_limit: a > R_N_CA * R_CA_C,
            }
        };
        let w = GeometryWarning {
            residue,
            discriminant: d,
            clamp,
        };
        warn!("{w}");
        warning = Some(w);
        d = 0.0;
    }

    let alpha = (a * xo2 - 0.5 * dot * b) / c2;
    let beta = (0.5 * xn2 * b - dot * a) / c2;
    let offset = xn
        .scale(alpha)
        .add(xo.scale(beta))
        .sub(normal.scale(d.sqrt() / c2));

    (ca.add(offset), warning)
}

/// Places C′ at `R_CA_C` from Cα and `R_C_O` from O, in the plane spanned
/// by Cα–O and `toward`, on the side `toward` points to.
pub fn carbonyl_on_circle(ca: Vec3, o: Vec3, toward: Vec3) -> Vec3 {
    let axis = o.sub(ca);
    let dist = axis.norm();
    let Some(unit) = axis.normalized() else {
        return ca.add(toward.normalized().unwrap_or(Vec3::new(0.0, 0.0, 1.0)).scale(R_CA_C));
    };

    let along = (R_CA_C * R_CA_C + dist * dist - R_C_O * R_C_O) / (2.0 * dist);
    let height = (R_CA_C * R_CA_C - along * along).max(0.0).sqrt();
    let side = toward
        .reject(unit)
        .normalized()
        .unwrap_or_else(|| unit.any_orthogonal());

    ca.add(unit.scale(along)).add(side.scale(height))
}

fn position(residues: &BTreeMap<usize, Residue>, index: usize, role: Role) -> Result<Vec3, Error> {
    residues
        .get(&index)
        .and_then(|r| r.slot(role))
        .map(|site| Vec3::from(site.position))
        .ok_or_else(|| Error::missing_atom(index, role))
}

/// Fills in N and C′ of every protein residue.
///
/// Expects residues that passed [`validate`](super::assemble::validate).
pub fn reconstruct(
    residues: &mut BTreeMap<usize, Residue>,
    topology: &ChainTopology,
    config: &RebuildConfig,
) -> Result<Vec<GeometryWarning>, Error> {
    let nitrogen = config.mode.nitrogen();
    let carbon = config.mode.carbonyl_carbon();
    let mut warnings = Vec::new();

    for i in 1..=topology.protein_residues() {
        let opens = topology.is_protein_chain_start(i);
        let closes = topology.is_protein_chain_end(i);

        let ca = position(residues, i, Role::CAlpha)?;
        let o = position(residues, i, Role::O)?;

        if !closes {
            let ca_next = position(residues, i + 1, Role::CAlpha)?;
            let (n_next, c) = peptide_unit(ca, ca_next, o);
            residues.entry(i).or_default().c = Some(Site::new(carbon, c.into()));
            residues.entry(i + 1).or_default().n = Some(Site::new(nitrogen, n_next.into()));

            if config.terminal_atoms && opens {
                let n = n_terminal(ca, c, o);
                residues.entry(i).or_default().n = Some(Site::new(nitrogen, n.into()));
            }
        } else if config.terminal_atoms {
            let (n, c) = if opens {
                // Lone residue: no neighbour fixes the peptide plane, so C′ is
                // put opposite the side chain.
                let cb = position(residues, i, Role::CBeta)?;
                let c = carbonyl_on_circle(ca, o, ca.sub(cb));
                (n_terminal(ca, c, o), c)
            } else {
                let n = position(residues, i, Role::N)?;
                let (c, warning) = c_terminal(i, ca, n, o);
                warnings.extend(warning);
                (n, c)
            };
            let residue = residues.entry(i).or_default();
            residue.n = Some(Site::new(nitrogen, n.into()));
            residue.c = Some(Site::new(carbon, c.into()));
        }
    }

    Ok(warnings)
}

use crate::io::error::Error;
use crate::model::atom::Site;
use crate::model::topology::ChainTopology;
use crate::rebuild::RebuiltFrame;
use std::io::Write;

/// Writes one frame as `ATOM` records followed by `END`.
///
/// Residues are walked in topology order and atoms are numbered from 1.
/// Returns the number of records written.
pub fn write_frame<W: Write>(
    mut writer: W,
    frame: &RebuiltFrame,
    topology: &ChainTopology,
) -> Result<usize, Error> {
    let mut serial = 0usize;
    let mut index = 0usize;

    for chain in topology.chains() {
        for residue_name in &chain.residues {
            index += 1;
            let Some(residue) = frame.residue(index) else {
                continue;
            };
            for site in residue.sites() {
                serial += 1;
                write_atom(&mut writer, serial, site, residue_name.name(), chain.id, index)?;
            }
        }
    }

    writeln!(writer, "END")?;
    Ok(serial)
}

fn write_atom<W: Write>(
    writer: &mut W,
    serial: usize,
    site: &Site,
    residue_name: &str,
    chain_id: char,
    residue_index: usize,
) -> Result<(), Error> {
    let [x, y, z] = site.position;
    writeln!(
        writer,
        "ATOM  {:>5} {:^4} {:<3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00          {:>2}",
        serial,
        site.atom_type.name,
        residue_name,
        chain_id,
        residue_index,
        x,
        y,
        z,
        site.atom_type.element.symbol(),
    )?;
    Ok(())
}

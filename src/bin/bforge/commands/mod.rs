mod check;
mod convert;

use check::run_check;
use convert::run_convert;

use anyhow::Result;

use bead_forge::{ChainTopology, RebuildConfig};

use crate::cli::{Command, InputOptions, ModelOptions};
use crate::config::{build_rebuild_config, load_topology};
use crate::display::{Context, Progress, print_chain_breakdown, print_topology};

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Convert(args) => run_convert(args, ctx),
        Command::Check(args) => run_check(args, ctx),
    }
}

/// First step of every command: read the chain inputs and settle the
/// rebuild settings.
fn prepare(
    input: &InputOptions,
    model: &ModelOptions,
    progress: &mut Progress,
) -> Result<(ChainTopology, RebuildConfig)> {
    progress.step("Loading topology");

    let config = build_rebuild_config(model);
    let topology = load_topology(input, model)?;
    config.validate(&topology)?;

    let mut substeps = vec![format!(
        "Read {} protein chain(s) from {}",
        topology.protein_chain_count(),
        file_name(&input.sequence)
    )];
    if let Some(reference) = model.dna_reference.as_ref().filter(|_| model.dna) {
        substeps.push(format!(
            "Read {} DNA strand(s) from {}",
            topology.dna_chain_count(),
            file_name(reference)
        ));
    }
    substeps.push(format!(
        "Expect {} beads per frame",
        config.expected_atom_count(&topology)
    ));
    progress.complete_step("Loading topology", &substeps);

    if input.verbose {
        print_topology(&topology, &config);
        print_chain_breakdown(&topology);
    }

    Ok((topology, config))
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn timestep_label(timestep: Option<u64>) -> String {
    timestep.map_or_else(|| "unknown".to_string(), |t| t.to_string())
}

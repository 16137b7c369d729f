use anyhow::{Context, Result};
use log::info;

use bead_forge::{DumpReader, rebuild};

use super::{file_name, prepare, timestep_label};
use crate::cli::CheckArgs;
use crate::display::{
    Context as DisplayContext, ConversionSummary, Progress, print_conversion_summary,
};
use crate::io::open_input;

const TOTAL_STEPS: u8 = 2;

/// Runs the whole pipeline except output, so a dump can be validated
/// against its sequences before a long conversion.
pub fn run_check(args: CheckArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
    let (topology, config) = prepare(&args.input, &args.model, &mut progress)?;

    progress.step("Checking frames");

    let dump = &args.input.dump;
    let reader = DumpReader::new(
        open_input(dump)?,
        config.mode,
        config.expected_atom_count(&topology),
    );
    let total = topology.total_residues();
    let mut summary = ConversionSummary::default();

    for (index, frame) in reader.enumerate() {
        let frame = frame
            .with_context(|| format!("Failed to read frame {index} of {}", dump.display()))?;
        summary.frames_read += 1;

        let rebuilt = rebuild(&frame, &topology, &config).with_context(|| {
            format!(
                "Failed to rebuild frame {index} (timestep {})",
                timestep_label(frame.timestep)
            )
        })?;
        summary.records += rebuilt.record_count(total);
        summary.warnings += rebuilt.warnings.len();
        summary.frames_rebuilt += 1;

        progress.update(&format!("{} frames", summary.frames_rebuilt));
    }

    info!(
        "{}: {} frames, {} records, {} clamped carbonyls",
        dump.display(),
        summary.frames_rebuilt,
        summary.records,
        summary.warnings
    );

    let substeps = vec![
        format!(
            "Decode {} frame(s) from {}",
            summary.frames_read,
            file_name(dump)
        ),
        format!("{} record(s) would be written", summary.records),
        format!("{} carbonyl(s) placed with a clamped solve", summary.warnings),
    ];
    progress.complete_step("Checking frames", &substeps);

    if ctx.interactive {
        print_conversion_summary(&summary);
    } else {
        println!(
            "frames={} records={} warnings={}",
            summary.frames_rebuilt, summary.records, summary.warnings
        );
    }
    progress.finish();

    Ok(())
}

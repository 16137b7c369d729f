use std::io::Write;

use anyhow::{Context, Result, bail};

use bead_forge::io::write_frame;
use bead_forge::{DumpReader, rebuild};

use super::{file_name, prepare, timestep_label};
use crate::cli::ConvertArgs;
use crate::display::{
    Context as DisplayContext, ConversionSummary, Progress, print_conversion_summary,
};
use crate::io::{create_output, open_input, stdout_is_tty};

const TOTAL_STEPS: u8 = 2;

pub fn run_convert(args: ConvertArgs, ctx: DisplayContext) -> Result<()> {
    if args.output.is_none() && stdout_is_tty() {
        bail!(
            "No output file specified and stdout is a terminal.\n\nUsage: bforge convert <DUMP> <SEQUENCE> -o <OUTPUT> or pipe output."
        );
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
    let (topology, config) = prepare(&args.input, &args.model, &mut progress)?;

    progress.step("Rebuilding frames");

    let dump = &args.input.dump;
    let reader = DumpReader::new(
        open_input(dump)?,
        config.mode,
        config.expected_atom_count(&topology),
    );
    let mut output = create_output(args.output.as_deref(), args.append)?;

    let mut summary = ConversionSummary {
        destination: Some(
            args.output
                .as_deref()
                .map_or_else(|| "stdout".to_string(), file_name),
        ),
        ..ConversionSummary::default()
    };

    for (index, frame) in reader.enumerate() {
        let frame = frame
            .with_context(|| format!("Failed to read frame {index} of {}", dump.display()))?;
        summary.frames_read += 1;

        if args.frame.is_some_and(|wanted| wanted != index) {
            continue;
        }

        let rebuilt = rebuild(&frame, &topology, &config).with_context(|| {
            format!(
                "Failed to rebuild frame {index} (timestep {})",
                timestep_label(frame.timestep)
            )
        })?;
        summary.records += write_frame(&mut output, &rebuilt, &topology)
            .with_context(|| format!("Failed to write frame {index}"))?;
        summary.warnings += rebuilt.warnings.len();
        summary.frames_rebuilt += 1;

        progress.update(&format!("{} frames", summary.frames_rebuilt));

        if args.frame.is_some() {
            break;
        }
    }

    output.flush().context("Failed to flush output")?;

    if let Some(wanted) = args.frame {
        if summary.frames_rebuilt == 0 {
            bail!(
                "Frame {wanted} not found: {} holds {} frame(s)",
                dump.display(),
                summary.frames_read
            );
        }
    }

    let substeps = vec![
        format!(
            "Decode {} frame(s) from {}",
            summary.frames_read,
            file_name(dump)
        ),
        format!("Rebuild N and C′ for {} frame(s)", summary.frames_rebuilt),
        format!(
            "Write {} record(s) → {}",
            summary.records,
            summary.destination.as_deref().unwrap_or("stdout")
        ),
    ];
    progress.complete_step("Rebuilding frames", &substeps);

    if ctx.interactive {
        print_conversion_summary(&summary);
    }
    progress.finish();

    Ok(())
}

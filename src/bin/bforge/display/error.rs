use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<bead_forge::io::Error>() {
                collector.collect_io_hints(io_err);
            } else if let Some(rebuild_err) = cause.downcast_ref::<bead_forge::RebuildError>() {
                collector.collect_rebuild_hints(rebuild_err);
            } else if let Some(topo_err) = cause.downcast_ref::<bead_forge::TopologyError>() {
                collector.collect_topology_hints(topo_err);
            } else if let Some(std_err) = cause.downcast_ref::<std::io::Error>() {
                collector.collect_std_io_hints(std_err);
            }
            if collector.has_typed_hints {
                break;
            }
        }

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &bead_forge::io::Error) {
        use bead_forge::io::{Error as IoError, Format};

        self.mark_typed();

        match err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { format, line, .. } => {
                self.add(format!(
                    "Parser encountered an issue near line {line} of the {format} input"
                ));
                self.add("Inspect the file around that line for malformed entries");
                match format {
                    Format::Dump => {
                        self.add("Dump: atom lines must read `id type xs ys zs`");
                        self.add("Dump: coordinates must be scaled (dump style atom)");
                    }
                    Format::Pdb => {
                        self.add("PDB: residue name in columns 18-20, chain in 22");
                        self.add("PDB: residue number in columns 23-26");
                    }
                }
            }

            IoError::TopologyMismatch {
                declared, expected, ..
            } => {
                self.add(format!(
                    "The dump holds {declared} beads per frame, the sequences imply {expected}"
                ));
                self.add("Check that the sequence file lists every chain of the run");
                self.add("Pass --dna with --dna-reference for protein-DNA runs");
            }

            IoError::FrameIntegrity {
                declared, decoded, ..
            } => {
                self.add(format!(
                    "Frame declared {declared} atoms but {decoded} atom lines followed"
                ));
                self.add("The dump may have been concatenated from partial runs");
            }

            IoError::MissingBoxBounds { .. } => {
                self.add("Scaled coordinates need the BOX BOUNDS section");
                self.add("Write the dump with `dump_modify` defaults or check the header");
            }
        }
    }

    fn collect_rebuild_hints(&mut self, err: &bead_forge::RebuildError) {
        use bead_forge::RebuildError;

        self.mark_typed();

        match err {
            RebuildError::Configuration(_) => {
                self.add("The residue model does not match the chain inputs");
                self.add("Use --dna only for runs that include DNA strands");
            }

            RebuildError::MissingAtom { residue, role } => {
                self.add(format!("Residue {residue} has no {role} bead in this frame"));
                self.add("Bead order must be CA, O, side chain for every residue");
                self.add("Verify the atom-type codes match the residue model");
            }
        }
    }

    fn collect_topology_hints(&mut self, err: &bead_forge::TopologyError) {
        use bead_forge::TopologyError;

        self.mark_typed();

        match err {
            TopologyError::EmptySequence => {
                self.add("The sequence file must contain at least one chain");
                self.add("Write one chain per line in one-letter codes");
            }

            TopologyError::UnknownResidue { kind, .. } => {
                self.add(format!("Only standard {kind} one-letter codes are accepted"));
                self.add("Remove gaps, lowercase letters and FASTA headers");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        self.mark_typed();

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid or corrupt data");
                self.add("Trajectory files must be plain UTF-8 text");
            }

            ErrorKind::WriteZero | ErrorKind::StorageFull => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output consumer terminated early");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("stdout is a terminal") {
            self.add("Redirect the output or pass -o <FILE>");
        } else if msg.contains("dna") {
            self.add("DNA mode reads strand sequences from --dna-reference");
        } else if msg.contains("frame") {
            self.add("Frame positions are 0-based");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

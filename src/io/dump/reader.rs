//! Streaming decoder for LAMMPS text dumps.
//!
//! A dump is a sequence of `ITEM: <LABEL>` headers, each followed by its
//! payload lines. Frames are delimited by `ITEM: TIMESTEP`; a frame is only
//! handed out once its successor starts or the stream ends, and never more
//! than one frame is held in memory.

use std::io::BufRead;
use std::mem;

use log::{debug, warn};

use crate::io::{Format, error::Error, util::parse_field};
use crate::model::atom::RawAtom;
use crate::model::frame::{BoxBounds, DumpFrame};
use crate::model::mode::ResidueMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Timestep,
    AtomCount,
    BoxBounds,
    Atoms,
    Unknown,
}

impl Section {
    fn from_label(label: &str) -> Self {
        if label.starts_with("TIMESTEP") {
            Section::Timestep
        } else if label.starts_with("NUMBER OF ATOMS") {
            Section::AtomCount
        } else if label.starts_with("BOX BOUNDS") {
            Section::BoxBounds
        } else if label.starts_with("ATOMS") {
            Section::Atoms
        } else {
            Section::Unknown
        }
    }
}

#[derive(Debug, Default)]
struct PendingFrame {
    timestep: Option<u64>,
    declared: Option<usize>,
    bounds: Vec<[f64; 2]>,
    box_bounds: Option<BoxBounds>,
    atoms: Vec<RawAtom>,
}

impl PendingFrame {
    fn decoded(&self) -> usize {
        self.atoms.len()
    }

    fn declared(&self) -> usize {
        self.declared.unwrap_or(0)
    }

    /// Fails when a later `BOX BOUNDS` section left the bounds incomplete.
    fn into_frame(self, line: usize) -> Result<DumpFrame, Error> {
        let box_bounds = self.box_bounds.ok_or(Error::MissingBoxBounds { line })?;
        Ok(DumpFrame {
            timestep: self.timestep,
            box_bounds,
            atoms: self.atoms,
        })
    }
}

/// Iterator over the frames of a dump.
///
/// Yields `Err` at most once and is exhausted afterwards.
pub struct DumpReader<R> {
    reader: R,
    mode: ResidueMode,
    expected_atoms: usize,
    section: Section,
    pending: PendingFrame,
    buf: String,
    line: usize,
    done: bool,
}

impl<R: BufRead> DumpReader<R> {
    /// Creates a decoder resolving type codes against `mode` and requiring
    /// every frame to declare `expected_atoms` beads.
    pub fn new(reader: R, mode: ResidueMode, expected_atoms: usize) -> Self {
        Self {
            reader,
            mode,
            expected_atoms,
            section: Section::Preamble,
            pending: PendingFrame::default(),
            buf: String::new(),
            line: 0,
            done: false,
        }
    }

    fn advance(&mut self) -> Result<Option<DumpFrame>, Error> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return self.finish_stream();
            }
            self.line += 1;

            let line = mem::take(&mut self.buf);
            let outcome = self.handle_line(line.trim());
            self.buf = line;

            if let Some(frame) = outcome? {
                return Ok(Some(frame));
            }
        }
    }

    fn handle_line(&mut self, line: &str) -> Result<Option<DumpFrame>, Error> {
        if line.is_empty() {
            return Ok(None);
        }
        if let Some(label) = line.strip_prefix("ITEM:") {
            self.section = Section::from_label(label.trim());
            if self.section == Section::BoxBounds {
                self.pending.bounds.clear();
                self.pending.box_bounds = None;
            }
            return Ok(None);
        }

        match self.section {
            Section::Preamble => Err(Error::parse(
                Format::Dump,
                self.line,
                "data line before the first ITEM header",
            )),
            Section::Timestep => {
                let timestep = parse_field(Some(line), Format::Dump, self.line, "timestep")?;
                let finished = self.complete_frame()?;
                self.pending.timestep = Some(timestep);
                Ok(finished)
            }
            Section::AtomCount => {
                let declared = parse_field(Some(line), Format::Dump, self.line, "atom count")?;
                if declared != self.expected_atoms {
                    return Err(Error::TopologyMismatch {
                        timestep: self.pending.timestep,
                        declared,
                        expected: self.expected_atoms,
                    });
                }
                self.pending.declared = Some(declared);
                Ok(None)
            }
            Section::BoxBounds => {
                self.push_bounds(line)?;
                Ok(None)
            }
            Section::Atoms => {
                self.push_atom(line)?;
                Ok(None)
            }
            Section::Unknown => Ok(None),
        }
    }

    fn push_bounds(&mut self, line: &str) -> Result<(), Error> {
        if self.pending.bounds.len() == 3 {
            return Err(Error::parse(
                Format::Dump,
                self.line,
                "BOX BOUNDS section has more than three lines",
            ));
        }
        let mut tokens = line.split_whitespace();
        let lo = parse_field(tokens.next(), Format::Dump, self.line, "lower box bound")?;
        let hi = parse_field(tokens.next(), Format::Dump, self.line, "upper box bound")?;
        self.pending.bounds.push([lo, hi]);
        self.pending.box_bounds = BoxBounds::from_pairs(&self.pending.bounds);
        Ok(())
    }

    fn push_atom(&mut self, line: &str) -> Result<(), Error> {
        let box_bounds = self
            .pending
            .box_bounds
            .ok_or(Error::MissingBoxBounds { line: self.line })?;

        let mut tokens = line.split_whitespace();
        let serial = parse_field(tokens.next(), Format::Dump, self.line, "atom id")?;
        let type_id: u32 = parse_field(tokens.next(), Format::Dump, self.line, "atom type")?;
        let atom_type = self.mode.atom_type(type_id).ok_or_else(|| {
            Error::parse(
                Format::Dump,
                self.line,
                format!("unknown atom type {type_id}"),
            )
        })?;

        let mut fractional = [0.0; 3];
        for (value, label) in fractional.iter_mut().zip(["xs", "ys", "zs"]) {
            *value = parse_field(tokens.next(), Format::Dump, self.line, label)?;
        }

        self.pending.atoms.push(RawAtom::new(
            serial,
            atom_type,
            box_bounds.descale(fractional),
        ));
        Ok(())
    }

    /// Closes the buffered frame when a new TIMESTEP begins.
    fn complete_frame(&mut self) -> Result<Option<DumpFrame>, Error> {
        let pending = mem::take(&mut self.pending);
        if pending.atoms.is_empty() {
            return Ok(None);
        }
        if pending.decoded() != pending.declared() {
            return Err(Error::FrameIntegrity {
                timestep: pending.timestep,
                declared: pending.declared(),
                decoded: pending.decoded(),
            });
        }
        debug!(
            "decoded timestep {:?} with {} atoms",
            pending.timestep,
            pending.decoded()
        );
        pending.into_frame(self.line).map(Some)
    }

    fn finish_stream(&mut self) -> Result<Option<DumpFrame>, Error> {
        let pending = mem::take(&mut self.pending);
        if pending.atoms.is_empty() {
            return Ok(None);
        }
        let (decoded, declared) = (pending.decoded(), pending.declared());
        if decoded < declared {
            warn!(
                "discarding truncated final frame (timestep {:?}): {decoded} of {declared} atoms",
                pending.timestep
            );
            return Ok(None);
        }
        if decoded > declared {
            return Err(Error::FrameIntegrity {
                timestep: pending.timestep,
                declared,
                decoded,
            });
        }
        pending.into_frame(self.line).map(Some)
    }
}

impl<R: BufRead> Iterator for DumpReader<R> {
    type Item = Result<DumpFrame, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.advance().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

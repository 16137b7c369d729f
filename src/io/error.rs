use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line {line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error(
        "frame {} declares {declared} atoms but the topology expects {expected}",
        display_timestep(.timestep)
    )]
    TopologyMismatch {
        timestep: Option<u64>,
        declared: usize,
        expected: usize,
    },

    #[error(
        "frame {} declares {declared} atoms but {decoded} were decoded",
        display_timestep(.timestep)
    )]
    FrameIntegrity {
        timestep: Option<u64>,
        declared: usize,
        decoded: usize,
    },

    #[error("ATOMS record at line {line} precedes a complete BOX BOUNDS section")]
    MissingBoxBounds { line: usize },
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }
}

fn display_timestep(timestep: &Option<u64>) -> String {
    match timestep {
        Some(t) => format!("at timestep {t}"),
        None => "without timestep".into(),
    }
}

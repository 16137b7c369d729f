use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, IsTerminal, StdoutLock, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Returns `true` if stdout is a terminal (interactive).
pub fn stdout_is_tty() -> bool {
    io::stdout().is_terminal()
}

pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

pub enum OutputTarget {
    File(BufWriter<File>),
    Stdout(BufWriter<StdoutLock<'static>>),
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::File(w) => w.write(buf),
            OutputTarget::Stdout(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::File(w) => w.flush(),
            OutputTarget::Stdout(w) => w.flush(),
        }
    }
}

/// Opens `path` for writing, truncating it unless `append` is set.
/// Without a path the output goes to stdout.
pub fn create_output(path: Option<&Path>, append: bool) -> Result<OutputTarget> {
    let Some(path) = path else {
        return Ok(OutputTarget::Stdout(BufWriter::new(io::stdout().lock())));
    };

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(OutputTarget::File(BufWriter::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("bforge-{}-{name}", std::process::id()))
    }

    #[test]
    fn append_mode_keeps_existing_content() {
        let path = scratch("append.pdb");
        fs::write(&path, "MODEL 1\n").unwrap();

        let mut out = create_output(Some(&path), true).unwrap();
        out.write_all(b"MODEL 2\n").unwrap();
        out.flush().unwrap();
        drop(out);

        assert_eq!(fs::read_to_string(&path).unwrap(), "MODEL 1\nMODEL 2\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn default_mode_truncates() {
        let path = scratch("truncate.pdb");
        fs::write(&path, "stale content\n").unwrap();

        let mut out = create_output(Some(&path), false).unwrap();
        out.write_all(b"END\n").unwrap();
        out.flush().unwrap();
        drop(out);

        assert_eq!(fs::read_to_string(&path).unwrap(), "END\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_input_names_the_path() {
        let err = open_input(Path::new("/nonexistent/bforge/run.dump")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bforge/run.dump"));
    }
}

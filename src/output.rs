//! Writing the resolved path list

use crate::error::{LocatorError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Where the path list goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,

    /// Created if missing, truncated otherwise
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }

    /// Write one path per line
    pub fn write_lines(&self, lines: &[String]) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let stdout = io::stdout();
                write_all(stdout.lock(), lines).map_err(|source| LocatorError::Output {
                    path: PathBuf::from("<stdout>"),
                    source,
                })
            }
            OutputTarget::File(path) => {
                let to_error = |source| LocatorError::Output {
                    path: path.clone(),
                    source,
                };
                let file = File::create(path).map_err(to_error)?;
                write_all(file, lines).map_err(to_error)?;
                log::debug!("Wrote {} paths to {:?}", lines.len(), path);
                Ok(())
            }
        }
    }
}

fn write_all<W: Write>(writer: W, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

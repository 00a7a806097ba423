//! Where a netlist comes from.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The three accepted netlist inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetlistSource {
    /// A file on disk.
    Path(PathBuf),
    /// The whole netlist as one newline-separated string.
    Text(String),
    /// One entry per netlist line.
    Lines(Vec<String>),
}

impl NetlistSource {
    /// Classify a free-form string.
    ///
    /// An existing file path wins; otherwise the string must contain at least
    /// one newline to be taken as netlist text.
    pub fn detect(input: &str) -> Result<Self> {
        if Path::new(input).is_file() {
            Ok(NetlistSource::Path(PathBuf::from(input)))
        } else if input.contains('\n') {
            Ok(NetlistSource::Text(input.to_string()))
        } else {
            Err(Error::InvalidSource(input.to_string()))
        }
    }

    /// The raw lines of the netlist, before trimming or filtering.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        match self {
            NetlistSource::Path(path) => {
                let bytes = fs::read(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                let text = String::from_utf8(bytes).map_err(|_| {
                    Error::UnsupportedFormat(format!("{} is not UTF-8 text", path.display()))
                })?;
                Ok(text.lines().map(str::to_string).collect())
            }
            NetlistSource::Text(text) => Ok(text.split('\n').map(str::to_string).collect()),
            NetlistSource::Lines(lines) => Ok(lines.clone()),
        }
    }
}

impl From<PathBuf> for NetlistSource {
    fn from(path: PathBuf) -> Self {
        NetlistSource::Path(path)
    }
}

impl From<&Path> for NetlistSource {
    fn from(path: &Path) -> Self {
        NetlistSource::Path(path.to_path_buf())
    }
}

impl From<Vec<String>> for NetlistSource {
    fn from(lines: Vec<String>) -> Self {
        NetlistSource::Lines(lines)
    }
}

impl From<Vec<&str>> for NetlistSource {
    fn from(lines: Vec<&str>) -> Self {
        NetlistSource::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for NetlistSource {
    fn from(lines: &[&str]) -> Self {
        NetlistSource::Lines(lines.iter().map(|line| line.to_string()).collect())
    }
}

//! Netlist: an ordered, validated list of SPICE lines.

use std::fmt;

use crate::error::{Error, Result};
use crate::source::NetlistSource;
use crate::validate::validate_lines;

/// A validated netlist.
///
/// Lines are trimmed and blank lines are dropped. The first line is the
/// title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Netlist {
    lines: Vec<String>,
}

impl Netlist {
    /// Build a netlist from any accepted source and validate it.
    pub fn new(source: impl Into<NetlistSource>) -> Result<Self> {
        let source = source.into();
        let lines = normalize(source.read_lines()?);

        if lines.is_empty() {
            return Err(Error::Empty);
        }

        validate_lines(&lines)?;
        log::debug!("netlist '{}' accepted with {} lines", lines[0], lines.len());

        Ok(Self { lines })
    }

    /// Build a netlist from a string that is either a file path or netlist
    /// text, see [`NetlistSource::detect`].
    pub fn from_input(input: &str) -> Result<Self> {
        Self::new(NetlistSource::detect(input)?)
    }

    pub fn title(&self) -> &str {
        &self.lines[0]
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines after the title.
    pub fn body(&self) -> &[String] {
        &self.lines[1..]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always `false`: a netlist holds at least its title.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Netlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

impl<'a> IntoIterator for &'a Netlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

fn normalize(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

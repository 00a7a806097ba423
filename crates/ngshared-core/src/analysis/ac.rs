//! AC small-signal arguments (`ac variation npoints fstart fstop`).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::sweep::check_sim_param;
use crate::units::to_num;

use super::args::{ArgsBuilder, FieldSchema};

/// Frequency spacing of an AC sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AcVariation {
    /// Logarithmic, `npoints` per decade.
    #[default]
    Dec,
    /// Logarithmic, `npoints` per octave.
    Oct,
    /// Linear, `npoints` in total.
    Lin,
}

impl FromStr for AcVariation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dec" => Ok(AcVariation::Dec),
            "oct" => Ok(AcVariation::Oct),
            "lin" => Ok(AcVariation::Lin),
            _ => Err(Error::UnknownVariation(s.to_string())),
        }
    }
}

impl fmt::Display for AcVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AcVariation::Dec => "dec",
            AcVariation::Oct => "oct",
            AcVariation::Lin => "lin",
        };
        f.write_str(name)
    }
}

/// Validated arguments of an AC analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcArgs {
    variation: String,
    npoints: String,
    fstart: String,
    fstop: String,
    // Parsed from `variation` by `check`.
    spacing: AcVariation,
}

impl AcArgs {
    pub fn builder() -> ArgsBuilder<Self> {
        ArgsBuilder::new()
    }

    /// Parse a command string such as `dec 10 1k 10meg`.
    pub fn parse(args: &str) -> Result<Self> {
        Self::builder().positional([args]).build()
    }

    pub fn variation(&self) -> AcVariation {
        self.spacing
    }

    pub fn npoints(&self) -> &str {
        &self.npoints
    }

    pub fn fstart(&self) -> &str {
        &self.fstart
    }

    pub fn fstop(&self) -> &str {
        &self.fstop
    }
}

impl FieldSchema for AcArgs {
    const KEYWORD: &'static str = "ac";
    const FIELDS: &'static [&'static str] = &["variation", "npoints", "fstart", "fstop"];
    const REQUIRED: &'static [&'static str] = &["variation", "npoints", "fstart", "fstop"];

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "variation" => &self.variation,
            "npoints" => &self.npoints,
            "fstart" => &self.fstart,
            "fstop" => &self.fstop,
            _ => return None,
        };
        Some(value)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            "variation" => &mut self.variation,
            "npoints" => &mut self.npoints,
            "fstart" => &mut self.fstart,
            "fstop" => &mut self.fstop,
            _ => return None,
        };
        Some(value)
    }

    fn check(&mut self) -> Result<()> {
        self.spacing = self.variation.parse()?;

        // The point count plays the role of the step.
        check_sim_param(
            to_num(&self.fstart)?,
            to_num(&self.fstop)?,
            Some(to_num(&self.npoints)?),
        )?;
        Ok(())
    }
}

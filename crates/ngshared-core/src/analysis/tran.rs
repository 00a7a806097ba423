//! Transient arguments (`tran tstep tstop [tstart [tmax]]`).

use crate::error::Result;
use crate::sweep::check_sim_param;
use crate::units::to_num;

use super::args::{ArgsBuilder, FieldSchema};

/// Validated arguments of a transient analysis.
///
/// `tstart` defaults to `0` and is always sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranArgs {
    tstep: String,
    tstop: String,
    tstart: String,
    tmax: String,
}

impl Default for TranArgs {
    fn default() -> Self {
        Self {
            tstep: String::new(),
            tstop: String::new(),
            tstart: "0".to_string(),
            tmax: String::new(),
        }
    }
}

impl TranArgs {
    pub fn builder() -> ArgsBuilder<Self> {
        ArgsBuilder::new()
    }

    /// Parse a command string such as `1u 10m` or `1n 10n 0 11n`.
    pub fn parse(args: &str) -> Result<Self> {
        Self::builder().positional([args]).build()
    }

    pub fn tstep(&self) -> &str {
        &self.tstep
    }

    pub fn tstop(&self) -> &str {
        &self.tstop
    }

    pub fn tstart(&self) -> &str {
        &self.tstart
    }

    pub fn tmax(&self) -> Option<&str> {
        (!self.tmax.is_empty()).then_some(self.tmax.as_str())
    }
}

impl FieldSchema for TranArgs {
    const KEYWORD: &'static str = "tran";
    const FIELDS: &'static [&'static str] = &["tstep", "tstop", "tstart", "tmax"];
    const REQUIRED: &'static [&'static str] = &["tstep", "tstop"];

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "tstep" => &self.tstep,
            "tstop" => &self.tstop,
            "tstart" => &self.tstart,
            "tmax" => &self.tmax,
            _ => return None,
        };
        Some(value)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            "tstep" => &mut self.tstep,
            "tstop" => &mut self.tstop,
            "tstart" => &mut self.tstart,
            "tmax" => &mut self.tmax,
            _ => return None,
        };
        Some(value)
    }

    fn check(&mut self) -> Result<()> {
        check_sim_param(
            to_num(&self.tstart)?,
            to_num(&self.tstop)?,
            Some(to_num(&self.tstep)?),
        )?;
        Ok(())
    }
}

//! Analysis commands and their argument builders.
//!
//! Every analysis kind has a fixed, ordered field schema:
//!
//! | Kind | Fields | Required |
//! |------|--------|----------|
//! | DC   | src start stop step src2 start2 stop2 step2 | src start stop step |
//! | AC   | variation npoints fstart fstop | all |
//! | TRAN | tstep tstop tstart tmax | tstep tstop |
//!
//! Arguments may be supplied as one command string, as positional values or
//! as named fields through [`ArgsBuilder`]; see its documentation for the
//! resolution order.

mod ac;
mod args;
mod dc;
mod tran;

use std::fmt;
use std::str::FromStr;

pub use ac::{AcArgs, AcVariation};
pub use args::{ArgValue, ArgsBuilder, FieldSchema};
pub use dc::DcArgs;
pub use tran::TranArgs;

use crate::error::{Error, Result};

/// An analysis ready to be sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Analysis {
    /// Operating point (`op`).
    Op,
    /// DC sweep (`dc ...`).
    Dc(DcArgs),
    /// AC small-signal analysis (`ac ...`).
    Ac(AcArgs),
    /// Transient analysis (`tran ...`).
    Tran(TranArgs),
}

impl Analysis {
    /// Engine keyword of this analysis.
    pub fn keyword(&self) -> &'static str {
        match self {
            Analysis::Op => "op",
            Analysis::Dc(_) => DcArgs::KEYWORD,
            Analysis::Ac(_) => AcArgs::KEYWORD,
            Analysis::Tran(_) => TranArgs::KEYWORD,
        }
    }

    /// The command line submitted to the engine.
    pub fn command_line(&self) -> String {
        match self {
            Analysis::Op => "op".to_string(),
            Analysis::Dc(args) => args.command_line(),
            Analysis::Ac(args) => args.command_line(),
            Analysis::Tran(args) => args.command_line(),
        }
    }

    /// Build an analysis from its keyword and argument string.
    pub fn from_parts(keyword: &str, args: &str) -> Result<Self> {
        match keyword.to_lowercase().as_str() {
            "op" => Ok(Analysis::Op),
            "dc" => DcArgs::parse(args).map(Analysis::Dc),
            "ac" => AcArgs::parse(args).map(Analysis::Ac),
            "tran" => TranArgs::parse(args).map(Analysis::Tran),
            _ => Err(Error::UnknownAnalysis(keyword.to_string())),
        }
    }
}

impl FromStr for Analysis {
    type Err = Error;

    /// Parse a full command line such as `dc v1 0 1 0.1` or `op`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (keyword, args) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        Self::from_parts(keyword, args)
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

impl From<DcArgs> for Analysis {
    fn from(args: DcArgs) -> Self {
        Analysis::Dc(args)
    }
}

impl From<AcArgs> for Analysis {
    fn from(args: AcArgs) -> Self {
        Analysis::Ac(args)
    }
}

impl From<TranArgs> for Analysis {
    fn from(args: TranArgs) -> Self {
        Analysis::Tran(args)
    }
}

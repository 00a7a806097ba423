//! Engine-independent building blocks for driving ngspice.
//!
//! This crate provides the pieces of the ngspice binding that never touch
//! the native library:
//! - numeric literal parsing with ngspice scale suffixes ([`units`])
//! - sweep direction checks ([`sweep`])
//! - validated DC, AC and TRAN argument sets ([`analysis`])
//!
//! # Example
//!
//! ```
//! use ngshared_core::analysis::{Analysis, DcArgs};
//!
//! let dc = DcArgs::builder()
//!     .set("src", "v1")
//!     .set("start", 0)
//!     .set("stop", 1)
//!     .set("step", 0.1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(Analysis::Dc(dc).command_line(), "dc v1 0 1 0.1");
//! ```

pub mod analysis;
pub mod error;
pub mod sweep;
pub mod units;

pub use analysis::{AcArgs, AcVariation, Analysis, ArgValue, ArgsBuilder, DcArgs, FieldSchema, TranArgs};
pub use error::{Error, Result};
pub use sweep::{SweepError, check_sim_param};
pub use units::{format_value, to_num};

//! # ngshared
//!
//! Drive the ngspice circuit simulator through its shared library.
//!
//! ngshared provides:
//! - Runtime loading of `libngspice` and its callback plumbing
//! - A serialized command channel with captured output and status
//! - Typed DC, AC and transient analysis commands
//! - A validated SPICE netlist model
//! - Decoding of real and complex result vectors
//!
//! ## Quick Start
//!
//! ```rust
//! use ngshared::prelude::*;
//!
//! let netlist = Netlist::new(NetlistSource::Text(
//!     "Voltage Divider\nV1 1 0 DC 10\nR1 1 2 1k\nR2 2 0 1k\n.end\n".to_string(),
//! ))
//! .unwrap();
//! let sweep: Analysis = "dc v1 0 10 1".parse().unwrap();
//!
//! assert_eq!(netlist.title(), "Voltage Divider");
//! assert_eq!(sweep.command_line(), "dc v1 0 10 1");
//! ```
//!
//! ## Running Simulations
//!
//! ```rust,no_run
//! use ngshared::prelude::*;
//!
//! # fn main() -> ngshared::Result<()> {
//! let session = Session::open(&SessionConfig::from_env())?;
//!
//! let netlist = Netlist::new(NetlistSource::Text(
//!     "Voltage Divider\nV1 1 0 DC 10\nR1 1 2 1k\nR2 2 0 1k\n.end\n".to_string(),
//! ))?;
//! let mut sim = Simulation::new(netlist);
//! sim.setup(Analysis::Dc(DcArgs::parse("v1 0 10 1")?));
//! sim.run(&session)?;
//!
//! for (name, data) in sim.vectors(&session, None)? {
//!     println!("{}: {} samples", name, data.len());
//! }
//! # Ok(())
//! # }
//! ```

// Re-export member crates
pub use ngshared_core as core;
pub use ngshared_engine as engine;
pub use ngshared_netlist as netlist;
pub use ngshared_sys as sys;

// ============================================================================
// Convenient re-exports from ngshared_core
// ============================================================================

pub use ngshared_core::{
    AcArgs,
    AcVariation,
    // Analysis commands
    Analysis,
    ArgValue,
    ArgsBuilder,
    DcArgs,
    // Errors
    Error as ArgumentError,
    FieldSchema,
    SweepError,
    TranArgs,
    check_sim_param,
    // Units
    format_value,
    to_num,
};

// ============================================================================
// Convenient re-exports from ngshared_netlist
// ============================================================================

pub use ngshared_netlist::{
    DOT_COMMANDS,
    // Errors
    Error as NetlistError,
    // Netlist
    Netlist,
    NetlistSource,
    SyntaxIssue,
    validate_lines,
};

// ============================================================================
// Convenient re-exports from ngshared_engine
// ============================================================================

pub use ngshared_engine::{
    CommandOutput,
    // Engine seam
    Engine,
    // Errors
    Error,
    LIBRARY_PATH_ENV,
    NativeEngine,
    OutputBridge,
    QUIT_MARKER,
    Result,
    SampleKind,
    // Session
    Session,
    SessionConfig,
    SimOption,
    Simulation,
    // Vectors
    VectorData,
    VectorFlags,
    VectorInfo,
    VectorType,
};

/// Re-export of num_complex's Complex type.
pub use num_complex::Complex;

/// Re-export of the 64-bit complex sample type.
pub use num_complex::Complex64;

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module containing commonly used types and traits.
///
/// ```rust
/// use ngshared::prelude::*;
/// ```
pub mod prelude {
    // Analyses
    pub use crate::{AcArgs, AcVariation, Analysis, DcArgs, TranArgs};

    // Netlist
    pub use crate::{Netlist, NetlistSource};

    // Session
    pub use crate::{Session, SessionConfig, SimOption, Simulation};

    // Results
    pub use crate::{SampleKind, VectorData, VectorInfo, VectorType};

    // Common external types
    pub use crate::Complex64;
}

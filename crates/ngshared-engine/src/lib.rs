//! Safe ngspice session on top of `ngshared-sys`.
//!
//! This crate provides:
//! - [`OutputBridge`]: the callbacks registered with ngspice, buffering
//!   printed output, status messages and error reports
//! - [`Session`]: the synchronous command channel plus plot and vector
//!   introspection
//! - [`RawVector`] / [`VectorData`]: decoding of engine-owned sample buffers
//!   into owned arrays
//! - [`Simulation`]: a validated netlist paired with an analysis
//!
//! # Example
//!
//! ```no_run
//! use ngshared_core::analysis::DcArgs;
//! use ngshared_engine::{Session, SessionConfig};
//!
//! let session = Session::open(&SessionConfig::from_env())?;
//! session.load_netlist(vec!["divider", "V1 1 0 DC 1", "R1 1 2 1k", "R2 2 0 1k", ".end"])?;
//! session.run_dc(&DcArgs::parse("v1 0 1 0.1")?)?;
//!
//! let v2 = session.get_data("V(2)", None)?;
//! assert_eq!(v2.len(), 11);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod native;
pub mod options;
pub mod session;
pub mod simulation;
pub mod vector;

pub use bridge::{OutputBridge, QUIT_MARKER};
pub use config::{LIBRARY_PATH_ENV, SessionConfig};
pub use engine::Engine;
pub use error::{Error, Result};
pub use native::NativeEngine;
pub use options::SimOption;
pub use session::{CommandOutput, Session};
pub use simulation::Simulation;
pub use vector::{RawVector, SampleKind, VectorData, VectorFlags, VectorInfo, VectorType};

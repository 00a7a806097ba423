//! Error types for ngshared-engine.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid analysis arguments, raised before the engine is touched.
    #[error(transparent)]
    Arguments(#[from] ngshared_core::Error),

    /// Invalid netlist, raised before the engine is touched.
    #[error(transparent)]
    Netlist(#[from] ngshared_netlist::Error),

    #[error("no vector named '{vector}' in plot '{plot}'")]
    UnknownVector { plot: String, vector: String },

    #[error("no plot named '{0}'")]
    UnknownPlot(String),

    /// ngspice wrote to stderr while processing a command.
    #[error("ngspice error: {0}")]
    Engine(String),

    /// ngspice asked to exit with an error status or without quitting.
    #[error("ngspice exited abnormally (status {status}, unload {unload}, quit {quit})")]
    EngineFatal { status: i32, unload: bool, quit: bool },

    #[error("ngspice rejected '{command}' with status {status}")]
    CommandRejected { command: String, status: i32 },

    #[error("cannot decode vector '{vector}': {reason}")]
    Decode { vector: String, reason: String },

    #[error("no usable ngspice library, tried {tried:?}: {reason}")]
    LibraryLoad { tried: Vec<PathBuf>, reason: String },

    #[error("ngspice_Init failed with status {0}")]
    InitFailed(i32),

    /// A native session is already bound in this process.
    #[error("ngspice is already initialized in this process")]
    AlreadyInitialized,

    #[error("no analysis set up for this simulation")]
    NoAnalysis,

    #[error("text contains an interior NUL byte: {0:?}")]
    NulByte(String),
}

pub type Result<T> = std::result::Result<T, Error>;

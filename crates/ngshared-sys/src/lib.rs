//! Raw bindings to the ngspice shared library (`libngspice`).
//!
//! This crate mirrors the C types of `sharedspice.h` and resolves the API
//! functions from a dynamically loaded library. You probably want the
//! `ngshared-engine` crate instead, which wraps them in a safe session.
//!
//! # Safety
//!
//! Every function pointer in [`NgspiceLibrary`] is `unsafe` to call:
//! - string arguments must be NUL-terminated and outlive the call
//! - returned pointers are owned by ngspice and may be freed or reused by
//!   the next call into the library
//! - the library keeps process-wide state and is not reentrant

#![allow(non_camel_case_types)]

mod library;
mod types;

pub use library::{LoadError, NgspiceLibrary, library_filename};
pub use types::*;

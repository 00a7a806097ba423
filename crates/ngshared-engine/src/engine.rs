//! The seam between a session and the simulator behind it.

use std::ffi::{CStr, CString};

use crate::vector::RawVector;

/// Operations of the ngspice shared library API.
///
/// [`NativeEngine`](crate::NativeEngine) implements this over a loaded
/// `libngspice`. Commands take `&mut self`, which ends every borrowed
/// [`RawVector`] before the engine can change state.
pub trait Engine: Send {
    /// `ngSpice_Command`: run one command line, blocking until it finishes.
    fn command(&mut self, command: &CStr) -> i32;

    /// `ngSpice_Circ`: load a circuit given as lines.
    fn circ(&mut self, lines: &[CString]) -> i32;

    /// `ngSpice_AllPlots`: plot names, most recent first.
    fn all_plots(&self) -> Vec<String>;

    /// `ngSpice_AllVecs`: vector names of `plot`.
    fn all_vecs(&self, plot: &CStr) -> Vec<String>;

    /// `ngSpice_CurPlot`.
    fn current_plot(&self) -> Option<String>;

    /// `ngGet_Vec_Info`: descriptor of a vector, plain or `plot.vector`.
    fn vector_info(&self, name: &CStr) -> Option<RawVector<'_>>;

    /// `ngSpice_running`: whether a background simulation is active.
    fn is_running(&self) -> bool;
}

//! Dynamic binding of the ngspice API functions.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use libloading::Library;
use thiserror::Error;

use crate::types::*;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: libloading::Error,
    },

    #[error("symbol {name} not found: {source}")]
    Symbol {
        name: &'static str,
        source: libloading::Error,
    },
}

/// A loaded `libngspice` with its API functions resolved.
///
/// The function pointers stay valid for as long as this value is alive.
pub struct NgspiceLibrary {
    pub init: NgSpiceInit,
    pub command: NgSpiceCommand,
    pub circ: NgSpiceCirc,
    pub get_vec_info: NgGetVecInfo,
    pub cur_plot: NgSpiceCurPlot,
    pub all_plots: NgSpiceAllPlots,
    pub all_vecs: NgSpiceAllVecs,
    pub running: NgSpiceRunning,
    path: PathBuf,
    _library: Library,
}

impl NgspiceLibrary {
    /// Open the library at `path` and resolve every API function.
    ///
    /// # Safety
    ///
    /// Loading a shared library runs its initializers. `path` must point to
    /// an ngspice build exporting the `sharedspice.h` API.
    pub unsafe fn open(path: impl AsRef<OsStr>) -> Result<Self, LoadError> {
        let path = PathBuf::from(path.as_ref());
        let library = unsafe { Library::new(&path) }.map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;

        // SAFETY: the signatures below match sharedspice.h.
        unsafe {
            Ok(Self {
                init: symbol(&library, "ngSpice_Init")?,
                command: symbol(&library, "ngSpice_Command")?,
                circ: symbol(&library, "ngSpice_Circ")?,
                get_vec_info: symbol(&library, "ngGet_Vec_Info")?,
                cur_plot: symbol(&library, "ngSpice_CurPlot")?,
                all_plots: symbol(&library, "ngSpice_AllPlots")?,
                all_vecs: symbol(&library, "ngSpice_AllVecs")?,
                running: symbol(&library, "ngSpice_running")?,
                path,
                _library: library,
            })
        }
    }

    /// Path the library was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for NgspiceLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NgspiceLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, LoadError> {
    let mut raw = name.as_bytes().to_vec();
    raw.push(0);
    unsafe { library.get::<T>(&raw) }
        .map(|sym| *sym)
        .map_err(|source| LoadError::Symbol { name, source })
}

/// Platform file name of the shared library, e.g. `libngspice.so`.
pub fn library_filename() -> std::ffi::OsString {
    libloading::library_filename("ngspice")
}

//! [`Engine`] implementation over the ngspice shared library.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::{Path, PathBuf};
use std::ptr;
use std::sync::Arc;

use ngshared_sys::NgspiceLibrary;

use crate::bridge::{OutputBridge, controlled_exit, send_char, send_stat};
use crate::config::SessionConfig;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::vector::RawVector;

/// A loaded and initialized `libngspice`.
#[derive(Debug)]
pub struct NativeEngine {
    library: NgspiceLibrary,
    // Declared after `library` so it is dropped last; ngspice holds a
    // pointer to it.
    _bridge: Arc<OutputBridge>,
}

impl NativeEngine {
    /// Load the first usable library from `config` and register `bridge`
    /// as the receiver of its callbacks.
    pub fn load(config: &SessionConfig, bridge: Arc<OutputBridge>) -> Result<Self> {
        let library = open_first(&config.candidates())?;
        log::debug!("loaded ngspice from {}", library.path().display());

        // SAFETY: the callbacks match the sharedspice.h typedefs and the
        // bridge outlives the library handle.
        let status = unsafe {
            (library.init)(
                Some(send_char),
                Some(send_stat),
                Some(controlled_exit),
                None,
                None,
                None,
                bridge.user_data(),
            )
        };
        if status != 0 {
            return Err(Error::InitFailed(status));
        }

        Ok(Self {
            library,
            _bridge: bridge,
        })
    }

    /// File the library was loaded from.
    pub fn library_path(&self) -> &Path {
        self.library.path()
    }
}

fn open_first(candidates: &[PathBuf]) -> Result<NgspiceLibrary> {
    let mut last_error = String::from("no candidate paths");

    for path in candidates {
        // SAFETY: candidates name ngspice builds by configuration.
        match unsafe { NgspiceLibrary::open(path) } {
            Ok(library) => return Ok(library),
            Err(e) => {
                log::debug!("{}", e);
                last_error = e.to_string();
            }
        }
    }

    Err(Error::LibraryLoad {
        tried: candidates.to_vec(),
        reason: last_error,
    })
}

/// Collect a NULL-terminated array of C strings.
///
/// # Safety
///
/// `array` must be null or point to a NULL-terminated array of valid C strings.
unsafe fn collect_strings(array: *mut *mut c_char) -> Vec<String> {
    let mut names = Vec::new();
    if array.is_null() {
        return names;
    }
    let mut i = 0;
    loop {
        // SAFETY: the array is NULL-terminated.
        let entry = unsafe { *array.add(i) };
        if entry.is_null() {
            break;
        }
        names.push(unsafe { CStr::from_ptr(entry) }.to_string_lossy().into_owned());
        i += 1;
    }
    names
}

impl Engine for NativeEngine {
    fn command(&mut self, command: &CStr) -> i32 {
        // SAFETY: ngspice only reads the command text.
        unsafe { (self.library.command)(command.as_ptr().cast_mut()) }
    }

    fn circ(&mut self, lines: &[CString]) -> i32 {
        let mut array: Vec<*mut c_char> = lines.iter().map(|l| l.as_ptr().cast_mut()).collect();
        array.push(ptr::null_mut());
        // SAFETY: NULL-terminated array of strings that outlive the call;
        // ngspice copies the lines.
        unsafe { (self.library.circ)(array.as_mut_ptr()) }
    }

    fn all_plots(&self) -> Vec<String> {
        unsafe { collect_strings((self.library.all_plots)()) }
    }

    fn all_vecs(&self, plot: &CStr) -> Vec<String> {
        unsafe { collect_strings((self.library.all_vecs)(plot.as_ptr().cast_mut())) }
    }

    fn current_plot(&self) -> Option<String> {
        let name = unsafe { (self.library.cur_plot)() };
        if name.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
    }

    fn vector_info(&self, name: &CStr) -> Option<RawVector<'_>> {
        // SAFETY: the descriptor stays valid until the next command, which
        // requires `&mut self`.
        unsafe { RawVector::from_raw((self.library.get_vec_info)(name.as_ptr().cast_mut())) }
    }

    fn is_running(&self) -> bool {
        unsafe { (self.library.running)() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_strings() {
        let names = [CString::new("dc1").unwrap(), CString::new("const").unwrap()];
        let mut array: Vec<*mut c_char> = names.iter().map(|n| n.as_ptr().cast_mut()).collect();
        array.push(ptr::null_mut());

        let collected = unsafe { collect_strings(array.as_mut_ptr()) };
        assert_eq!(collected, vec!["dc1", "const"]);
        assert!(unsafe { collect_strings(ptr::null_mut()) }.is_empty());
    }

    #[test]
    fn test_load_reports_every_candidate() {
        let config = SessionConfig {
            library_path: Some(PathBuf::from("/no/such/libngspice.so")),
            search_paths: vec![PathBuf::from("/also/missing/libngspice.so")],
        };
        let err = NativeEngine::load(&config, Arc::new(OutputBridge::new())).unwrap_err();
        match err {
            Error::LibraryLoad { tried, .. } => assert_eq!(tried.len(), 2),
            other => panic!("expected load error, got {other}"),
        }
    }
}

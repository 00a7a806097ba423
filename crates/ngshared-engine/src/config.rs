//! Session configuration.

use std::path::PathBuf;

/// Environment variable naming the ngspice shared library to load.
pub const LIBRARY_PATH_ENV: &str = "NGSPICE_LIBRARY_PATH";

/// Configuration for opening a native session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Explicit library path; tried before `search_paths`.
    pub library_path: Option<PathBuf>,
    /// Fallback locations, tried in order.
    pub search_paths: Vec<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            search_paths: vec![
                PathBuf::from("/usr/local/lib/libngspice.so.0"),
                PathBuf::from("/usr/lib/libngspice.so.0"),
                PathBuf::from("/usr/lib/x86_64-linux-gnu/libngspice.so.0"),
                // Bare file name: resolved by the system loader.
                PathBuf::from(ngshared_sys::library_filename()),
            ],
        }
    }
}

impl SessionConfig {
    /// Default configuration, with `NGSPICE_LIBRARY_PATH` as the explicit
    /// library path when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = std::env::var_os(LIBRARY_PATH_ENV).filter(|p| !p.is_empty()) {
            config.library_path = Some(PathBuf::from(path));
        }
        config
    }

    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    /// Paths to try, in order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        self.library_path
            .iter()
            .chain(self.search_paths.iter())
            .cloned()
            .collect()
    }
}

//! The ngspice session: command channel, netlist loading and result access.

use std::ffi::CString;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use indexmap::IndexMap;
use ngshared_core::analysis::{AcArgs, Analysis, DcArgs, TranArgs};
use ngshared_netlist::{Netlist, NetlistSource};

use crate::bridge::OutputBridge;
use crate::config::SessionConfig;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::native::NativeEngine;
use crate::options::SimOption;
use crate::vector::{VectorData, VectorInfo};

/// Set once a native engine has been bound in this process.
static NATIVE_BOUND: AtomicBool = AtomicBool::new(false);

/// Everything captured while the engine processed one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Printed lines, in order.
    pub lines: Vec<String>,
    /// Status messages, in order.
    pub status: Vec<String>,
}

/// One simulator instance.
///
/// ngspice keeps process-wide state and cannot be re-initialized, so
/// [`Session::open`] succeeds at most once per process. Pass the session by
/// reference to whatever needs the engine.
///
/// All operations block until the engine is done. The engine and its
/// output queues sit behind one lock, so commands issued from several
/// threads run one after another.
pub struct Session {
    engine: Mutex<Box<dyn Engine>>,
    bridge: Arc<OutputBridge>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    /// Load `libngspice` and initialize it.
    ///
    /// Fails with [`Error::AlreadyInitialized`] if a native session was
    /// already opened in this process.
    pub fn open(config: &SessionConfig) -> Result<Self> {
        if NATIVE_BOUND.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyInitialized);
        }

        let bridge = Arc::new(OutputBridge::new());
        match NativeEngine::load(config, Arc::clone(&bridge)) {
            Ok(engine) => {
                log::info!(
                    "ngspice session initialized from {}",
                    engine.library_path().display()
                );
                Ok(Self::with_engine(Box::new(engine), bridge))
            }
            Err(e) => {
                NATIVE_BOUND.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }

    /// A session over any engine whose callbacks feed `bridge`.
    pub fn with_engine(engine: Box<dyn Engine>, bridge: Arc<OutputBridge>) -> Self {
        Self {
            engine: Mutex::new(engine),
            bridge,
        }
    }

    fn engine(&self) -> MutexGuard<'_, Box<dyn Engine>> {
        self.engine
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Submit work to the engine and collect what its callbacks produced.
    fn submit(&self, label: &str, f: impl FnOnce(&mut dyn Engine) -> i32) -> Result<CommandOutput> {
        let mut engine = self.engine();

        self.bridge.reset();
        log::debug!("ngspice <- {}", label);
        let code = f(engine.as_mut());

        let output = CommandOutput {
            lines: self.bridge.drain_output(),
            status: self.bridge.drain_status(),
        };
        if let Some(err) = self.bridge.take_fault() {
            return Err(err);
        }
        if code != 0 {
            return Err(Error::CommandRejected {
                command: label.to_string(),
                status: code,
            });
        }
        Ok(output)
    }

    /// Run one command and return its printed output and status messages.
    pub fn execute(&self, command: &str) -> Result<CommandOutput> {
        let c_command = to_cstring(command)?;
        self.submit(command, |engine| engine.command(&c_command))
    }

    /// Run one command and return its printed output.
    pub fn send_command(&self, command: &str) -> Result<Vec<String>> {
        Ok(self.execute(command)?.lines)
    }

    /// Run an analysis.
    pub fn run(&self, analysis: &Analysis) -> Result<Vec<String>> {
        self.send_command(&analysis.command_line())
    }

    pub fn run_dc(&self, args: &DcArgs) -> Result<Vec<String>> {
        self.run(&Analysis::Dc(args.clone()))
    }

    pub fn run_ac(&self, args: &AcArgs) -> Result<Vec<String>> {
        self.run(&Analysis::Ac(args.clone()))
    }

    pub fn run_tran(&self, args: &TranArgs) -> Result<Vec<String>> {
        self.run(&Analysis::Tran(args.clone()))
    }

    pub fn run_op(&self) -> Result<Vec<String>> {
        self.run(&Analysis::Op)
    }

    /// Load a netlist without validating it.
    ///
    /// Files are handed to the engine's `source` command; text and line
    /// lists go through `ngSpice_Circ`.
    pub fn load_netlist(&self, source: impl Into<NetlistSource>) -> Result<Vec<String>> {
        match source.into() {
            NetlistSource::Path(path) => self.send_command(&format!("source {}", path.display())),
            source => {
                let lines = source.read_lines()?;
                self.load_lines(&lines)
            }
        }
    }

    /// Load a validated netlist.
    pub fn load(&self, netlist: &Netlist) -> Result<Vec<String>> {
        self.load_lines(netlist.lines())
    }

    fn load_lines(&self, lines: &[String]) -> Result<Vec<String>> {
        let c_lines = lines
            .iter()
            .map(|line| to_cstring(line))
            .collect::<Result<Vec<_>>>()?;
        let label = format!("circuit ({} lines)", lines.len());
        Ok(self.submit(&label, |engine| engine.circ(&c_lines))?.lines)
    }

    /// Send each option as `option <name>[=<value>]`; returns the output of
    /// all of them.
    pub fn set_options<I, O>(&self, options: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = O>,
        O: Into<SimOption>,
    {
        let mut output = Vec::new();
        for option in options {
            output.extend(self.send_command(&option.into().command_line())?);
        }
        Ok(output)
    }

    /// Destroy the named plots, or every plot when `names` is empty.
    pub fn clear_plots<I, S>(&self, names: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        let target = if names.is_empty() {
            "all".to_string()
        } else {
            names.join(" ")
        };
        self.send_command(&format!("destroy {}", target))
    }

    /// Destroy every plot.
    pub fn reset(&self) -> Result<Vec<String>> {
        self.clear_plots(std::iter::empty::<&str>())
    }

    /// Whether the engine reports a running background simulation.
    pub fn is_running(&self) -> bool {
        self.engine().is_running()
    }

    /// All plot names, most recent first. `const` is always present.
    pub fn get_plot_names(&self) -> Vec<String> {
        self.engine().all_plots()
    }

    pub fn current_plot(&self) -> Result<String> {
        self.engine()
            .current_plot()
            .ok_or_else(|| Error::Engine("no current plot".to_string()))
    }

    fn resolve_plot(&self, plot: Option<&str>) -> Result<String> {
        let plot = match plot {
            Some(plot) => plot.to_string(),
            None => self.current_plot()?,
        };
        if self.get_plot_names().contains(&plot) {
            Ok(plot)
        } else {
            Err(Error::UnknownPlot(plot))
        }
    }

    /// Vector names of `plot`, or of the current plot.
    pub fn get_vector_names(&self, plot: Option<&str>) -> Result<Vec<String>> {
        let plot = self.resolve_plot(plot)?;
        Ok(self.engine().all_vecs(&to_cstring(&plot)?))
    }

    /// Resolve a vector name to `plot.vector`, checking that it exists.
    ///
    /// A name whose part before the first `.` is a plot name is taken as
    /// already qualified and `plot` is ignored. Other dotted names, such as
    /// subcircuit nodes like `x1.n2`, are looked up as they are.
    fn qualify(&self, vector: &str, plot: Option<&str>) -> Result<String> {
        let (plot, name) = match vector.split_once('.') {
            Some((prefix, name)) if self.get_plot_names().iter().any(|p| p == prefix) => {
                (prefix.to_string(), name)
            }
            _ => (self.resolve_plot(plot)?, vector),
        };

        if self.engine().all_vecs(&to_cstring(&plot)?).iter().any(|v| v == name) {
            Ok(format!("{}.{}", plot, name))
        } else {
            Err(Error::UnknownVector {
                plot,
                vector: name.to_string(),
            })
        }
    }

    /// Copy a vector's samples out of the engine.
    pub fn get_data(&self, vector: &str, plot: Option<&str>) -> Result<VectorData> {
        let qualified = self.qualify(vector, plot)?;
        self.read_vector(&qualified)
    }

    /// Metadata of a vector.
    pub fn vector_info(&self, vector: &str, plot: Option<&str>) -> Result<VectorInfo> {
        let qualified = self.qualify(vector, plot)?;
        let engine = self.engine();
        let raw = engine
            .vector_info(&to_cstring(&qualified)?)
            .ok_or_else(|| unknown_vector(&qualified))?;
        Ok(raw.info())
    }

    /// Every vector of `plot` (or the current plot), in engine order.
    pub fn get_all_data(&self, plot: Option<&str>) -> Result<IndexMap<String, VectorData>> {
        let plot = self.resolve_plot(plot)?;
        let names = self.engine().all_vecs(&to_cstring(&plot)?);

        let mut data = IndexMap::with_capacity(names.len());
        for name in names {
            let values = self.read_vector(&format!("{}.{}", plot, name))?;
            data.insert(name, values);
        }
        Ok(data)
    }

    fn read_vector(&self, qualified: &str) -> Result<VectorData> {
        let c_name = to_cstring(qualified)?;
        // The descriptor is decoded while the engine lock is held.
        let engine = self.engine();
        let raw = engine
            .vector_info(&c_name)
            .ok_or_else(|| unknown_vector(qualified))?;
        let data = raw.decode()?;
        log::trace!("decoded {} ({} samples)", qualified, data.len());
        Ok(data)
    }
}

fn unknown_vector(qualified: &str) -> Error {
    let (plot, vector) = qualified.split_once('.').unwrap_or(("", qualified));
    Error::UnknownVector {
        plot: plot.to_string(),
        vector: vector.to_string(),
    }
}

fn to_cstring(text: &str) -> Result<CString> {
    CString::new(text).map_err(|_| Error::NulByte(text.to_string()))
}

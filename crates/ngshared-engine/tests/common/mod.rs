//! In-process stand-in for libngspice.
//!
//! The fake answers the same API as the shared library: it prints through
//! the real `SendChar`/`SendStat`/`ControlledExit` callbacks and hands out
//! genuine `vector_info` descriptors that point into buffers it owns.

#![allow(dead_code)]

use std::ffi::{CStr, CString};
use std::sync::{Arc, Mutex};

use ngshared_core::to_num;
use ngshared_engine::bridge::{controlled_exit, send_char, send_stat};
use ngshared_engine::{Engine, OutputBridge, RawVector, Session};
use ngshared_sys as sys;

/// Commands and circuits received by a [`FakeEngine`].
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub struct FakeVector {
    name: CString,
    real: Vec<f64>,
    comp: Vec<sys::ngcomplex_t>,
    info: Box<sys::vector_info>,
}

// SAFETY: the raw pointers in `info` only refer to buffers owned by the
// same value, and the buffers are never mutated after construction.
unsafe impl Send for FakeVector {}

impl FakeVector {
    pub fn real(name: &str, vector_type: i32, values: Vec<f64>) -> Self {
        Self::build(name, vector_type, sys::VF_REAL, values, Vec::new())
    }

    pub fn complex(name: &str, vector_type: i32, values: Vec<(f64, f64)>) -> Self {
        let comp = values
            .into_iter()
            .map(|(cx_real, cx_imag)| sys::ngcomplex_t { cx_real, cx_imag })
            .collect();
        Self::build(name, vector_type, sys::VF_COMPLEX, Vec::new(), comp)
    }

    fn build(
        name: &str,
        vector_type: i32,
        flags: i16,
        mut real: Vec<f64>,
        mut comp: Vec<sys::ngcomplex_t>,
    ) -> Self {
        let name = CString::new(name).unwrap();
        let length = real.len().max(comp.len()) as i32;
        let info = Box::new(sys::vector_info {
            v_name: name.as_ptr().cast_mut(),
            v_type: vector_type,
            v_flags: flags | sys::VF_PERMANENT,
            v_realdata: if real.is_empty() {
                std::ptr::null_mut()
            } else {
                real.as_mut_ptr()
            },
            v_compdata: if comp.is_empty() {
                std::ptr::null_mut()
            } else {
                comp.as_mut_ptr()
            },
            v_length: length,
        });
        Self {
            name,
            real,
            comp,
            info,
        }
    }

    fn name(&self) -> &str {
        self.name.to_str().unwrap()
    }
}

pub struct FakePlot {
    name: String,
    vectors: Vec<FakeVector>,
}

pub struct FakeEngine {
    bridge: Arc<OutputBridge>,
    plots: Vec<FakePlot>,
    current: String,
    circuit: Option<Vec<String>>,
    log: CallLog,
}

impl FakeEngine {
    pub fn new(bridge: Arc<OutputBridge>) -> Self {
        let constants = FakePlot {
            name: "const".to_string(),
            vectors: vec![
                FakeVector::real("e", sys::SV_NOTYPE, vec![std::f64::consts::E]),
                FakeVector::real("pi", sys::SV_NOTYPE, vec![std::f64::consts::PI]),
                FakeVector::complex("i", sys::SV_NOTYPE, vec![(0.0, 1.0)]),
            ],
        };
        Self {
            bridge,
            plots: vec![constants],
            current: "const".to_string(),
            circuit: None,
            log: CallLog::default(),
        }
    }

    pub fn log(&self) -> CallLog {
        Arc::clone(&self.log)
    }

    fn stdout(&self, text: &str) {
        let line = CString::new(format!("stdout {}", text)).unwrap();
        unsafe { send_char(line.as_ptr().cast_mut(), 0, self.bridge.user_data()) };
    }

    fn stderr(&self, text: &str) {
        let line = CString::new(format!("stderr {}", text)).unwrap();
        unsafe { send_char(line.as_ptr().cast_mut(), 0, self.bridge.user_data()) };
    }

    fn status(&self, text: &str) {
        let line = CString::new(text).unwrap();
        unsafe { send_stat(line.as_ptr().cast_mut(), 0, self.bridge.user_data()) };
    }

    fn exit(&self, status: i32, unload: bool, quit: bool) {
        unsafe { controlled_exit(status, unload, quit, 0, self.bridge.user_data()) };
    }

    fn next_plot_name(&self, kind: &str) -> String {
        let highest = self
            .plots
            .iter()
            .filter_map(|p| p.name.strip_prefix(kind))
            .filter_map(|n| n.parse::<usize>().ok())
            .max()
            .unwrap_or(0);
        format!("{}{}", kind, highest + 1)
    }

    fn push_plot(&mut self, kind: &str, vectors: Vec<FakeVector>) {
        let name = self.next_plot_name(kind);
        self.current = name.clone();
        self.plots.insert(0, FakePlot { name, vectors });
    }

    fn require_circuit(&self) -> bool {
        if self.circuit.is_none() {
            self.stderr("Error: there aren't any circuits loaded.");
            return false;
        }
        true
    }

    fn load_circuit(&mut self, lines: Vec<String>) {
        let title = lines.first().cloned().unwrap_or_default();
        self.circuit = Some(lines);
        self.stdout("");
        self.stdout(&format!("Circuit: {}", title));
    }

    fn run_op(&mut self) {
        if !self.require_circuit() {
            return;
        }
        self.stdout("Doing analysis at TEMP = 27.000000 and TNOM = 27.000000");
        self.push_plot(
            "op",
            vec![
                FakeVector::real("v1#branch", sys::SV_CURRENT, vec![-1e-3]),
                FakeVector::real("V(2)", sys::SV_VOLTAGE, vec![0.5]),
                FakeVector::real("V(1)", sys::SV_VOLTAGE, vec![1.0]),
                FakeVector::real("x1.n2", sys::SV_VOLTAGE, vec![0.25]),
            ],
        );
        self.status("--ready--");
    }

    fn run_dc(&mut self, args: &[&str]) {
        if !self.require_circuit() {
            return;
        }
        let sweep = |start: &str, stop: &str, step: &str| -> Vec<f64> {
            let (start, stop, step) = (
                to_num(start).unwrap(),
                to_num(stop).unwrap(),
                to_num(step).unwrap(),
            );
            let n = ((stop - start) / step + 1e-9).floor() as usize + 1;
            (0..n).map(|i| start + i as f64 * step).collect()
        };
        let mut values = sweep(args[2], args[3], args[4]);
        if args.len() >= 9 {
            let outer = sweep(args[6], args[7], args[8]).len();
            values = (0..outer).flat_map(|_| values.clone()).collect();
        }

        self.stdout("Doing analysis at TEMP = 27.000000 and TNOM = 27.000000");
        self.push_plot(
            "dc",
            vec![
                FakeVector::real("v1#branch", sys::SV_CURRENT, values.iter().map(|v| -v / 3e3).collect()),
                FakeVector::real("v2#branch", sys::SV_CURRENT, vec![0.0; values.len()]),
                FakeVector::real("V(2)", sys::SV_VOLTAGE, values.iter().map(|v| v * 2.0 / 3.0).collect()),
                FakeVector::real("V(1)", sys::SV_VOLTAGE, values.clone()),
                FakeVector::real("v-sweep", sys::SV_VOLTAGE, values),
            ],
        );
        self.status("--ready--");
    }

    fn run_ac(&mut self, args: &[&str]) {
        if !self.require_circuit() {
            return;
        }
        let points = to_num(args[2]).unwrap() as usize;
        let fstart = to_num(args[3]).unwrap();
        let fstop = to_num(args[4]).unwrap();
        let decades = (fstop / fstart).log10().round() as usize;
        let n = points * decades + 1;
        let freqs: Vec<f64> = (0..n)
            .map(|i| fstart * 10f64.powf(i as f64 / points as f64))
            .collect();

        self.push_plot(
            "ac",
            vec![
                FakeVector::complex("frequency", sys::SV_FREQUENCY, freqs.iter().map(|&f| (f, 0.0)).collect()),
                FakeVector::complex("V(1)", sys::SV_VOLTAGE, vec![(1.0, 0.0); n]),
                FakeVector::complex(
                    "V(2)",
                    sys::SV_VOLTAGE,
                    freqs.iter().map(|&f| (1.0 / (1.0 + (f / 1e3).powi(2)), -(f / 1e3) / (1.0 + (f / 1e3).powi(2)))).collect(),
                ),
            ],
        );
        self.status("--ready--");
    }

    fn run_tran(&mut self, args: &[&str]) {
        if !self.require_circuit() {
            return;
        }
        let tstep = to_num(args[1]).unwrap();
        let tstop = to_num(args[2]).unwrap();
        let tstart = args.get(3).map(|t| to_num(t).unwrap()).unwrap_or(0.0);
        let n = ((tstop - tstart) / tstep).round() as usize + 1;
        let time: Vec<f64> = (0..n).map(|i| tstart + i as f64 * tstep).collect();

        self.status("tran: 50.0%");
        self.push_plot(
            "tran",
            vec![
                FakeVector::real("time", sys::SV_TIME, time.clone()),
                FakeVector::real("V(1)", sys::SV_VOLTAGE, time.iter().map(|t| (t * 1e3).sin()).collect()),
            ],
        );
        self.status("--ready--");
    }

    fn destroy(&mut self, names: &[&str]) {
        if names == ["all"] {
            self.plots.retain(|p| p.name == "const");
        } else {
            self.plots
                .retain(|p| p.name == "const" || !names.contains(&p.name.as_str()));
        }
        self.current = self.plots[0].name.clone();
    }

    fn find(&self, plot: &str, vector: &str) -> Option<&FakeVector> {
        self.plots
            .iter()
            .find(|p| p.name == plot)?
            .vectors
            .iter()
            .find(|v| v.name() == vector)
    }
}

impl Engine for FakeEngine {
    fn command(&mut self, command: &CStr) -> i32 {
        let command = command.to_str().unwrap().to_string();
        self.log.lock().unwrap().push(command.clone());

        let words: Vec<&str> = command.split_whitespace().collect();
        match words.first().copied().unwrap_or("") {
            "echo" => self.stdout(command.trim_start_matches("echo").trim()),
            "op" => self.run_op(),
            "dc" => self.run_dc(&words),
            "ac" => self.run_ac(&words),
            "tran" => self.run_tran(&words),
            "destroy" => self.destroy(&words[1..]),
            "option" => {}
            "source" => match std::fs::read_to_string(words[1]) {
                Ok(text) => self.load_circuit(text.lines().map(str::to_string).collect()),
                Err(e) => self.stderr(&format!("{}: {}", words[1], e)),
            },
            "quit" => {
                self.stdout("ngspice-36 done");
                self.stdout("Note: 'quit' asks for detaching ngspice.dll.");
                self.exit(0, false, true);
            }
            "crash" => self.exit(1, true, false),
            "busy" => return 1,
            other => self.stderr(&format!("{}: no such command available in ngspice", other)),
        }
        0
    }

    fn circ(&mut self, lines: &[CString]) -> i32 {
        let lines: Vec<String> = lines
            .iter()
            .map(|l| l.to_str().unwrap().to_string())
            .collect();
        self.log
            .lock()
            .unwrap()
            .push(format!("circ {}", lines.join(" | ")));
        self.load_circuit(lines);
        0
    }

    fn all_plots(&self) -> Vec<String> {
        self.plots.iter().map(|p| p.name.clone()).collect()
    }

    fn all_vecs(&self, plot: &CStr) -> Vec<String> {
        let plot = plot.to_str().unwrap();
        self.plots
            .iter()
            .find(|p| p.name == plot)
            .map(|p| p.vectors.iter().map(|v| v.name().to_string()).collect())
            .unwrap_or_default()
    }

    fn current_plot(&self) -> Option<String> {
        Some(self.current.clone())
    }

    fn vector_info(&self, name: &CStr) -> Option<RawVector<'_>> {
        let name = name.to_str().ok()?;
        let (plot, vector) = name.split_once('.').unwrap_or((self.current.as_str(), name));
        let found = self.find(plot, vector)?;
        // SAFETY: the descriptor and its buffers live as long as `self`.
        unsafe { RawVector::from_raw(&*found.info) }
    }

    fn is_running(&self) -> bool {
        false
    }
}

/// A session over a fresh [`FakeEngine`], plus the engine's call log.
pub fn fake_session() -> (Session, CallLog) {
    let bridge = Arc::new(OutputBridge::new());
    let engine = FakeEngine::new(Arc::clone(&bridge));
    let log = engine.log();
    (Session::with_engine(Box::new(engine), bridge), log)
}

pub const DC_AC_CHECK: &str = "\
DC and AC check circuit
V1 1 0 DC 1 AC 1
V2 2 0 DC 0
R1 1 2 1k
R2 2 0 2k
.end
";

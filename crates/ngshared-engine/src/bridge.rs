//! Capture of ngspice's callback stream.
//!
//! ngspice reports printed text, simulation status and exit requests through
//! callbacks registered at `ngSpice_Init`. They fire on the engine's stack
//! while a command is being processed. [`OutputBridge`] turns them into two
//! FIFO queues plus a recorded fault that the issuing call drains once the
//! command returns.

use std::collections::VecDeque;
use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Error;

/// Queued in place of ngspice's own "ngspice ... done" banner.
pub const QUIT_MARKER: &str = "Quitting ngspice";

/// Note printed by ngspice when asked to quit while loaded as a library.
const DETACH_NOTE: &str = "Note: 'quit' asks for detaching ngspice.dll";

/// A problem reported through a callback during the current command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Fault {
    Stderr(Vec<String>),
    Exit { status: i32, unload: bool, quit: bool },
}

/// Thread-safe queues fed by the engine callbacks.
#[derive(Debug, Default)]
pub struct OutputBridge {
    output: Mutex<VecDeque<String>>,
    status: Mutex<VecDeque<String>>,
    fault: Mutex<Option<Fault>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic while holding the lock leaves the queue itself intact.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl OutputBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one printed line, e.g. `"stdout Circuit: test"`.
    pub fn handle_output(&self, raw: &str) {
        let clean = raw.trim_start_matches('*');
        let (stream, text) = clean.split_once(' ').unwrap_or((clean, ""));
        let text = text.trim();

        match stream {
            "stdout" => {
                if text.contains("ngspice") && text.contains("done") {
                    lock(&self.output).push_back(QUIT_MARKER.to_string());
                } else if text.contains(DETACH_NOTE) || is_blank(text) {
                    log::trace!("ngspice stdout dropped: {:?}", text);
                } else {
                    log::trace!("ngspice stdout: {}", text);
                    lock(&self.output).push_back(text.to_string());
                }
            }
            "stderr" => {
                log::warn!("ngspice stderr: {}", text);
                let mut fault = lock(&self.fault);
                match fault.as_mut() {
                    Some(Fault::Stderr(lines)) => lines.push(text.to_string()),
                    Some(Fault::Exit { .. }) => {}
                    None => *fault = Some(Fault::Stderr(vec![text.to_string()])),
                }
            }
            _ => log::trace!("ngspice output without stream tag dropped: {:?}", raw),
        }
    }

    /// Handle one status message, e.g. `"tran: 50.0%"`.
    pub fn handle_status(&self, raw: &str) {
        log::trace!("ngspice status: {}", raw);
        lock(&self.status).push_back(raw.to_string());
    }

    /// Handle an exit request. A clean `quit` is tolerated.
    pub fn handle_exit(&self, status: i32, unload: bool, quit: bool) {
        if status == 0 && quit {
            log::debug!("ngspice quit (unload {})", unload);
            return;
        }
        log::warn!(
            "ngspice exit requested: status {}, unload {}, quit {}",
            status,
            unload,
            quit
        );
        *lock(&self.fault) = Some(Fault::Exit {
            status,
            unload,
            quit,
        });
    }

    /// Forget everything left over from a previous command.
    pub(crate) fn reset(&self) {
        lock(&self.output).clear();
        lock(&self.status).clear();
        *lock(&self.fault) = None;
    }

    pub(crate) fn drain_output(&self) -> Vec<String> {
        lock(&self.output).drain(..).collect()
    }

    pub(crate) fn drain_status(&self) -> Vec<String> {
        lock(&self.status).drain(..).collect()
    }

    /// The fault recorded during the current command, as an error.
    pub(crate) fn take_fault(&self) -> Option<Error> {
        lock(&self.fault).take().map(|fault| match fault {
            Fault::Stderr(lines) => Error::Engine(lines.join("\n")),
            Fault::Exit {
                status,
                unload,
                quit,
            } => Error::EngineFatal {
                status,
                unload,
                quit,
            },
        })
    }

    /// Pointer handed to ngspice as callback user data.
    ///
    /// Valid for as long as the caller keeps an `Arc` to this bridge alive.
    pub fn user_data(self: &Arc<Self>) -> *mut c_void {
        Arc::as_ptr(self).cast::<c_void>().cast_mut()
    }
}

/// Run `f` with the bridge behind `user` and a decoded copy of `text`.
///
/// Panics never cross into C.
unsafe fn dispatch(text: *const c_char, user: *mut c_void, f: impl FnOnce(&OutputBridge, &str)) -> c_int {
    if user.is_null() || text.is_null() {
        return 0;
    }
    // SAFETY: `user` comes from `OutputBridge::user_data` and `text` is a
    // NUL-terminated string owned by the engine for the duration of the call.
    let (bridge, text) = unsafe {
        (
            &*user.cast::<OutputBridge>(),
            CStr::from_ptr(text).to_string_lossy(),
        )
    };
    if catch_unwind(AssertUnwindSafe(|| f(bridge, &*text))).is_err() {
        log::error!("panic in ngspice callback");
    }
    0
}

/// `SendChar` callback.
///
/// # Safety
///
/// `user` must be null or come from [`OutputBridge::user_data`] with the
/// bridge still alive; `output` must be null or NUL-terminated.
pub unsafe extern "C" fn send_char(output: *mut c_char, _id: c_int, user: *mut c_void) -> c_int {
    unsafe { dispatch(output, user, |bridge, text| bridge.handle_output(text)) }
}

/// `SendStat` callback.
///
/// # Safety
///
/// Same contract as [`send_char`].
pub unsafe extern "C" fn send_stat(status: *mut c_char, _id: c_int, user: *mut c_void) -> c_int {
    unsafe { dispatch(status, user, |bridge, text| bridge.handle_status(text)) }
}

/// `ControlledExit` callback.
///
/// # Safety
///
/// `user` must be null or come from [`OutputBridge::user_data`] with the
/// bridge still alive.
pub unsafe extern "C" fn controlled_exit(
    status: c_int,
    unload: bool,
    quit: bool,
    _id: c_int,
    user: *mut c_void,
) -> c_int {
    if user.is_null() {
        return 0;
    }
    // SAFETY: see above.
    let bridge = unsafe { &*user.cast::<OutputBridge>() };
    if catch_unwind(AssertUnwindSafe(|| bridge.handle_exit(status, unload, quit))).is_err() {
        log::error!("panic in ngspice exit callback");
    }
    0
}

/// Empty, or nothing but `*` fill and whitespace.
fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c == '*' || c.is_whitespace())
}

//! C types from `sharedspice.h`, `dvec.h` and `sim.h`.

use std::os::raw::{c_char, c_double, c_int, c_short, c_void};

/// Complex sample as stored by ngspice.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ngcomplex_t {
    pub cx_real: c_double,
    pub cx_imag: c_double,
}

/// Descriptor returned by `ngGet_Vec_Info`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct vector_info {
    pub v_name: *mut c_char,
    pub v_type: c_int,
    pub v_flags: c_short,
    pub v_realdata: *mut c_double,
    pub v_compdata: *mut ngcomplex_t,
    pub v_length: c_int,
}

pub type pvector_info = *mut vector_info;

/// Per-vector entry of `vecinfoall`, passed to `SendInitData`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct vecinfo {
    pub number: c_int,
    pub vecname: *mut c_char,
    pub is_real: bool,
    pub pdvec: *mut c_void,
    pub pdvecscale: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct vecinfoall {
    pub name: *mut c_char,
    pub title: *mut c_char,
    pub date: *mut c_char,
    pub type_: *mut c_char,
    pub veccount: c_int,
    pub vecs: *mut *mut vecinfo,
}

/// One value of one vector, passed to `SendData`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct vecvalues {
    pub name: *mut c_char,
    pub creal: c_double,
    pub cimag: c_double,
    pub is_scale: bool,
    pub is_complex: bool,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct vecvaluesall {
    pub veccount: c_int,
    pub vecindex: c_int,
    pub vecsa: *mut *mut vecvalues,
}

// v_flags bits (dvec.h).
pub const VF_REAL: c_short = 1 << 0;
pub const VF_COMPLEX: c_short = 1 << 1;
pub const VF_ACCUM: c_short = 1 << 2;
pub const VF_PLOT: c_short = 1 << 3;
pub const VF_PRINT: c_short = 1 << 4;
pub const VF_MINGIVEN: c_short = 1 << 5;
pub const VF_MAXGIVEN: c_short = 1 << 6;
pub const VF_PERMANENT: c_short = 1 << 7;

// v_type values (sim.h).
pub const SV_NOTYPE: c_int = 0;
pub const SV_TIME: c_int = 1;
pub const SV_FREQUENCY: c_int = 2;
pub const SV_VOLTAGE: c_int = 3;
pub const SV_CURRENT: c_int = 4;
pub const SV_OUTPUT_N_DENS: c_int = 5;
pub const SV_OUTPUT_NOISE: c_int = 6;
pub const SV_INPUT_N_DENS: c_int = 7;
pub const SV_INPUT_NOISE: c_int = 8;
pub const SV_POLE: c_int = 9;
pub const SV_ZERO: c_int = 10;
pub const SV_SPARAM: c_int = 11;
pub const SV_TEMP: c_int = 12;
pub const SV_RES: c_int = 13;
pub const SV_IMPEDANCE: c_int = 14;
pub const SV_ADMITTANCE: c_int = 15;
pub const SV_POWER: c_int = 16;
pub const SV_PHASE: c_int = 17;
pub const SV_DB: c_int = 18;
pub const SV_CAPACITANCE: c_int = 19;
pub const SV_CHARGE: c_int = 20;

/// Text printed by ngspice: `"stdout ..."` or `"stderr ..."`.
pub type SendChar = unsafe extern "C" fn(*mut c_char, c_int, *mut c_void) -> c_int;
/// Simulation status text.
pub type SendStat = unsafe extern "C" fn(*mut c_char, c_int, *mut c_void) -> c_int;
/// Exit request: status, unload, quit, library id, user data.
pub type ControlledExit = unsafe extern "C" fn(c_int, bool, bool, c_int, *mut c_void) -> c_int;
pub type SendData = unsafe extern "C" fn(*mut vecvaluesall, c_int, c_int, *mut c_void) -> c_int;
pub type SendInitData = unsafe extern "C" fn(*mut vecinfoall, c_int, *mut c_void) -> c_int;
pub type BGThreadRunning = unsafe extern "C" fn(bool, c_int, *mut c_void) -> c_int;

pub type NgSpiceInit = unsafe extern "C" fn(
    Option<SendChar>,
    Option<SendStat>,
    Option<ControlledExit>,
    Option<SendData>,
    Option<SendInitData>,
    Option<BGThreadRunning>,
    *mut c_void,
) -> c_int;
pub type NgSpiceCommand = unsafe extern "C" fn(*mut c_char) -> c_int;
pub type NgSpiceCirc = unsafe extern "C" fn(*mut *mut c_char) -> c_int;
pub type NgGetVecInfo = unsafe extern "C" fn(*mut c_char) -> pvector_info;
pub type NgSpiceCurPlot = unsafe extern "C" fn() -> *mut c_char;
pub type NgSpiceAllPlots = unsafe extern "C" fn() -> *mut *mut c_char;
pub type NgSpiceAllVecs = unsafe extern "C" fn(*mut c_char) -> *mut *mut c_char;
pub type NgSpiceRunning = unsafe extern "C" fn() -> bool;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn test_ngcomplex_layout() {
        assert_eq!(size_of::<ngcomplex_t>(), 2 * size_of::<f64>());
        assert_eq!(offset_of!(ngcomplex_t, cx_imag), size_of::<f64>());
    }

    #[test]
    fn test_vector_info_layout() {
        let ptr = size_of::<*mut c_void>();
        assert_eq!(offset_of!(vector_info, v_name), 0);
        assert_eq!(offset_of!(vector_info, v_type), ptr);
        assert_eq!(offset_of!(vector_info, v_flags), ptr + size_of::<c_int>());
        assert_eq!(offset_of!(vector_info, v_realdata) % align_of::<*mut f64>(), 0);
        assert_eq!(
            offset_of!(vector_info, v_compdata),
            offset_of!(vector_info, v_realdata) + ptr
        );
    }

    #[test]
    fn test_flag_bits_are_distinct() {
        let flags = [
            VF_REAL,
            VF_COMPLEX,
            VF_ACCUM,
            VF_PLOT,
            VF_PRINT,
            VF_MINGIVEN,
            VF_MAXGIVEN,
            VF_PERMANENT,
        ];
        let combined = flags.iter().fold(0, |acc, f| acc | f);
        assert_eq!(combined, 0xff);
    }
}

//! Vector descriptors and decoding of engine-owned sample buffers.

use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::slice;

use ngshared_sys as sys;
use num_complex::Complex64;
use serde::Serialize;

use crate::error::{Error, Result};

/// Physical quantity a vector holds (`v_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorType {
    NoType,
    Time,
    Frequency,
    Voltage,
    Current,
    OutputNoiseDensity,
    OutputNoise,
    InputNoiseDensity,
    InputNoise,
    Pole,
    Zero,
    SParam,
    Temperature,
    Resistance,
    Impedance,
    Admittance,
    Power,
    Phase,
    Decibel,
    Capacitance,
    Charge,
}

impl VectorType {
    pub fn from_raw(raw: i32) -> Option<Self> {
        let kind = match raw {
            sys::SV_NOTYPE => VectorType::NoType,
            sys::SV_TIME => VectorType::Time,
            sys::SV_FREQUENCY => VectorType::Frequency,
            sys::SV_VOLTAGE => VectorType::Voltage,
            sys::SV_CURRENT => VectorType::Current,
            sys::SV_OUTPUT_N_DENS => VectorType::OutputNoiseDensity,
            sys::SV_OUTPUT_NOISE => VectorType::OutputNoise,
            sys::SV_INPUT_N_DENS => VectorType::InputNoiseDensity,
            sys::SV_INPUT_NOISE => VectorType::InputNoise,
            sys::SV_POLE => VectorType::Pole,
            sys::SV_ZERO => VectorType::Zero,
            sys::SV_SPARAM => VectorType::SParam,
            sys::SV_TEMP => VectorType::Temperature,
            sys::SV_RES => VectorType::Resistance,
            sys::SV_IMPEDANCE => VectorType::Impedance,
            sys::SV_ADMITTANCE => VectorType::Admittance,
            sys::SV_POWER => VectorType::Power,
            sys::SV_PHASE => VectorType::Phase,
            sys::SV_DB => VectorType::Decibel,
            sys::SV_CAPACITANCE => VectorType::Capacitance,
            sys::SV_CHARGE => VectorType::Charge,
            _ => return None,
        };
        Some(kind)
    }
}

/// `v_flags` bit set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VectorFlags(u16);

impl VectorFlags {
    pub const REAL: Self = Self(sys::VF_REAL as u16);
    pub const COMPLEX: Self = Self(sys::VF_COMPLEX as u16);
    pub const ACCUMULATED: Self = Self(sys::VF_ACCUM as u16);
    pub const PLOTTED: Self = Self(sys::VF_PLOT as u16);
    pub const PRINTED: Self = Self(sys::VF_PRINT as u16);
    pub const MIN_GIVEN: Self = Self(sys::VF_MINGIVEN as u16);
    pub const MAX_GIVEN: Self = Self(sys::VF_MAXGIVEN as u16);
    pub const PERMANENT: Self = Self(sys::VF_PERMANENT as u16);

    const NAMES: [(Self, &'static str); 8] = [
        (Self::REAL, "REAL"),
        (Self::COMPLEX, "COMPLEX"),
        (Self::ACCUMULATED, "ACCUMULATED"),
        (Self::PLOTTED, "PLOTTED"),
        (Self::PRINTED, "PRINTED"),
        (Self::MIN_GIVEN, "MIN_GIVEN"),
        (Self::MAX_GIVEN, "MAX_GIVEN"),
        (Self::PERMANENT, "PERMANENT"),
    ];

    pub const fn from_raw(raw: i16) -> Self {
        Self(raw as u16)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sample encoding implied by the flags, if exactly one of the real and
    /// complex bits is set.
    pub fn sample_kind(self) -> Option<SampleKind> {
        match (self.contains(Self::REAL), self.contains(Self::COMPLEX)) {
            (true, false) => Some(SampleKind::Real),
            (false, true) => Some(SampleKind::Complex),
            _ => None,
        }
    }
}

impl std::ops::BitOr for VectorFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for VectorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "VectorFlags({})", names.join(" | "))
    }
}

/// How a vector's samples are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleKind {
    Real,
    Complex,
}

/// Owned copy of a vector's samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum VectorData {
    Real(Vec<f64>),
    Complex(Vec<Complex64>),
}

impl VectorData {
    pub fn len(&self) -> usize {
        match self {
            VectorData::Real(values) => values.len(),
            VectorData::Complex(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> SampleKind {
        match self {
            VectorData::Real(_) => SampleKind::Real,
            VectorData::Complex(_) => SampleKind::Complex,
        }
    }

    pub fn as_real(&self) -> Option<&[f64]> {
        match self {
            VectorData::Real(values) => Some(values),
            VectorData::Complex(_) => None,
        }
    }

    pub fn as_complex(&self) -> Option<&[Complex64]> {
        match self {
            VectorData::Complex(values) => Some(values),
            VectorData::Real(_) => None,
        }
    }

    /// Samples as complex numbers; real samples get a zero imaginary part.
    pub fn to_complex(&self) -> Vec<Complex64> {
        match self {
            VectorData::Real(values) => values.iter().map(|&re| Complex64::new(re, 0.0)).collect(),
            VectorData::Complex(values) => values.clone(),
        }
    }
}

/// Owned metadata of a vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorInfo {
    pub name: String,
    pub vector_type: VectorType,
    #[serde(skip)]
    pub flags: VectorFlags,
    pub length: usize,
}

/// A vector descriptor borrowed from the engine.
///
/// The lifetime ties the descriptor to a shared borrow of the engine, so it
/// cannot be held across the next command, which needs exclusive access.
pub struct RawVector<'e> {
    info: NonNull<sys::vector_info>,
    _engine: PhantomData<&'e sys::vector_info>,
}

impl<'e> RawVector<'e> {
    /// Wrap a descriptor returned by `ngGet_Vec_Info`. Returns `None` for a
    /// null pointer.
    ///
    /// # Safety
    ///
    /// A non-null `info` must point to a valid `vector_info` whose name and
    /// sample buffers stay valid and unmodified for `'e`.
    pub unsafe fn from_raw(info: *const sys::vector_info) -> Option<Self> {
        NonNull::new(info.cast_mut()).map(|info| Self {
            info,
            _engine: PhantomData,
        })
    }

    fn raw(&self) -> &sys::vector_info {
        // SAFETY: guaranteed by `from_raw`.
        unsafe { self.info.as_ref() }
    }

    pub fn name(&self) -> String {
        let raw = self.raw();
        if raw.v_name.is_null() {
            return String::new();
        }
        // SAFETY: a non-null name is a NUL-terminated string owned by the engine.
        unsafe { CStr::from_ptr(raw.v_name) }
            .to_string_lossy()
            .into_owned()
    }

    pub fn flags(&self) -> VectorFlags {
        VectorFlags::from_raw(self.raw().v_flags)
    }

    pub fn vector_type(&self) -> VectorType {
        let raw = self.raw().v_type;
        VectorType::from_raw(raw).unwrap_or_else(|| {
            log::warn!("vector '{}' has unknown type {}", self.name(), raw);
            VectorType::NoType
        })
    }

    /// Owned metadata for this vector.
    pub fn info(&self) -> VectorInfo {
        VectorInfo {
            name: self.name(),
            vector_type: self.vector_type(),
            flags: self.flags(),
            length: usize::try_from(self.raw().v_length).unwrap_or(0),
        }
    }

    /// Copy the samples out of the engine's buffer.
    pub fn decode(&self) -> Result<VectorData> {
        let raw = self.raw();
        let decode_error = |reason: String| Error::Decode {
            vector: self.name(),
            reason,
        };

        let kind = self.flags().sample_kind().ok_or_else(|| {
            decode_error(format!(
                "flags {:?} set neither or both of REAL and COMPLEX",
                self.flags()
            ))
        })?;
        let length = usize::try_from(raw.v_length)
            .map_err(|_| decode_error(format!("negative length {}", raw.v_length)))?;

        match kind {
            SampleKind::Real => {
                let values = copy_samples(raw.v_realdata, length)
                    .ok_or_else(|| decode_error("real data pointer is null".to_string()))?;
                Ok(VectorData::Real(values))
            }
            SampleKind::Complex => {
                let values = copy_samples(raw.v_compdata, length)
                    .ok_or_else(|| decode_error("complex data pointer is null".to_string()))?;
                Ok(VectorData::Complex(
                    values
                        .into_iter()
                        .map(|c| Complex64::new(c.cx_real, c.cx_imag))
                        .collect(),
                ))
            }
        }
    }
}

/// Copy `length` samples starting at `data`. An empty vector may have a null
/// buffer.
fn copy_samples<T: Copy>(data: *const T, length: usize) -> Option<Vec<T>> {
    if length == 0 {
        return Some(Vec::new());
    }
    if data.is_null() {
        return None;
    }
    // SAFETY: the engine guarantees `length` initialized samples behind a
    // non-null buffer for the lifetime of the descriptor.
    Some(unsafe { slice::from_raw_parts(data, length) }.to_vec())
}

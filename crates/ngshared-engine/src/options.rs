//! Simulator options (`option <name>[=<value>]`).

use std::fmt;

use ngshared_core::ArgValue;

/// One ngspice option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimOption {
    name: String,
    value: Option<String>,
}

impl SimOption {
    /// An option given as-is, e.g. `noacct` or a pre-formatted `trtol=1`.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn value(name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into().into_string()),
        }
    }

    pub fn command_line(&self) -> String {
        format!("option {}", self)
    }
}

impl fmt::Display for SimOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for SimOption {
    fn from(option: &str) -> Self {
        SimOption::flag(option)
    }
}

impl<V: Into<ArgValue>> From<(&str, V)> for SimOption {
    fn from((name, value): (&str, V)) -> Self {
        SimOption::value(name, value)
    }
}

//! Argument values, field schemas and the shared argument builder.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};

/// One analysis argument, kept as the text that will be sent to the engine.
///
/// Numbers are rendered with their `Display` form, so `0.1_f64` becomes
/// `"0.1"` and `0` becomes `"0"`. Strings are taken verbatim and may carry
/// scale suffixes such as `"1meg"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgValue(String);

impl ArgValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue(value)
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        ArgValue(value.clone())
    }
}

macro_rules! arg_value_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(value: $ty) -> Self {
                    ArgValue(value.to_string())
                }
            }
        )*
    };
}

arg_value_from_display!(f64, f32, i32, i64, u32, u64, usize);

/// Fixed, ordered field list of one analysis kind.
///
/// Implementors are plain structs with one `String` per field; an empty
/// string means "not given".
pub trait FieldSchema: Default + Sized {
    /// Command keyword sent to the engine (`dc`, `ac`, `tran`).
    const KEYWORD: &'static str;
    /// Field names in positional order.
    const FIELDS: &'static [&'static str];
    /// Fields that must be non-empty.
    const REQUIRED: &'static [&'static str];

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// Kind-specific validation, run after the required fields are present.
    /// May record values parsed from the fields.
    fn check(&mut self) -> Result<()>;

    /// Non-empty field values in schema order.
    fn values(&self) -> Vec<&str> {
        Self::FIELDS
            .iter()
            .filter_map(|name| self.field(name))
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Full command line, e.g. `dc v1 0 1 0.1`.
    fn command_line(&self) -> String {
        let mut line = Self::KEYWORD.to_string();
        for value in self.values() {
            line.push(' ');
            line.push_str(value);
        }
        line
    }
}

/// Names from `names` whose field is still empty, in schema order.
pub(crate) fn empty_fields<S: FieldSchema>(args: &S, names: &[&'static str]) -> Vec<&'static str> {
    S::FIELDS
        .iter()
        .copied()
        .filter(|name| names.contains(name))
        .filter(|name| args.field(name).is_none_or(str::is_empty))
        .collect()
}

/// Run the shared validation steps on a resolved argument set.
pub(crate) fn validate<S: FieldSchema>(args: &mut S) -> Result<()> {
    let missing = empty_fields(args, S::REQUIRED);
    if !missing.is_empty() {
        return Err(Error::MissingArguments { fields: missing });
    }
    args.check()
}

/// Resolves positional and named arguments onto a [`FieldSchema`].
///
/// Resolution follows three rules:
/// 1. a single positional argument is split on whitespace and its tokens are
///    assigned to the fields in order;
/// 2. several positional arguments are assigned to the fields in order;
/// 3. named arguments overwrite whatever the positional ones set.
///
/// Positional tokens beyond the last schema field are ignored.
///
/// Errors from unknown field names are held until [`ArgsBuilder::build`].
#[derive(Debug)]
pub struct ArgsBuilder<S: FieldSchema> {
    positional: Vec<ArgValue>,
    named: Vec<(String, ArgValue)>,
    _schema: PhantomData<S>,
}

impl<S: FieldSchema> Default for ArgsBuilder<S> {
    fn default() -> Self {
        Self {
            positional: Vec::new(),
            named: Vec::new(),
            _schema: PhantomData,
        }
    }
}

impl<S: FieldSchema> ArgsBuilder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append positional arguments.
    pub fn positional<I, V>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ArgValue>,
    {
        self.positional.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set a named argument.
    pub fn set(mut self, name: &str, value: impl Into<ArgValue>) -> Self {
        self.named.push((name.to_string(), value.into()));
        self
    }

    /// Resolve and validate the arguments.
    pub fn build(self) -> Result<S> {
        let mut args = self.resolve()?;
        validate(&mut args)?;
        Ok(args)
    }

    fn resolve(self) -> Result<S> {
        let mut args = S::default();

        let tokens: Vec<String> = match self.positional.as_slice() {
            [single] => single
                .as_str()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            many => many.iter().map(|v| v.as_str().to_string()).collect(),
        };

        for (name, token) in S::FIELDS.iter().zip(tokens) {
            if let Some(field) = args.field_mut(name) {
                *field = token;
            }
        }

        for (name, value) in self.named {
            match args.field_mut(&name) {
                Some(field) => *field = value.into_string(),
                None => {
                    return Err(Error::UnknownField {
                        analysis: S::KEYWORD,
                        field: name,
                    });
                }
            }
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_render_like_engine_literals() {
        assert_eq!(ArgValue::from(0.1).as_str(), "0.1");
        assert_eq!(ArgValue::from(0.0).as_str(), "0");
        assert_eq!(ArgValue::from(1.0).as_str(), "1");
        assert_eq!(ArgValue::from(10_usize).as_str(), "10");
        assert_eq!(ArgValue::from("1meg").as_str(), "1meg");
    }
}

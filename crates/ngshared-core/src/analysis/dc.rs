//! DC sweep arguments (`dc src start stop step [src2 start2 stop2 step2]`).

use crate::error::{Error, Result};
use crate::sweep::check_sim_param;
use crate::units::to_num;

use super::args::{ArgsBuilder, FieldSchema, empty_fields};

/// Validated arguments of a DC sweep, optionally nested over a second source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DcArgs {
    src: String,
    start: String,
    stop: String,
    step: String,
    src2: String,
    start2: String,
    stop2: String,
    step2: String,
}

impl DcArgs {
    pub fn builder() -> ArgsBuilder<Self> {
        ArgsBuilder::new()
    }

    /// Parse a command string such as `v1 0 1 0.1` or
    /// `v1 0 1 0.1 v2 0 5 1`.
    pub fn parse(args: &str) -> Result<Self> {
        Self::builder().positional([args]).build()
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn stop(&self) -> &str {
        &self.stop
    }

    pub fn step(&self) -> &str {
        &self.step
    }

    /// Second (inner) source, if the sweep is nested.
    pub fn src2(&self) -> Option<&str> {
        (!self.src2.is_empty()).then_some(self.src2.as_str())
    }

    /// `(start2, stop2, step2)` of the nested sweep.
    pub fn second_sweep(&self) -> Option<(&str, &str, &str)> {
        self.src2()
            .map(|_| (self.start2.as_str(), self.stop2.as_str(), self.step2.as_str()))
    }

    pub fn is_nested(&self) -> bool {
        !self.src2.is_empty()
    }
}

const SECOND_SWEEP: &[&str] = &["start2", "stop2", "step2"];

impl FieldSchema for DcArgs {
    const KEYWORD: &'static str = "dc";
    const FIELDS: &'static [&'static str] = &[
        "src", "start", "stop", "step", "src2", "start2", "stop2", "step2",
    ];
    const REQUIRED: &'static [&'static str] = &["src", "start", "stop", "step"];

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "src" => &self.src,
            "start" => &self.start,
            "stop" => &self.stop,
            "step" => &self.step,
            "src2" => &self.src2,
            "start2" => &self.start2,
            "stop2" => &self.stop2,
            "step2" => &self.step2,
            _ => return None,
        };
        Some(value)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            "src" => &mut self.src,
            "start" => &mut self.start,
            "stop" => &mut self.stop,
            "step" => &mut self.step,
            "src2" => &mut self.src2,
            "start2" => &mut self.start2,
            "stop2" => &mut self.stop2,
            "step2" => &mut self.step2,
            _ => return None,
        };
        Some(value)
    }

    fn check(&mut self) -> Result<()> {
        let missing_second = empty_fields(self, SECOND_SWEEP);

        if self.src2.is_empty() && missing_second.len() < SECOND_SWEEP.len() {
            return Err(Error::SecondSource);
        }
        if !self.src2.is_empty() && !missing_second.is_empty() {
            return Err(Error::MissingArguments {
                fields: missing_second,
            });
        }

        check_sim_param(
            to_num(&self.start)?,
            to_num(&self.stop)?,
            Some(to_num(&self.step)?),
        )?;

        if let Some((start2, stop2, step2)) = self.second_sweep() {
            check_sim_param(to_num(start2)?, to_num(stop2)?, Some(to_num(step2)?))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::SweepError;

    #[test]
    fn test_three_argument_styles_agree() {
        let from_string = DcArgs::parse("v1 0 1 0.1").unwrap();
        let from_positional = DcArgs::builder()
            .positional(["v1", "0", "1", "0.1"])
            .build()
            .unwrap();
        let from_named = DcArgs::builder()
            .set("src", "v1")
            .set("start", 0)
            .set("stop", 1)
            .set("step", 0.1)
            .build()
            .unwrap();

        assert_eq!(from_string.command_line(), "dc v1 0 1 0.1");
        assert_eq!(from_positional, from_string);
        assert_eq!(from_named, from_string);
    }

    #[test]
    fn test_extra_whitespace_in_command_string() {
        let dc = DcArgs::parse("  v1   0\t1  0.1 ").unwrap();
        assert_eq!(dc.command_line(), "dc v1 0 1 0.1");
    }

    #[test]
    fn test_named_overrides_positional() {
        let dc = DcArgs::builder()
            .positional(["v1 0 1 0.1"])
            .set("step", "0.25")
            .build()
            .unwrap();
        assert_eq!(dc.step(), "0.25");
        assert_eq!(dc.command_line(), "dc v1 0 1 0.25");
    }

    #[test]
    fn test_missing_step() {
        let err = DcArgs::builder()
            .set("src", "v1")
            .set("start", 0)
            .set("stop", 1)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::MissingArguments { fields: vec!["step"] });
    }

    #[test]
    fn test_unknown_field() {
        let err = DcArgs::builder()
            .positional(["v1 0 1 0.1"])
            .set("stepp", 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::UnknownField { analysis: "dc", ref field } if field == "stepp"));
    }

    #[test]
    fn test_second_sweep_without_source() {
        let err = DcArgs::builder()
            .set("src", "v1")
            .set("start", 0)
            .set("stop", 1)
            .set("step", 0.1)
            .set("start2", 0)
            .set("stop2", 1)
            .set("step2", 0.1)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::SecondSource);
    }

    #[test]
    fn test_second_source_missing_stop2() {
        let err = DcArgs::builder()
            .set("src", "v1")
            .set("start", 0)
            .set("stop", 1)
            .set("step", 0.1)
            .set("src2", "v2")
            .set("start2", 0)
            .set("step2", 0.1)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::MissingArguments { fields: vec!["stop2"] });
    }

    #[test]
    fn test_nested_sweep() {
        let dc = DcArgs::parse("v2 0 1 1m v1 0 1 0.3").unwrap();
        assert!(dc.is_nested());
        assert_eq!(dc.src2(), Some("v1"));
        assert_eq!(dc.second_sweep(), Some(("0", "1", "0.3")));
        assert_eq!(dc.command_line(), "dc v2 0 1 1m v1 0 1 0.3");
    }

    #[test]
    fn test_sweep_direction_is_checked_for_both_sources() {
        let err = DcArgs::parse("v1 1 0 0.1").unwrap_err();
        assert_eq!(err, Error::SweepDirection(SweepError::StopBelowStart));

        let err = DcArgs::parse("v1 0 1 0.1 v2 0 1 0").unwrap_err();
        assert_eq!(err, Error::SweepDirection(SweepError::ZeroStep));
    }

    #[test]
    fn test_scale_suffixes_in_sweep() {
        let dc = DcArgs::builder()
            .positional(["v1", "0", "1meg", "1k"])
            .build()
            .unwrap();
        assert_eq!(dc.command_line(), "dc v1 0 1meg 1k");
    }

    #[test]
    fn test_invalid_number() {
        let err = DcArgs::parse("v1 zero 1 0.1").unwrap_err();
        assert_eq!(err, Error::InvalidNumber("zero".to_string()));
    }

    #[test]
    fn test_tokens_past_last_field_are_ignored() {
        let dc = DcArgs::parse("v1 0 1 0.1 v2 0 1 0.1 extra").unwrap();
        assert_eq!(dc.command_line(), "dc v1 0 1 0.1 v2 0 1 0.1");

        let dc = DcArgs::builder()
            .positional(["v1", "0", "1", "0.1", "v2", "0", "1", "0.1", "extra"])
            .build()
            .unwrap();
        assert_eq!(dc.second_sweep(), Some(("0", "1", "0.1")));
    }
}

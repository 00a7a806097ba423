//! Sweep direction checks.

use thiserror::Error;

/// Reason a (start, stop, step) triple cannot describe a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SweepError {
    #[error("step size is zero")]
    ZeroStep,
    #[error("step size > 0 but stop < start")]
    StopBelowStart,
    #[error("step size < 0 but stop > start")]
    StopAboveStart,
}

/// Check that `step` walks from `start` towards `stop`.
///
/// A missing step counts as `1.0`.
pub fn check_sim_param(start: f64, stop: f64, step: Option<f64>) -> Result<(), SweepError> {
    let step = step.unwrap_or(1.0);

    if step == 0.0 {
        return Err(SweepError::ZeroStep);
    }
    if step > 0.0 && stop < start {
        return Err(SweepError::StopBelowStart);
    }
    if step < 0.0 && stop > start {
        return Err(SweepError::StopAboveStart);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_step() {
        let err = check_sim_param(0.0, 1.0, Some(0.0)).unwrap_err();
        assert_eq!(err, SweepError::ZeroStep);
        assert_eq!(err.to_string(), "step size is zero");
    }

    #[test]
    fn test_wrong_direction() {
        let err = check_sim_param(2.0, 1.0, Some(0.1)).unwrap_err();
        assert_eq!(err.to_string(), "step size > 0 but stop < start");

        let err = check_sim_param(1.0, 2.0, Some(-0.1)).unwrap_err();
        assert_eq!(err.to_string(), "step size < 0 but stop > start");
    }

    #[test]
    fn test_valid_sweeps() {
        assert!(check_sim_param(0.0, 1.0, Some(0.1)).is_ok());
        assert!(check_sim_param(0.0, 1.0, None).is_ok());
        assert!(check_sim_param(1.0, 0.0, Some(-0.1)).is_ok());
        // A degenerate sweep with start == stop is accepted.
        assert!(check_sim_param(1.0, 1.0, Some(0.5)).is_ok());
    }

    #[test]
    fn test_default_step_is_positive() {
        assert_eq!(
            check_sim_param(2.0, 1.0, None),
            Err(SweepError::StopBelowStart)
        );
    }
}

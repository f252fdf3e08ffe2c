//! Input validation for simulation runs.
//!
//! Checks configuration values and workload integrity before any
//! simulator runs. Detects:
//! - Non-positive process counts and time quanta
//! - Duplicate or zero process IDs
//! - Zero-length bursts
//! - Workloads whose finish time would overflow the tick clock
//! - Unwritable output destinations (reported by the result sink)

use crate::models::{Process, ProcessId, Ticks};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Process count is zero or negative.
    NonPositiveProcessCount,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Results cannot be written to the requested destination.
    UnwritableOutput,
    /// Two processes share the same ID.
    DuplicateProcessId,
    /// A process uses the reserved ID 0.
    ZeroProcessId,
    /// A process requires no CPU time.
    ZeroBurst,
    /// The latest arrival plus the total burst does not fit in `Ticks`.
    TimeOverflow,
    /// A report could not be serialized.
    RenderFailure,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the error stems from configuration rather than workload data.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self.kind,
            ValidationErrorKind::NonPositiveProcessCount
                | ValidationErrorKind::NonPositiveQuantum
                | ValidationErrorKind::UnwritableOutput
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a configured process count.
///
/// Returns the count as `usize` when it is strictly positive.
pub fn validate_process_count(count: i64) -> Result<usize, ValidationError> {
    if count <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveProcessCount,
            format!("Process count must be positive, got {count}"),
        ));
    }
    usize::try_from(count).map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::NonPositiveProcessCount,
            format!("Process count {count} does not fit this platform"),
        )
    })
}

/// Validates a configured Round Robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<Ticks, ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        ));
    }
    Ok(quantum as Ticks)
}

/// Validates a workload supplied by the caller.
///
/// Checks:
/// 1. No process uses ID 0
/// 2. No duplicate process IDs
/// 3. Every process has a positive burst time
/// 4. The latest arrival plus the total burst fits in `Ticks`, which bounds
///    every simulator clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<ProcessId> = HashSet::new();
    let mut latest_arrival: Ticks = 0;
    let mut total_burst: Option<Ticks> = Some(0);

    for p in processes {
        latest_arrival = latest_arrival.max(p.arrival_time);
        total_burst = total_burst.and_then(|t| t.checked_add(p.burst_time));

        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroProcessId,
                "Process IDs start at 1; found ID 0",
            ));
        } else if !seen.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateProcessId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process {} has a zero burst time", p.id),
            ));
        }
    }

    if total_burst
        .and_then(|t| t.checked_add(latest_arrival))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Workload finish time overflows the clock (latest arrival {latest_arrival})"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_process_count() {
        assert_eq!(validate_process_count(50), Ok(50));
        assert_eq!(validate_process_count(1), Ok(1));
    }

    #[test]
    fn test_non_positive_process_count() {
        for bad in [0, -1, -50] {
            let err = validate_process_count(bad).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::NonPositiveProcessCount);
            assert!(err.is_configuration_error());
        }
    }

    #[test]
    fn test_quantum() {
        assert_eq!(validate_quantum(4), Ok(4));
        let err = validate_quantum(0).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveQuantum);
        assert!(err.message.contains("got 0"));
        assert!(validate_quantum(-3).is_err());
    }

    #[test]
    fn test_valid_workload() {
        let set = vec![Process::new(1, 0, 5), Process::new(2, 0, 1)];
        assert!(validate_workload(&set).is_ok());
        assert!(validate_workload(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let set = vec![Process::new(1, 0, 5), Process::new(1, 2, 3)];
        let errors = validate_workload(&set).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateProcessId);
        assert!(!errors[0].is_configuration_error());
    }

    #[test]
    fn test_collects_all_errors() {
        let set = vec![
            Process::new(0, 0, 5),
            Process::new(2, 0, 0),
            Process::new(2, 1, 1),
        ];
        let errors = validate_workload(&set).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::ZeroProcessId,
                ValidationErrorKind::ZeroBurst,
                ValidationErrorKind::DuplicateProcessId,
            ]
        );
    }

    #[test]
    fn test_finish_time_overflow() {
        let set = vec![Process::new(1, 0, 3), Process::new(2, Ticks::MAX, 2)];
        let errors = validate_workload(&set).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
        assert!(!errors[0].is_configuration_error());

        let bursts = vec![Process::new(1, 0, Ticks::MAX), Process::new(2, 0, 1)];
        let errors = validate_workload(&bursts).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        // Exactly reaching the maximum is still representable.
        let edge = vec![Process::new(1, Ticks::MAX - 5, 5)];
        assert!(validate_workload(&edge).is_ok());
    }

    #[test]
    fn test_display_is_message() {
        let err = validate_quantum(-1).unwrap_err();
        assert_eq!(err.to_string(), "Time quantum must be positive, got -1");
    }
}

//! Dispatch configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use basin_core::GridLimits;
use basin_solver::SolverOptions;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`DispatchConfig::validate()`] or while
/// starting the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The worker thread name is empty.
    EmptyThreadName,
    /// The thread name contains an interior NUL byte.
    InvalidThreadName {
        /// The rejected name.
        name: String,
    },
    /// `completion_capacity` is zero.
    CompletionCapacityZero,
    /// A dimension limit is zero, so no grid could ever be accepted.
    InvalidLimits {
        /// Configured maximum rows.
        max_rows: usize,
        /// Configured maximum columns.
        max_cols: usize,
    },
    /// The OS refused to spawn the worker thread.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyThreadName => write!(f, "thread_name must not be empty"),
            Self::InvalidThreadName { name } => {
                write!(f, "thread_name {name:?} contains a NUL byte")
            }
            Self::CompletionCapacityZero => {
                write!(f, "completion_capacity must be at least 1")
            }
            Self::InvalidLimits { max_rows, max_cols } => {
                write!(f, "grid limits {max_rows}x{max_cols} must both be at least 1")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── DispatchConfig ─────────────────────────────────────────────────

/// Configuration for a [`BackgroundSolver`](crate::BackgroundSolver).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Name given to the worker thread. Default: `"basin-solver"`.
    pub thread_name: String,
    /// Bound on undelivered completion events. Default: 4. Minimum: 1.
    pub completion_capacity: usize,
    /// Dimension limits checked on every submit. Default: 999 x 999.
    pub limits: GridLimits,
    /// Solver options applied to every job.
    pub solver: SolverOptions,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            thread_name: "basin-solver".to_string(),
            completion_capacity: 4,
            limits: GridLimits::default(),
            solver: SolverOptions::default(),
        }
    }
}

impl DispatchConfig {
    /// Check every structural invariant without spawning anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_name.is_empty() {
            return Err(ConfigError::EmptyThreadName);
        }
        if self.thread_name.contains('\0') {
            return Err(ConfigError::InvalidThreadName {
                name: self.thread_name.clone(),
            });
        }
        if self.completion_capacity == 0 {
            return Err(ConfigError::CompletionCapacityZero);
        }
        if self.limits.max_rows == 0 || self.limits.max_cols == 0 {
            return Err(ConfigError::InvalidLimits {
                max_rows: self.limits.max_rows,
                max_cols: self.limits.max_cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(DispatchConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_thread_name_rejected() {
        let cfg = DispatchConfig {
            thread_name: String::new(),
            ..DispatchConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyThreadName));
    }

    #[test]
    fn nul_in_thread_name_rejected() {
        let cfg = DispatchConfig {
            thread_name: "solver\0x".to_string(),
            ..DispatchConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidThreadName { .. })
        ));
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = DispatchConfig {
            completion_capacity: 0,
            ..DispatchConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::CompletionCapacityZero));
    }

    #[test]
    fn zero_limits_rejected() {
        let cfg = DispatchConfig {
            limits: GridLimits {
                max_rows: 0,
                max_cols: 5,
            },
            ..DispatchConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidLimits {
                max_rows: 0,
                max_cols: 5
            })
        );
    }

    #[test]
    fn display_names_the_field() {
        let msg = ConfigError::CompletionCapacityZero.to_string();
        assert!(msg.contains("completion_capacity"));
    }
}

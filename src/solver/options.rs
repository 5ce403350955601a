//! Solver run options.

use serde::{Deserialize, Serialize};

/// Budget and verbosity for one solver call.
///
/// # Examples
///
/// ```
/// use u_facility::solver::SolverOptions;
///
/// let opts = SolverOptions::default().with_time_limit(30.0).with_verbose(true);
/// assert_eq!(opts.time_limit_secs, 30.0);
/// assert!(opts.verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Wall-clock budget in seconds, enforced by the backend.
    pub time_limit_secs: f64,
    /// Relative optimality gap at which the backend may stop and report optimal.
    pub relative_gap: f64,
    /// Let the backend print its own progress log.
    pub verbose: bool,
}

impl SolverOptions {
    /// Sets the wall-clock budget in seconds.
    pub fn with_time_limit(mut self, secs: f64) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// Sets the relative optimality gap; `0.0` demands a proven optimum.
    pub fn with_relative_gap(mut self, gap: f64) -> Self {
        self.relative_gap = gap;
        self
    }

    /// Enables or disables backend console output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            time_limit_secs: 600.0,
            relative_gap: 1e-4,
            verbose: false,
        }
    }
}

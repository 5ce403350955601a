//! Formulation configuration.

use serde::{Deserialize, Serialize};

use crate::solver::SolverOptions;

/// Default number of nearest non-leader facilities per customer.
pub const DEFAULT_NEIGHBOURS: usize = 5;
/// Default number of largest-capacity leaders.
pub const DEFAULT_CAPACITY_LEADERS: usize = 2;
/// Default number of cheapest-setup leaders.
pub const DEFAULT_SETUP_LEADERS: usize = 5;
/// Default setup-cost weight for both formulations.
pub const DEFAULT_SETUP_WEIGHT: f64 = 1.0;
/// Default budget of the candidate-reduced solve, in seconds.
pub const REDUCED_TIME_LIMIT_SECS: f64 = 600.0;
/// Default budget of the full solve, in seconds.
pub const FULL_TIME_LIMIT_SECS: f64 = 1200.0;

/// Parameters of the candidate-reduced formulation.
///
/// # Examples
///
/// ```
/// use u_facility::formulation::ReductionConfig;
///
/// let config = ReductionConfig::default()
///     .with_neighbours(3)
///     .with_capacity_leaders(1)
///     .with_setup_leaders(0)
///     .with_time_limit(60.0);
/// assert_eq!(config.neighbours, 3);
/// assert_eq!(config.setup_weight, 1.0);
/// assert_eq!(config.solver.time_limit_secs, 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// Nearest non-leader facilities kept per customer (`k`).
    pub neighbours: usize,
    /// Largest-capacity facilities made universal candidates.
    pub capacity_leaders: usize,
    /// Cheapest-setup facilities made universal candidates.
    pub setup_leaders: usize,
    /// Multiplier on setup costs in the objective.
    pub setup_weight: f64,
    /// Solver budget and verbosity.
    pub solver: SolverOptions,
}

impl ReductionConfig {
    /// Sets the neighbour count `k`.
    pub fn with_neighbours(mut self, k: usize) -> Self {
        self.neighbours = k;
        self
    }

    /// Sets the number of capacity leaders.
    pub fn with_capacity_leaders(mut self, n: usize) -> Self {
        self.capacity_leaders = n;
        self
    }

    /// Sets the number of setup-cost leaders.
    pub fn with_setup_leaders(mut self, n: usize) -> Self {
        self.setup_leaders = n;
        self
    }

    /// Sets the setup-cost weight.
    pub fn with_setup_weight(mut self, weight: f64) -> Self {
        self.setup_weight = weight;
        self
    }

    /// Sets the solver budget in seconds.
    pub fn with_time_limit(mut self, secs: f64) -> Self {
        self.solver.time_limit_secs = secs;
        self
    }

    /// Sets the solver's relative optimality gap.
    pub fn with_relative_gap(mut self, gap: f64) -> Self {
        self.solver.relative_gap = gap;
        self
    }

    /// Enables or disables solver console output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.solver.verbose = verbose;
        self
    }
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            neighbours: DEFAULT_NEIGHBOURS,
            capacity_leaders: DEFAULT_CAPACITY_LEADERS,
            setup_leaders: DEFAULT_SETUP_LEADERS,
            setup_weight: DEFAULT_SETUP_WEIGHT,
            solver: SolverOptions::default().with_time_limit(REDUCED_TIME_LIMIT_SECS),
        }
    }
}

/// Parameters of the full formulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullConfig {
    /// Multiplier on setup costs in the objective.
    pub setup_weight: f64,
    /// Solver budget and verbosity.
    pub solver: SolverOptions,
}

impl FullConfig {
    /// Sets the setup-cost weight.
    pub fn with_setup_weight(mut self, weight: f64) -> Self {
        self.setup_weight = weight;
        self
    }

    /// Sets the solver budget in seconds.
    pub fn with_time_limit(mut self, secs: f64) -> Self {
        self.solver.time_limit_secs = secs;
        self
    }

    /// Sets the solver's relative optimality gap.
    pub fn with_relative_gap(mut self, gap: f64) -> Self {
        self.solver.relative_gap = gap;
        self
    }

    /// Enables or disables solver console output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.solver.verbose = verbose;
        self
    }
}

impl Default for FullConfig {
    fn default() -> Self {
        Self {
            setup_weight: DEFAULT_SETUP_WEIGHT,
            solver: SolverOptions::default().with_time_limit(FULL_TIME_LIMIT_SECS),
        }
    }
}

//! Solver configuration and time budgets.

use serde::{Deserialize, Serialize};

/// Default weight of the global span term in the objective.
pub const DEFAULT_SPAN_COEFFICIENT: u64 = 100;

/// Default per-stop waiting allowance, in minutes.
pub const DEFAULT_WAITING_STOP_MINUTES: u64 = 15;

/// Default maximum route span, in minutes.
pub const DEFAULT_MAX_TRAVEL_TIME_MINUTES: u64 = 150;

/// Tunables that do not change the problem instance.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::SolverConfig;
///
/// let config = SolverConfig::default().with_local_search(true);
/// assert_eq!(config.span_coefficient, 100);
/// assert!(config.local_search);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Weight applied to `max route time - min route time` in the objective.
    pub span_coefficient: u64,
    /// Run 2-opt and inter-route relocation after construction.
    pub local_search: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            span_coefficient: DEFAULT_SPAN_COEFFICIENT,
            local_search: false,
        }
    }
}

impl SolverConfig {
    /// Sets the span coefficient.
    #[must_use]
    pub fn with_span_coefficient(mut self, coefficient: u64) -> Self {
        self.span_coefficient = coefficient;
        self
    }

    /// Enables or disables post-construction improvement.
    #[must_use]
    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.local_search = enabled;
        self
    }
}

/// Per-vehicle time budgets, in seconds.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::TimeBudget;
///
/// let budget = TimeBudget::from_minutes(15, 150);
/// assert_eq!(budget.waiting_stop_seconds, 900);
/// assert_eq!(budget.max_travel_time_seconds, 9000);
/// assert_eq!(budget, TimeBudget::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBudget {
    /// Maximum waiting slack allowed at a single stop.
    pub waiting_stop_seconds: u64,
    /// Maximum span of a single vehicle's route.
    pub max_travel_time_seconds: u64,
}

impl TimeBudget {
    /// Creates a budget from values in seconds.
    pub fn new(waiting_stop_seconds: u64, max_travel_time_seconds: u64) -> Self {
        Self {
            waiting_stop_seconds,
            max_travel_time_seconds,
        }
    }

    /// Creates a budget from values in minutes.
    pub fn from_minutes(waiting_stop_minutes: u64, max_travel_time_minutes: u64) -> Self {
        Self::new(
            waiting_stop_minutes.saturating_mul(60),
            max_travel_time_minutes.saturating_mul(60),
        )
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_WAITING_STOP_MINUTES, DEFAULT_MAX_TRAVEL_TIME_MINUTES)
    }
}

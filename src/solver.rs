//! Solve entry point.
//!
//! A solve moves through `Building -> Searching -> Solved | Infeasible` in a
//! single blocking call. Nothing survives between calls.

use std::fmt;

use crate::config::{SolverConfig, TimeBudget};
use crate::constructive::cheapest_arc;
use crate::error::RoutingError;
use crate::evaluation::{decode, TimeDimension};
use crate::local_search::improve;
use crate::models::{RoutingModel, RoutingProblem, Solution};
use crate::validation::validate;

/// Phases of a single solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// Validating input and assembling the model.
    Building,
    /// Running the construction search.
    Searching,
    /// Terminal: a complete solution was found.
    Solved,
    /// Terminal: no feasible solution was found.
    Infeasible,
}

impl fmt::Display for SolveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Building => "building",
            Self::Searching => "searching",
            Self::Solved => "solved",
            Self::Infeasible => "infeasible",
        };
        f.write_str(name)
    }
}

/// Configured solver; each [`Solver::solve`] call is independent.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::{SolverConfig, TimeBudget};
/// use fleet_routing::Solver;
///
/// let solver = Solver::new(SolverConfig::default().with_local_search(true));
/// let matrix = vec![
///     vec![0, 1, 2, 3],
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![3, 2, 1, 0],
/// ];
/// let sol = solver.solve(&matrix, 2, TimeBudget::new(60, 100))?;
/// assert_eq!(sol.num_served(), 3);
/// assert_eq!(sol.num_used_vehicles(), 2);
/// # Ok::<(), fleet_routing::RoutingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validates the input, builds routes and decodes them.
    ///
    /// Returns a complete solution or an error; never a partial solution.
    pub fn solve(
        &self,
        time_matrix: &[Vec<i64>],
        vehicle_count: usize,
        budget: TimeBudget,
    ) -> Result<Solution, RoutingError> {
        transition(SolveState::Building);
        let matrix = validate(
            time_matrix,
            vehicle_count,
            budget.waiting_stop_seconds,
            budget.max_travel_time_seconds,
        )?;
        let model = RoutingModel::new(matrix, vehicle_count, budget);
        // The fleet is homogeneous: every vehicle shares the lead vehicle's budgets.
        let Some(lead) = model.vehicles().first() else {
            return Err(RoutingError::InvalidParameter {
                name: "vehicle_count",
            });
        };
        let dimension =
            TimeDimension::for_vehicle(lead).with_span_coefficient(self.config.span_coefficient);

        transition(SolveState::Searching);
        let routes = match cheapest_arc(&model, &dimension) {
            Ok(routes) => routes,
            Err(reason) => {
                transition(SolveState::Infeasible);
                log::warn!("no feasible solution: {reason}");
                return Err(RoutingError::NoFeasibleSolution(reason));
            }
        };
        let routes = if self.config.local_search {
            improve(routes, &model, &dimension)
        } else {
            routes
        };

        let solution = decode(&routes, &dimension);
        transition(SolveState::Solved);
        log::info!(
            "solved {} stop(s) with {} of {} vehicle(s): total {}s, longest {}s, objective {}",
            model.stops().len(),
            solution.num_used_vehicles(),
            model.vehicle_count(),
            solution.total_time_seconds,
            solution.max_route_time_seconds,
            solution.objective_value
        );
        Ok(solution)
    }
}

fn transition(state: SolveState) {
    log::debug!("solve state: {state}");
}

/// Solves with the default configuration.
///
/// # Examples
///
/// ```
/// use fleet_routing::{solve, RoutingError};
///
/// let err = solve(vec![vec![0, 1], vec![1]], 1, 60, 600).unwrap_err();
/// assert!(matches!(err, RoutingError::InvalidMatrixShape { .. }));
/// ```
pub fn solve(
    time_matrix: Vec<Vec<i64>>,
    vehicle_count: usize,
    waiting_stop_seconds: u64,
    max_travel_time_seconds: u64,
) -> Result<Solution, RoutingError> {
    Solver::default().solve(
        &time_matrix,
        vehicle_count,
        TimeBudget::new(waiting_stop_seconds, max_travel_time_seconds),
    )
}

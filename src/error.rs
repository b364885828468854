//! Error taxonomy for a solve call.
//!
//! Input-shape errors are raised before any search work begins. Feasibility
//! errors carry an [`Infeasibility`] naming the first vehicle/stop combination
//! that could not be served.

use thiserror::Error;

/// Why the construction search could not produce a complete solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Infeasibility {
    /// No `(vehicle, stop)` extension fit within the span cap.
    ///
    /// `vehicle` and `stop` name the cheapest rejected candidate, i.e. the
    /// arc the search would have committed had the cap allowed it.
    #[error(
        "vehicle {vehicle} cannot reach stop {stop} \
         ({cumulative_time}s + {transit_time}s > {max_travel_time}s), \
         {unassigned} stop(s) left unassigned"
    )]
    NoFeasibleArc {
        /// Vehicle whose route could not be extended.
        vehicle: usize,
        /// Stop that could not be appended.
        stop: usize,
        /// Cumulative time of the vehicle's route before the arc.
        cumulative_time: u64,
        /// Travel time of the rejected arc.
        transit_time: u64,
        /// Span cap of the vehicle.
        max_travel_time: u64,
        /// Number of stops still unassigned when the search stalled.
        unassigned: usize,
    },
    /// Closing a route back to the depot pushed it over the span cap.
    #[error("vehicle {vehicle} returns to the depot after {route_time}s, over the {max_travel_time}s cap")]
    ReturnLegOverflow {
        /// Vehicle whose closing leg overflowed.
        vehicle: usize,
        /// Route time including the return leg.
        route_time: u64,
        /// Span cap of the vehicle.
        max_travel_time: u64,
    },
}

/// Errors returned by [`crate::solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The matrix is not square, or has fewer than two nodes.
    #[error("time matrix must be square with at least 2 nodes: {rows} row(s), row {row} has {len} cell(s)")]
    InvalidMatrixShape {
        /// Number of rows supplied.
        rows: usize,
        /// First offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },
    /// A travel time is negative.
    #[error("negative travel time {value} from node {from} to node {to}")]
    NegativeTravelTime {
        /// Origin node.
        from: usize,
        /// Destination node.
        to: usize,
        /// Offending value.
        value: i64,
    },
    /// A scalar parameter is zero.
    #[error("parameter `{name}` must be positive")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
    },
    /// The search could not serve every stop within the budgets.
    #[error("no feasible solution: {0}")]
    NoFeasibleSolution(Infeasibility),
}

impl RoutingError {
    /// Returns `true` for errors detected before the search started.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::NoFeasibleSolution(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        let shape = RoutingError::InvalidMatrixShape {
            rows: 3,
            row: 1,
            len: 2,
        };
        assert!(shape.is_input_error());
        let infeasible = RoutingError::NoFeasibleSolution(Infeasibility::ReturnLegOverflow {
            vehicle: 0,
            route_time: 40,
            max_travel_time: 30,
        });
        assert!(!infeasible.is_input_error());
    }

    #[test]
    fn test_display_names_vehicle_and_stop() {
        let err = RoutingError::NoFeasibleSolution(Infeasibility::NoFeasibleArc {
            vehicle: 1,
            stop: 4,
            cumulative_time: 20,
            transit_time: 15,
            max_travel_time: 30,
            unassigned: 2,
        });
        let msg = err.to_string();
        assert!(msg.contains("vehicle 1"));
        assert!(msg.contains("stop 4"));
        assert!(msg.contains("2 stop(s)"));
    }

    #[test]
    fn test_infeasibility_messages() {
        let arc = Infeasibility::NoFeasibleArc {
            vehicle: 0,
            stop: 3,
            cumulative_time: 20,
            transit_time: 10,
            max_travel_time: 25,
            unassigned: 1,
        };
        assert_eq!(
            arc.to_string(),
            "vehicle 0 cannot reach stop 3 (20s + 10s > 25s), 1 stop(s) left unassigned"
        );
        let overflow = Infeasibility::ReturnLegOverflow {
            vehicle: 2,
            route_time: 40,
            max_travel_time: 30,
        };
        assert_eq!(
            overflow.to_string(),
            "vehicle 2 returns to the depot after 40s, over the 30s cap"
        );
        let wrapped = RoutingError::NoFeasibleSolution(overflow.clone());
        assert_eq!(
            wrapped.to_string(),
            format!("no feasible solution: {overflow}")
        );
    }

    #[test]
    fn test_display_negative_time() {
        let err = RoutingError::NegativeTravelTime {
            from: 2,
            to: 0,
            value: -5,
        };
        assert_eq!(err.to_string(), "negative travel time -5 from node 2 to node 0");
    }
}

//! Cheapest-arc constructive heuristic over the whole fleet.
//!
//! # Algorithm
//!
//! Every vehicle starts parked at the depot. At each step, every
//! `(vehicle, unassigned stop)` pair is priced by the travel time from the
//! vehicle's current last node to the stop. Pairs whose arrival would exceed
//! the span cap are discarded; the cheapest remaining pair is committed,
//! ties going to the lowest vehicle id and then the lowest stop index. Once
//! every stop is placed, each route is closed back to the depot and the
//! closing leg is checked against the cap.
//!
//! # Complexity
//!
//! O(N × V) per step and N steps, so O(N² × V) overall.

use crate::error::Infeasibility;
use crate::evaluation::TimeDimension;
use crate::models::{Route, RoutingProblem};

/// A priced `(vehicle, stop)` extension.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    vehicle: usize,
    stop: usize,
    transit: u64,
    cumul_before: u64,
}

impl Candidate {
    /// Strictly cheaper than `other`; scan order settles ties.
    fn beats(&self, other: Option<&Candidate>) -> bool {
        other.map_or(true, |o| self.transit < o.transit)
    }
}

/// Builds one closed route per vehicle with the cheapest-arc heuristic.
///
/// Returns the routes indexed by vehicle id, or the [`Infeasibility`] that
/// stopped the search. Vehicles that receive no stop get the route `[0, 0]`
/// with time 0.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::TimeBudget;
/// use fleet_routing::constructive::cheapest_arc;
/// use fleet_routing::distance::TimeMatrix;
/// use fleet_routing::evaluation::TimeDimension;
/// use fleet_routing::models::RoutingModel;
///
/// // Depot and three stops on a line, one unit apart.
/// let tm = TimeMatrix::from_data(4, vec![
///     0, 1, 2, 3,
///     1, 0, 1, 2,
///     2, 1, 0, 1,
///     3, 2, 1, 0,
/// ]).expect("4x4");
/// let model = RoutingModel::new(tm, 1, TimeBudget::new(60, 100));
/// let routes = cheapest_arc(&model, &TimeDimension::new(60, 100)).expect("feasible");
/// assert_eq!(routes[0].nodes(), vec![0, 1, 2, 3, 0]);
/// assert_eq!(routes[0].route_time(), 6);
/// ```
pub fn cheapest_arc<P: RoutingProblem + ?Sized>(
    problem: &P,
    dimension: &TimeDimension,
) -> Result<Vec<Route>, Infeasibility> {
    let n = problem.node_count();
    let depot = problem.depot();
    let mut routes: Vec<Route> = (0..problem.vehicle_count()).map(Route::new).collect();
    let mut assigned = vec![false; n];
    if let Some(flag) = assigned.get_mut(depot) {
        *flag = true;
    }
    let mut remaining = problem.stops().len();

    while remaining > 0 {
        let mut best: Option<Candidate> = None;
        let mut rejected: Option<Candidate> = None;

        for route in &routes {
            let from = route.last_node();
            let cumul_before = route.cumulative_time();
            for stop in problem.stops() {
                if assigned[stop] {
                    continue;
                }
                let candidate = Candidate {
                    vehicle: route.vehicle_id(),
                    stop,
                    transit: dimension.transit(problem, from, stop),
                    cumul_before,
                };
                if dimension.extend(cumul_before, candidate.transit, 0).is_some() {
                    if candidate.beats(best.as_ref()) {
                        best = Some(candidate);
                    }
                } else if candidate.beats(rejected.as_ref()) {
                    rejected = Some(candidate);
                }
            }
        }

        let Some(chosen) = best else {
            return Err(stalled(rejected, &assigned, remaining, dimension));
        };
        let cumul = chosen.cumul_before + chosen.transit;
        routes[chosen.vehicle].push_visit(chosen.stop, 0, cumul);
        assigned[chosen.stop] = true;
        remaining -= 1;
        log::trace!(
            "vehicle {} -> stop {} (+{}s, cumul {}s)",
            chosen.vehicle,
            chosen.stop,
            chosen.transit,
            cumul
        );
    }

    for route in &mut routes {
        let cumul_before = route.cumulative_time();
        let transit = if route.is_empty() {
            0
        } else {
            dimension.transit(problem, route.last_node(), depot)
        };
        match dimension.extend(cumul_before, transit, 0) {
            Some(end) => route.close(end),
            None => {
                return Err(Infeasibility::ReturnLegOverflow {
                    vehicle: route.vehicle_id(),
                    route_time: cumul_before.saturating_add(transit),
                    max_travel_time: dimension.max_travel_time(),
                })
            }
        }
    }

    Ok(routes)
}

/// Describes a stalled search by its cheapest rejected candidate.
fn stalled(
    rejected: Option<Candidate>,
    assigned: &[bool],
    remaining: usize,
    dimension: &TimeDimension,
) -> Infeasibility {
    // Without any vehicle there is no rejected candidate; blame the first
    // unassigned stop on vehicle 0.
    let candidate = rejected.unwrap_or_else(|| Candidate {
        vehicle: 0,
        stop: assigned.iter().position(|&a| !a).unwrap_or(0),
        transit: 0,
        cumul_before: 0,
    });
    Infeasibility::NoFeasibleArc {
        vehicle: candidate.vehicle,
        stop: candidate.stop,
        cumulative_time: candidate.cumul_before,
        transit_time: candidate.transit,
        max_travel_time: dimension.max_travel_time(),
        unassigned: remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeBudget;
    use crate::distance::TimeMatrix;
    use crate::models::RoutingModel;

    fn model(n: usize, data: Vec<u64>, vehicles: usize, max: u64) -> (RoutingModel, TimeDimension) {
        let tm = TimeMatrix::from_data(n, data).expect("square");
        (
            RoutingModel::new(tm, vehicles, TimeBudget::new(60, max)),
            TimeDimension::new(60, max),
        )
    }

    /// Depot between two clusters: {1, 2} on one side, {3, 4} on the other.
    fn two_clusters(vehicles: usize) -> (RoutingModel, TimeDimension) {
        #[rustfmt::skip]
        let data = vec![
            0, 10, 12, 11, 13,
            10, 0, 3, 21, 23,
            12, 3, 0, 23, 25,
            11, 21, 23, 0, 3,
            13, 23, 25, 3, 0,
        ];
        model(5, data, vehicles, 1000)
    }

    #[test]
    fn test_single_stop() {
        let (m, dim) = model(2, vec![0, 10, 10, 0], 1, 100);
        let routes = cheapest_arc(&m, &dim).expect("feasible");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].nodes(), vec![0, 1, 0]);
        assert_eq!(routes[0].route_time(), 20);
    }

    #[test]
    fn test_clusters_split_across_vehicles() {
        let (m, dim) = two_clusters(2);
        let routes = cheapest_arc(&m, &dim).expect("feasible");
        assert_eq!(routes[0].nodes(), vec![0, 1, 2, 0]);
        assert_eq!(routes[1].nodes(), vec![0, 3, 4, 0]);
        assert_eq!(routes[0].route_time(), 25);
        assert_eq!(routes[1].route_time(), 27);
    }

    #[test]
    fn test_idle_vehicle_closes_at_zero() {
        let (m, dim) = two_clusters(3);
        let routes = cheapest_arc(&m, &dim).expect("feasible");
        assert_eq!(routes[2].nodes(), vec![0, 0]);
        assert_eq!(routes[2].route_time(), 0);
    }

    #[test]
    fn test_tie_prefers_lowest_vehicle_then_stop() {
        // Every arc costs 5: vehicle 0 takes stop 1 first.
        let (m, dim) = model(3, vec![0, 5, 5, 5, 0, 5, 5, 5, 0], 2, 100);
        let routes = cheapest_arc(&m, &dim).expect("feasible");
        assert_eq!(routes[0].stops(), vec![1, 2]);
        assert!(routes[1].is_empty());
    }

    #[test]
    fn test_cap_skips_to_next_best() {
        // Vehicle 0 cannot take the cheap arc 1 -> 2 (cumul 40 + 10 > 48),
        // so vehicle 1 serves stop 2 from the depot.
        #[rustfmt::skip]
        let data = vec![
            0, 40, 45,
            5, 0, 10,
            3, 10, 0,
        ];
        let (m, dim) = model(3, data, 2, 48);
        let routes = cheapest_arc(&m, &dim).expect("feasible");
        assert_eq!(routes[0].nodes(), vec![0, 1, 0]);
        assert_eq!(routes[1].nodes(), vec![0, 2, 0]);
        assert_eq!(routes[0].route_time(), 45);
        assert_eq!(routes[1].route_time(), 48);
    }

    #[test]
    fn test_no_feasible_arc() {
        let (m, dim) = model(3, vec![0, 10, 40, 10, 0, 40, 40, 40, 0], 1, 30);
        let err = cheapest_arc(&m, &dim).expect_err("stop 2 out of reach");
        assert_eq!(
            err,
            Infeasibility::NoFeasibleArc {
                vehicle: 0,
                stop: 2,
                cumulative_time: 10,
                transit_time: 40,
                max_travel_time: 30,
                unassigned: 1,
            }
        );
    }

    #[test]
    fn test_return_leg_overflow() {
        // 0 -> 1 -> 2 -> 3 costs 30, the return leg pushes it to 40.
        #[rustfmt::skip]
        let data = vec![
            0, 10, 10, 10,
            10, 0, 10, 10,
            10, 10, 0, 10,
            10, 10, 10, 0,
        ];
        let (m, dim) = model(4, data, 1, 30);
        let err = cheapest_arc(&m, &dim).expect_err("closing leg overflows");
        assert_eq!(
            err,
            Infeasibility::ReturnLegOverflow {
                vehicle: 0,
                route_time: 40,
                max_travel_time: 30,
            }
        );
    }

    #[test]
    fn test_deterministic() {
        let (m, dim) = two_clusters(2);
        let a = cheapest_arc(&m, &dim).expect("feasible");
        let b = cheapest_arc(&m, &dim).expect("feasible");
        assert_eq!(a, b);
    }
}

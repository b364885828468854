//! Turns committed route arenas into a [`Solution`].

use std::collections::BTreeMap;

use super::TimeDimension;
use crate::models::{Route, Solution};

/// Renders closed routes and their metrics.
///
/// Pure transformation: the routes are expected to be closed and within the
/// span cap already. The total and the objective saturate at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use fleet_routing::evaluation::{decode, TimeDimension};
/// use fleet_routing::models::Route;
///
/// let mut r0 = Route::new(0);
/// r0.push_visit(1, 0, 10);
/// r0.close(20);
/// let mut r1 = Route::new(1);
/// r1.close(0);
///
/// let sol = decode(&[r0, r1], &TimeDimension::new(60, 100));
/// assert_eq!(sol.routes[&1], vec![0, 0]);
/// assert_eq!(sol.max_route_time_seconds, 20);
/// assert_eq!(sol.total_time_seconds, 20);
/// assert_eq!(sol.objective_value, 20 + 100 * 20);
/// ```
pub fn decode(routes: &[Route], dimension: &TimeDimension) -> Solution {
    let mut node_lists = BTreeMap::new();
    let mut route_times = BTreeMap::new();
    for route in routes {
        node_lists.insert(route.vehicle_id(), route.nodes());
        route_times.insert(route.vehicle_id(), route.route_time());
    }

    let times: Vec<u64> = route_times.values().copied().collect();
    Solution {
        routes: node_lists,
        route_time_seconds: route_times,
        max_route_time_seconds: times.iter().copied().max().unwrap_or(0),
        total_time_seconds: times.iter().fold(0u64, |acc, &t| acc.saturating_add(t)),
        objective_value: dimension.objective(&times),
    }
}

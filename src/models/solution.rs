//! Decoded solution returned to callers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A complete, constraint-satisfying assignment of stops to vehicles.
///
/// Every vehicle of the fleet has an entry, unused ones with route `[0, 0]`
/// and time 0. The interior nodes of all routes partition the stops.
///
/// # Examples
///
/// ```
/// use fleet_routing::solve;
///
/// let sol = solve(vec![vec![0, 10], vec![10, 0]], 1, 900, 9000)?;
/// assert_eq!(sol.routes[&0], vec![0, 1, 0]);
/// assert_eq!(sol.route_time_seconds[&0], 20);
/// assert_eq!(sol.num_served(), 1);
/// # Ok::<(), fleet_routing::RoutingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Node sequence per vehicle, depot first and last.
    pub routes: BTreeMap<usize, Vec<usize>>,
    /// Span of each vehicle's route in seconds.
    pub route_time_seconds: BTreeMap<usize, u64>,
    /// Longest route span.
    pub max_route_time_seconds: u64,
    /// Sum of all route spans.
    pub total_time_seconds: u64,
    /// Total time plus the weighted span term.
    pub objective_value: u64,
}

impl Solution {
    /// Number of vehicles in the solution.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of vehicles that serve at least one stop.
    pub fn num_used_vehicles(&self) -> usize {
        self.routes.values().filter(|r| r.len() > 2).count()
    }

    /// Total number of stops served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.values().map(|r| r.len().saturating_sub(2)).sum()
    }

    /// Shortest route span.
    pub fn min_route_time_seconds(&self) -> u64 {
        self.route_time_seconds.values().copied().min().unwrap_or(0)
    }

    /// Interior stops of vehicle `vehicle`, in visit order.
    pub fn stops_of(&self, vehicle: usize) -> &[usize] {
        match self.routes.get(&vehicle) {
            Some(route) if route.len() >= 2 => &route[1..route.len() - 1],
            _ => &[],
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Objective: {} seconds", self.objective_value)?;
        for (vehicle, route) in &self.routes {
            writeln!(f, "Route for vehicle {vehicle}:")?;
            let path = route
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(" -> ");
            writeln!(f, " {path}")?;
            let time = self.route_time_seconds.get(vehicle).copied().unwrap_or(0);
            writeln!(f, "Time of the route: {}", format_duration(time))?;
        }
        writeln!(
            f,
            "Maximum time of all routes: {}",
            format_duration(self.max_route_time_seconds)
        )?;
        write!(
            f,
            "Total time of all routes: {}",
            format_duration(self.total_time_seconds)
        )
    }
}

/// Renders a number of seconds as a compact delta such as `2h5m3s`.
///
/// Leading zero units are dropped; once a unit is printed every smaller one
/// follows.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::format_duration;
///
/// assert_eq!(format_duration(42), "42s");
/// assert_eq!(format_duration(7503), "2h5m3s");
/// assert_eq!(format_duration(86_400), "1d0h0m0s");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let (days, rest) = (seconds / 86_400, seconds % 86_400);
    let (hours, rest) = (rest / 3_600, rest % 3_600);
    let (minutes, secs) = (rest / 60, rest % 60);
    if days > 0 {
        format!("{days}d{hours}h{minutes}m{secs}s")
    } else if hours > 0 {
        format!("{hours}h{minutes}m{secs}s")
    } else if minutes > 0 {
        format!("{minutes}m{secs}s")
    } else {
        format!("{secs}s")
    }
}

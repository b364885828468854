//! The cumulative time dimension shared by every vehicle.

use crate::config::DEFAULT_SPAN_COEFFICIENT;
use crate::models::{Route, RoutingProblem, Vehicle};

/// Tracks cumulative time along routes and scores complete solutions.
///
/// Along a route, `cumul[p + 1] = cumul[p] + slack[p] + transit(p, p + 1)`
/// with `cumul[0] = 0`. Slack at a stop is bounded by `waiting_stop`; the
/// cumulative time anywhere on the route is bounded by `max_travel_time`.
/// A violated cap makes the route infeasible, it is never priced in.
///
/// # Examples
///
/// ```
/// use fleet_routing::evaluation::TimeDimension;
///
/// let dim = TimeDimension::new(60, 100);
/// assert_eq!(dim.extend(40, 30, 0), Some(70));
/// assert_eq!(dim.extend(40, 30, 45), None); // slack over the allowance
/// assert_eq!(dim.extend(80, 30, 0), None); // over the span cap
/// assert_eq!(dim.objective(&[50, 20]), 70 + 100 * 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDimension {
    waiting_stop: u64,
    max_travel_time: u64,
    span_coefficient: u64,
}

impl TimeDimension {
    /// Creates a dimension with the default span coefficient.
    pub fn new(waiting_stop: u64, max_travel_time: u64) -> Self {
        Self {
            waiting_stop,
            max_travel_time,
            span_coefficient: DEFAULT_SPAN_COEFFICIENT,
        }
    }

    /// Creates a dimension from a vehicle's budgets.
    pub fn for_vehicle(vehicle: &Vehicle) -> Self {
        Self::new(vehicle.waiting_stop(), vehicle.max_travel_time())
    }

    /// Sets the weight of the global span term.
    pub fn with_span_coefficient(mut self, coefficient: u64) -> Self {
        self.span_coefficient = coefficient;
        self
    }

    /// Maximum slack at a single stop.
    pub fn waiting_stop(&self) -> u64 {
        self.waiting_stop
    }

    /// Span cap of every route.
    pub fn max_travel_time(&self) -> u64 {
        self.max_travel_time
    }

    /// Weight of the global span term.
    pub fn span_coefficient(&self) -> u64 {
        self.span_coefficient
    }

    /// Transit contribution of the arc `from -> to`.
    pub fn transit<P: RoutingProblem + ?Sized>(&self, problem: &P, from: usize, to: usize) -> u64 {
        problem.transit_time(from, to)
    }

    /// Cumulative time after waiting `slack` and travelling `transit` from a
    /// position at `cumul`.
    ///
    /// Returns `None` if the slack exceeds the allowance or the result
    /// exceeds the span cap.
    pub fn extend(&self, cumul: u64, transit: u64, slack: u64) -> Option<u64> {
        if slack > self.waiting_stop {
            return None;
        }
        cumul
            .checked_add(slack)
            .and_then(|c| c.checked_add(transit))
            .filter(|&c| self.admits(c))
    }

    /// Returns `true` if `cumul` respects the span cap.
    pub fn admits(&self, cumul: u64) -> bool {
        cumul <= self.max_travel_time
    }

    /// Span of the closed route `depot -> stops... -> depot` with zero slack.
    ///
    /// An empty stop list has span 0. Returns `None` if the cap is exceeded
    /// at any position.
    pub fn route_time<P: RoutingProblem + ?Sized>(
        &self,
        problem: &P,
        stops: &[usize],
    ) -> Option<u64> {
        self.build_route(problem, 0, stops).map(|r| r.route_time())
    }

    /// Builds the closed route for `stops` with zero slack, recording the
    /// cumulative time at every position.
    ///
    /// Returns `None` if the cap is exceeded at any position.
    pub fn build_route<P: RoutingProblem + ?Sized>(
        &self,
        problem: &P,
        vehicle_id: usize,
        stops: &[usize],
    ) -> Option<Route> {
        let depot = problem.depot();
        let mut route = Route::new(vehicle_id);
        for &stop in stops {
            let transit = self.transit(problem, route.last_node(), stop);
            let cumul = self.extend(route.cumulative_time(), transit, 0)?;
            route.push_visit(stop, 0, cumul);
        }
        let closing = if stops.is_empty() {
            0
        } else {
            let transit = self.transit(problem, route.last_node(), depot);
            self.extend(route.cumulative_time(), transit, 0)?
        };
        route.close(closing);
        Some(route)
    }

    /// `span_coefficient × (max − min)` over the given route times.
    pub fn span_cost(&self, route_times: &[u64]) -> u64 {
        let max = route_times.iter().copied().max().unwrap_or(0);
        let min = route_times.iter().copied().min().unwrap_or(0);
        self.span_coefficient.saturating_mul(max - min)
    }

    /// Sum of route times plus the span cost.
    pub fn objective(&self, route_times: &[u64]) -> u64 {
        route_times
            .iter()
            .fold(0u64, |acc, &t| acc.saturating_add(t))
            .saturating_add(self.span_cost(route_times))
    }
}

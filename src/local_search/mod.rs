//! Local search operators for improving a constructed solution.
//!
//! - [`two_opt_improve`] — Intra-route 2-opt segment reversal
//! - [`relocate_improve`] — Inter-route stop relocation scored by the full objective
//!
//! [`improve`] chains them: relocation first, then 2-opt on every route.

mod relocate;
mod two_opt;

pub use relocate::relocate_improve;
pub use two_opt::two_opt_improve;

use crate::evaluation::TimeDimension;
use crate::models::{Route, RoutingProblem};

/// Improves closed routes in place of the constructed ones.
///
/// The objective never increases: a shorter route from 2-opt is only kept
/// if it does not widen the span term by more than it saves. Every returned
/// route is closed and within the span cap. If a route cannot be re-timed,
/// the input routes are returned unchanged.
pub fn improve<P: RoutingProblem + ?Sized>(
    routes: Vec<Route>,
    problem: &P,
    dimension: &TimeDimension,
) -> Vec<Route> {
    let stops: Vec<Vec<usize>> = routes.iter().map(Route::stops).collect();
    let Some(mut relocated) = relocate_improve(&stops, problem, dimension) else {
        return routes;
    };
    let Some(mut times) = relocated
        .iter()
        .map(|r| dimension.route_time(problem, r))
        .collect::<Option<Vec<u64>>>()
    else {
        return routes;
    };

    for v in 0..relocated.len() {
        let Some((order, time)) = two_opt_improve(&relocated[v], problem, dimension) else {
            continue;
        };
        let before = dimension.objective(&times);
        let previous = std::mem::replace(&mut times[v], time);
        if dimension.objective(&times) <= before {
            relocated[v] = order;
        } else {
            times[v] = previous;
        }
    }

    let rebuilt: Option<Vec<Route>> = routes
        .iter()
        .zip(&relocated)
        .map(|(route, order)| dimension.build_route(problem, route.vehicle_id(), order))
        .collect();
    rebuilt.unwrap_or(routes)
}

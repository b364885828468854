//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j` in a route, reverse the segment
//! `[i..=j]` and re-time the whole route. The matrix may be asymmetric, so
//! the reversed segment's interior arcs change cost too and a local edge
//! delta is not enough. Accept the reversal if the route gets strictly
//! shorter and stays within the span cap. Repeat until no further
//! improvement is found (first-improvement strategy).
//!
//! # Complexity
//!
//! O(n³) per pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::evaluation::TimeDimension;
use crate::models::RoutingProblem;

/// Applies 2-opt improvement to a single route given as its stop sequence.
///
/// Returns the improved stop sequence and its route time, or `None` if the
/// input route already violates the span cap.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::TimeBudget;
/// use fleet_routing::distance::TimeMatrix;
/// use fleet_routing::evaluation::TimeDimension;
/// use fleet_routing::local_search::two_opt_improve;
/// use fleet_routing::models::RoutingModel;
///
/// let tm = TimeMatrix::from_data(4, vec![
///     0, 1, 2, 3,
///     1, 0, 1, 2,
///     2, 1, 0, 1,
///     3, 2, 1, 0,
/// ]).expect("4x4");
/// let model = RoutingModel::new(tm, 1, TimeBudget::new(60, 100));
/// let dim = TimeDimension::new(60, 100);
///
/// // 0 -> 3 -> 1 -> 2 -> 0 costs 3 + 2 + 1 + 2 = 8.
/// let (_, time) = two_opt_improve(&[3, 1, 2], &model, &dim).expect("feasible");
/// assert_eq!(time, 6);
/// ```
pub fn two_opt_improve<P: RoutingProblem + ?Sized>(
    stops: &[usize],
    problem: &P,
    dimension: &TimeDimension,
) -> Option<(Vec<usize>, u64)> {
    let mut current = stops.to_vec();
    let mut current_time = dimension.route_time(problem, &current)?;
    if current.len() < 2 {
        return Some((current, current_time));
    }

    let n = current.len();
    let mut improved = true;
    while improved {
        improved = false;
        for i in 0..n - 1 {
            for j in i + 1..n {
                let mut candidate = current.clone();
                candidate[i..=j].reverse();
                if let Some(time) = dimension.route_time(problem, &candidate) {
                    if time < current_time {
                        log::trace!("2-opt reverse [{i}..={j}]: {current_time}s -> {time}s");
                        current = candidate;
                        current_time = time;
                        improved = true;
                    }
                }
            }
        }
    }

    Some((current, current_time))
}

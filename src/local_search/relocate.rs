//! Inter-route stop relocation with span balancing.
//!
//! # Algorithm
//!
//! Tries moving each stop from its current route to every insertion
//! position in every other route. A move is scored by the full objective
//! (total time plus the weighted span term), so moving work from the longest
//! route to an idle vehicle is rewarded even when it adds travel. Both
//! touched routes must stay within the span cap. The best strictly improving
//! move is applied, and the scan repeats until none is left.
//!
//! # Complexity
//!
//! O(n² × R) candidate moves per pass, each re-timed in O(n).

use crate::evaluation::TimeDimension;
use crate::models::RoutingProblem;

/// A relocate move: move a stop from one route to another.
#[derive(Debug, Clone)]
struct RelocateMove {
    from_route: usize,
    from_pos: usize,
    to_route: usize,
    to_pos: usize,
    from_time: u64,
    to_time: u64,
    objective: u64,
}

/// Applies inter-route relocate improvement.
///
/// `routes[v]` is the stop sequence of vehicle `v`. Returns the improved
/// sequences, or `None` if some input route already violates the cap.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::TimeBudget;
/// use fleet_routing::distance::TimeMatrix;
/// use fleet_routing::evaluation::TimeDimension;
/// use fleet_routing::local_search::relocate_improve;
/// use fleet_routing::models::RoutingModel;
///
/// let tm = TimeMatrix::from_data(3, vec![
///     0, 5, 5,
///     5, 0, 5,
///     5, 5, 0,
/// ]).expect("3x3");
/// let model = RoutingModel::new(tm, 2, TimeBudget::new(60, 100));
/// let dim = TimeDimension::new(60, 100);
///
/// // One vehicle does everything, the other idles.
/// let routes = relocate_improve(&[vec![1, 2], vec![]], &model, &dim).expect("feasible");
/// assert_eq!(routes.iter().filter(|r| !r.is_empty()).count(), 2);
/// ```
pub fn relocate_improve<P: RoutingProblem + ?Sized>(
    routes: &[Vec<usize>],
    problem: &P,
    dimension: &TimeDimension,
) -> Option<Vec<Vec<usize>>> {
    let mut routes = routes.to_vec();
    let mut times = routes
        .iter()
        .map(|r| dimension.route_time(problem, r))
        .collect::<Option<Vec<u64>>>()?;
    if routes.len() < 2 {
        return Some(routes);
    }

    while let Some(mv) = find_best_relocate(&routes, &times, problem, dimension) {
        let stop = routes[mv.from_route].remove(mv.from_pos);
        routes[mv.to_route].insert(mv.to_pos, stop);
        times[mv.from_route] = mv.from_time;
        times[mv.to_route] = mv.to_time;
        log::trace!(
            "relocate stop {stop}: vehicle {} -> vehicle {} at {}, objective {}",
            mv.from_route,
            mv.to_route,
            mv.to_pos,
            mv.objective
        );
    }

    Some(routes)
}

/// Finds the best strictly improving relocate move across all route pairs.
fn find_best_relocate<P: RoutingProblem + ?Sized>(
    routes: &[Vec<usize>],
    times: &[u64],
    problem: &P,
    dimension: &TimeDimension,
) -> Option<RelocateMove> {
    let current = dimension.objective(times);
    let mut best: Option<RelocateMove> = None;
    let mut trial_times = times.to_vec();

    for (from_r, from_route) in routes.iter().enumerate() {
        for from_pos in 0..from_route.len() {
            let mut shortened = from_route.clone();
            let stop = shortened.remove(from_pos);
            let Some(from_time) = dimension.route_time(problem, &shortened) else {
                continue;
            };

            for (to_r, to_route) in routes.iter().enumerate() {
                if to_r == from_r {
                    continue;
                }
                for to_pos in 0..=to_route.len() {
                    let mut extended = to_route.clone();
                    extended.insert(to_pos, stop);
                    let Some(to_time) = dimension.route_time(problem, &extended) else {
                        continue;
                    };

                    trial_times[from_r] = from_time;
                    trial_times[to_r] = to_time;
                    let objective = dimension.objective(&trial_times);
                    trial_times[from_r] = times[from_r];
                    trial_times[to_r] = times[to_r];

                    let is_better = objective < current
                        && best.as_ref().map_or(true, |b| objective < b.objective);
                    if is_better {
                        best = Some(RelocateMove {
                            from_route: from_r,
                            from_pos,
                            to_route: to_r,
                            to_pos,
                            from_time,
                            to_time,
                            objective,
                        });
                    }
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeBudget;
    use crate::distance::TimeMatrix;
    use crate::models::RoutingModel;

    /// Depot and three stops on a line, one unit apart.
    fn line(vehicles: usize) -> RoutingModel {
        #[rustfmt::skip]
        let data = vec![
            0, 1, 2, 3,
            1, 0, 1, 2,
            2, 1, 0, 1,
            3, 2, 1, 0,
        ];
        let tm = TimeMatrix::from_data(4, data).expect("4x4");
        RoutingModel::new(tm, vehicles, TimeBudget::new(60, 100))
    }

    fn objective(routes: &[Vec<usize>], m: &RoutingModel, dim: &TimeDimension) -> u64 {
        let times: Vec<u64> = routes
            .iter()
            .map(|r| dim.route_time(m, r).expect("feasible"))
            .collect();
        dim.objective(&times)
    }

    #[test]
    fn test_relocate_single_route() {
        let m = line(1);
        let dim = TimeDimension::new(60, 100);
        let routes = relocate_improve(&[vec![1, 2, 3]], &m, &dim).expect("feasible");
        assert_eq!(routes, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_relocate_balances_idle_vehicle() {
        let m = line(2);
        let dim = TimeDimension::new(60, 100);
        let initial = vec![vec![1, 2, 3], vec![]];
        let improved = relocate_improve(&initial, &m, &dim).expect("feasible");
        // 6 + 100 * 6 before; one stop moved out gives 4 + 6 + 100 * 2.
        assert_eq!(objective(&initial, &m, &dim), 606);
        assert_eq!(objective(&improved, &m, &dim), 210);
        assert!(improved.iter().all(|r| !r.is_empty()));
        let mut served: Vec<usize> = improved.concat();
        served.sort_unstable();
        assert_eq!(served, vec![1, 2, 3]);
    }

    #[test]
    fn test_relocate_without_span_term_keeps_single_route() {
        let m = line(2);
        let dim = TimeDimension::new(60, 100).with_span_coefficient(0);
        let improved = relocate_improve(&[vec![1, 2, 3], vec![]], &m, &dim).expect("feasible");
        assert_eq!(improved, vec![vec![1, 2, 3], vec![]]);
    }

    #[test]
    fn test_relocate_respects_cap() {
        let m = line(2);
        // The initial route sits exactly on the 6s cap.
        let dim = TimeDimension::new(60, 6);
        let improved = relocate_improve(&[vec![1, 2, 3], vec![]], &m, &dim).expect("feasible");
        for r in &improved {
            assert!(dim.route_time(&m, r).is_some());
        }
    }

    #[test]
    fn test_relocate_infeasible_input() {
        let m = line(2);
        let dim = TimeDimension::new(60, 5);
        assert!(relocate_improve(&[vec![1, 2, 3], vec![]], &m, &dim).is_none());
    }
}

//! Route and visit types.
//!
//! A [`Route`] is the per-vehicle arena the time dimension operates on: one
//! [`Visit`] per route position, holding the node and the cumulative time
//! there.

use super::problem::DEPOT;

/// A single position in a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// Node visited at this position.
    pub node: usize,
    /// Cumulative time on arrival, seconds since the depot departure.
    pub cumul: u64,
    /// Waiting taken at this node before departing.
    pub slack: u64,
}

/// An ordered sequence of visits assigned to a single vehicle.
///
/// A route always begins with the depot at cumulative time 0. It is closed
/// once the depot has been appended a second time.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Route;
///
/// let mut route = Route::new(0);
/// route.push_visit(3, 0, 40);
/// route.close(75);
/// assert_eq!(route.nodes(), vec![0, 3, 0]);
/// assert_eq!(route.stops(), vec![3]);
/// assert_eq!(route.route_time(), 75);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    vehicle_id: usize,
    visits: Vec<Visit>,
    closed: bool,
}

impl Route {
    /// Creates an open route for the given vehicle, parked at the depot.
    pub fn new(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            visits: vec![Visit {
                node: DEPOT,
                cumul: 0,
                slack: 0,
            }],
            closed: false,
        }
    }

    /// Appends `node`, recording `slack` as the waiting taken at the current
    /// last node and `cumul` as the arrival time at `node`.
    pub fn push_visit(&mut self, node: usize, slack: u64, cumul: u64) {
        if let Some(last) = self.visits.last_mut() {
            last.slack = slack;
        }
        self.visits.push(Visit {
            node,
            cumul,
            slack: 0,
        });
    }

    /// Appends the depot with the given final cumulative time.
    pub fn close(&mut self, cumul: u64) {
        self.push_visit(DEPOT, 0, cumul);
        self.closed = true;
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Returns the ordered visits, depot positions included.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Returns the node sequence, depot positions included.
    pub fn nodes(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.node).collect()
    }

    /// Returns the interior stops in visit order.
    pub fn stops(&self) -> Vec<usize> {
        let end = if self.closed {
            self.visits.len() - 1
        } else {
            self.visits.len()
        };
        self.visits[1..end].iter().map(|v| v.node).collect()
    }

    /// Number of stops (excluding depot positions).
    pub fn len(&self) -> usize {
        self.visits.len() - if self.closed { 2 } else { 1 }
    }

    /// Returns `true` if no stop has been assigned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` once the route has returned to the depot.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Node at the end of the route so far.
    pub fn last_node(&self) -> usize {
        self.visits.last().map_or(DEPOT, |v| v.node)
    }

    /// Cumulative time at the end of the route so far.
    pub fn cumulative_time(&self) -> u64 {
        self.visits.last().map_or(0, |v| v.cumul)
    }

    /// Total span of the route; equal to [`Route::cumulative_time`].
    pub fn route_time(&self) -> u64 {
        self.cumulative_time()
    }
}

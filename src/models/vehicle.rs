//! Vehicle type with time budgets.

use crate::config::TimeBudget;

/// A vehicle of the homogeneous delivery fleet.
///
/// Every vehicle starts and ends at the depot (node 0).
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Vehicle;
///
/// let v = Vehicle::new(0, 9000).with_waiting_stop(900);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.max_travel_time(), 9000);
/// assert_eq!(v.waiting_stop(), 900);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: usize,
    max_travel_time: u64,
    waiting_stop: u64,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and span cap (seconds).
    ///
    /// The per-stop waiting allowance defaults to zero.
    pub fn new(id: usize, max_travel_time: u64) -> Self {
        Self {
            id,
            max_travel_time,
            waiting_stop: 0,
        }
    }

    /// Creates a vehicle from a [`TimeBudget`].
    pub fn with_budget(id: usize, budget: TimeBudget) -> Self {
        Self::new(id, budget.max_travel_time_seconds).with_waiting_stop(budget.waiting_stop_seconds)
    }

    /// Sets the per-stop waiting allowance (seconds).
    pub fn with_waiting_stop(mut self, seconds: u64) -> Self {
        self.waiting_stop = seconds;
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum route span in seconds.
    pub fn max_travel_time(&self) -> u64 {
        self.max_travel_time
    }

    /// Maximum waiting slack at a single stop in seconds.
    pub fn waiting_stop(&self) -> u64 {
        self.waiting_stop
    }
}

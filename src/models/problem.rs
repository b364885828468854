//! Routing problem trait and the concrete single-depot model.

use std::ops::Range;

use super::Vehicle;
use crate::config::TimeBudget;
use crate::distance::TimeMatrix;

/// Index of the depot node.
pub const DEPOT: usize = 0;

/// Defines a routing problem instance.
///
/// This trait provides the interface that the search and the time dimension
/// use to read problem data. Node 0 is always the depot and every vehicle
/// starts and ends there.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::RoutingProblem;
///
/// struct Uniform(usize);
///
/// impl RoutingProblem for Uniform {
///     fn node_count(&self) -> usize { self.0 }
///     fn vehicle_count(&self) -> usize { 1 }
///     fn transit_time(&self, from: usize, to: usize) -> u64 {
///         if from == to { 0 } else { 60 }
///     }
/// }
///
/// let p = Uniform(3);
/// assert_eq!(p.depot(), 0);
/// assert_eq!(p.stops().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(p.transit_time(1, 2), 60);
/// ```
pub trait RoutingProblem {
    /// Number of nodes, depot included.
    fn node_count(&self) -> usize;

    /// Number of vehicles.
    fn vehicle_count(&self) -> usize;

    /// Travel time in seconds from node `from` to node `to`.
    fn transit_time(&self, from: usize, to: usize) -> u64;

    /// Start and end node of every vehicle.
    fn depot(&self) -> usize {
        DEPOT
    }

    /// Stop nodes, `1..node_count()`.
    fn stops(&self) -> Range<usize> {
        1..self.node_count()
    }
}

/// A validated single-depot instance: one time matrix shared by a
/// homogeneous fleet.
///
/// Owns its matrix for the duration of one solve.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::TimeBudget;
/// use fleet_routing::distance::TimeMatrix;
/// use fleet_routing::models::{RoutingModel, RoutingProblem};
///
/// let tm = TimeMatrix::from_data(2, vec![0, 10, 10, 0]).expect("2x2");
/// let model = RoutingModel::new(tm, 3, TimeBudget::default());
/// assert_eq!(model.node_count(), 2);
/// assert_eq!(model.vehicle_count(), 3);
/// assert_eq!(model.transit_time(1, 0), 10);
/// ```
#[derive(Debug, Clone)]
pub struct RoutingModel {
    matrix: TimeMatrix,
    vehicles: Vec<Vehicle>,
}

impl RoutingModel {
    /// Creates a model with `vehicle_count` identical vehicles.
    pub fn new(matrix: TimeMatrix, vehicle_count: usize, budget: TimeBudget) -> Self {
        let vehicles = (0..vehicle_count)
            .map(|id| Vehicle::with_budget(id, budget))
            .collect();
        Self { matrix, vehicles }
    }

    /// The fleet, indexed by vehicle id.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &TimeMatrix {
        &self.matrix
    }
}

impl RoutingProblem for RoutingModel {
    fn node_count(&self) -> usize {
        self.matrix.size()
    }

    fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    fn transit_time(&self, from: usize, to: usize) -> u64 {
        self.matrix.get(from, to)
    }
}

//! Domain model types for fleet routing.
//!
//! Provides the core abstractions: vehicles with time budgets, routes as
//! per-position arenas of visits, the decoded solution, and a problem trait
//! that ties the time matrix and the fleet together.

mod problem;
mod route;
mod solution;
mod vehicle;

pub use problem::{RoutingModel, RoutingProblem, DEPOT};
pub use route::{Route, Visit};
pub use solution::{format_duration, Solution};
pub use vehicle::Vehicle;

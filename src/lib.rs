//! # fleet-routing
//!
//! Delivery fleet routing over a single depot: given a travel-time matrix,
//! a fleet size and per-vehicle time budgets, assign every stop to exactly
//! one vehicle and order each route, minimizing total time while keeping the
//! longest route close to the shortest.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Vehicle, Route, Solution, RoutingProblem trait)
//! - [`distance`] — Travel-time matrix and chunked matrix acquisition
//! - [`validation`] — Input checks run before any search
//! - [`evaluation`] — Time dimension and solution decoding
//! - [`constructive`] — Cheapest-arc construction
//! - [`local_search`] — Optional 2-opt and relocate improvement
//! - [`solver`] — The `solve` entry point
//!
//! ## Example
//!
//! ```
//! use fleet_routing::solve;
//!
//! let matrix = vec![
//!     vec![0, 10, 12, 11, 13],
//!     vec![10, 0, 3, 21, 23],
//!     vec![12, 3, 0, 23, 25],
//!     vec![11, 21, 23, 0, 3],
//!     vec![13, 23, 25, 3, 0],
//! ];
//! let sol = solve(matrix, 2, 15 * 60, 150 * 60)?;
//! assert_eq!(sol.routes[&0], vec![0, 1, 2, 0]);
//! assert_eq!(sol.routes[&1], vec![0, 3, 4, 0]);
//! assert_eq!(sol.max_route_time_seconds, 27);
//! # Ok::<(), fleet_routing::RoutingError>(())
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;
pub mod validation;

pub use error::{Infeasibility, RoutingError};
pub use models::Solution;
pub use solver::{solve, SolveState, Solver};

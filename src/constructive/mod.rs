//! Constructive heuristics for building the first solution.
//!
//! - [`cheapest_arc`] — Fleet-wide cheapest feasible arc, O(N² × V)

mod cheapest_arc;

pub use cheapest_arc::cheapest_arc;

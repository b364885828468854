//! Travel-time matrices.
//!
//! Provides the dense time matrix consumed by the solver and the chunked
//! acquisition helpers used to assemble one from a directions service.

mod acquisition;
mod matrix;

pub use acquisition::{
    acquire_time_matrix, plan_batches, AcquisitionError, Coordinate, MatrixSource,
    MAX_ELEMENTS_PER_REQUEST,
};
pub use matrix::TimeMatrix;

//! Time dimension and solution decoding.
//!
//! - [`TimeDimension`] — cumulative time, slack bound, span cap and objective
//! - [`decode`] — renders committed routes into a [`Solution`](crate::models::Solution)

mod decoder;
mod dimension;

pub use decoder::decode;
pub use dimension::TimeDimension;

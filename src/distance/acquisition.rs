//! Chunked acquisition of a travel-time matrix from a directions service.
//!
//! Directions services cap the number of origin×destination cells per
//! request. [`plan_batches`] splits the origin rows into blocks that respect
//! the cap and [`acquire_time_matrix`] stitches the returned row-blocks back
//! together in their original order. The HTTP side lives behind
//! [`MatrixSource`]; the crate never performs network I/O itself.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cell cap per request imposed by the directions service.
pub const MAX_ELEMENTS_PER_REQUEST: usize = 100;

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Errors raised while acquiring a matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquisitionError {
    /// No coordinates were provided.
    #[error("at least one coordinate is required")]
    EmptyInput,
    /// A single origin row would already exceed the per-request cap.
    #[error("{locations} locations exceed the {max_elements}-cell request cap")]
    TooManyLocations {
        /// Number of locations requested.
        locations: usize,
        /// Per-request cell cap.
        max_elements: usize,
    },
    /// A returned block does not have one full row per origin.
    #[error("block starting at row {first_row}: expected {expected_rows}x{expected_cols}, got {rows} row(s)")]
    BlockShape {
        /// First origin row of the block.
        first_row: usize,
        /// Rows requested.
        expected_rows: usize,
        /// Cells expected per row.
        expected_cols: usize,
        /// Rows received.
        rows: usize,
    },
    /// The upstream service failed.
    #[error("matrix source failed: {0}")]
    Source(String),
}

/// Provider of raw travel-time rows, typically an HTTP directions client.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::{AcquisitionError, Coordinate, MatrixSource};
///
/// struct Unit;
///
/// impl MatrixSource for Unit {
///     fn fetch_rows(
///         &self,
///         origins: &[Coordinate],
///         destinations: &[Coordinate],
///     ) -> Result<Vec<Vec<i64>>, AcquisitionError> {
///         Ok(origins
///             .iter()
///             .map(|o| destinations.iter().map(|d| i64::from(o != d)).collect())
///             .collect())
///     }
/// }
///
/// let coords = [Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)];
/// let rows = Unit.fetch_rows(&coords, &coords)?;
/// assert_eq!(rows, vec![vec![0, 1], vec![1, 0]]);
/// # Ok::<(), AcquisitionError>(())
/// ```
pub trait MatrixSource {
    /// Returns one row of travel times (seconds) per origin, each row
    /// holding one cell per destination, in the order given.
    fn fetch_rows(
        &self,
        origins: &[Coordinate],
        destinations: &[Coordinate],
    ) -> Result<Vec<Vec<i64>>, AcquisitionError>;
}

/// Splits `locations` origin rows into consecutive blocks of at most
/// `floor(max_elements / locations)` rows.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::plan_batches;
///
/// // 11 locations: 9 rows per request, so two requests.
/// let batches = plan_batches(11, 100).expect("fits");
/// assert_eq!(batches, vec![0..9, 9..11]);
/// ```
pub fn plan_batches(
    locations: usize,
    max_elements: usize,
) -> Result<Vec<Range<usize>>, AcquisitionError> {
    if locations == 0 {
        return Err(AcquisitionError::EmptyInput);
    }
    let rows_per_batch = max_elements / locations;
    if rows_per_batch == 0 {
        return Err(AcquisitionError::TooManyLocations {
            locations,
            max_elements,
        });
    }
    Ok((0..locations)
        .step_by(rows_per_batch)
        .map(|start| start..(start + rows_per_batch).min(locations))
        .collect())
}

/// Fetches the full matrix for `coordinates` (depot first) in capped
/// batches and concatenates the row-blocks in origin order.
///
/// The result is raw and unvalidated; hand it to [`crate::solver::solve`].
pub fn acquire_time_matrix<S: MatrixSource + ?Sized>(
    source: &S,
    coordinates: &[Coordinate],
) -> Result<Vec<Vec<i64>>, AcquisitionError> {
    let n = coordinates.len();
    let batches = plan_batches(n, MAX_ELEMENTS_PER_REQUEST)?;
    log::debug!("acquiring {n}x{n} matrix in {} request(s)", batches.len());

    let mut rows = Vec::with_capacity(n);
    for batch in batches {
        let expected_rows = batch.len();
        let first_row = batch.start;
        let block = source.fetch_rows(&coordinates[batch], coordinates)?;
        if block.len() != expected_rows || block.iter().any(|row| row.len() != n) {
            return Err(AcquisitionError::BlockShape {
                first_row,
                expected_rows,
                expected_cols: n,
                rows: block.len(),
            });
        }
        rows.extend(block);
    }
    Ok(rows)
}

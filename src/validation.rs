//! Input validation performed before any search work.

use crate::distance::TimeMatrix;
use crate::error::RoutingError;

/// Checks the shape and sign of a raw matrix and converts it to a
/// [`TimeMatrix`].
///
/// Every row length is checked before any cell value, so a ragged matrix is
/// always reported as [`RoutingError::InvalidMatrixShape`].
///
/// # Examples
///
/// ```
/// use fleet_routing::validation::validate_matrix;
/// use fleet_routing::RoutingError;
///
/// let tm = validate_matrix(&[vec![0, 10], vec![10, 0]]).expect("valid");
/// assert_eq!(tm.get(0, 1), 10);
///
/// let err = validate_matrix(&[vec![0, 10], vec![10]]).unwrap_err();
/// assert!(matches!(err, RoutingError::InvalidMatrixShape { row: 1, .. }));
/// ```
pub fn validate_matrix(rows: &[Vec<i64>]) -> Result<TimeMatrix, RoutingError> {
    let n = rows.len();
    if n <= 1 {
        return Err(RoutingError::InvalidMatrixShape {
            rows: n,
            row: 0,
            len: rows.first().map_or(0, Vec::len),
        });
    }
    if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(RoutingError::InvalidMatrixShape {
            rows: n,
            row,
            len: cells.len(),
        });
    }

    let mut matrix = TimeMatrix::new(n);
    for (from, cells) in rows.iter().enumerate() {
        for (to, &value) in cells.iter().enumerate() {
            let seconds = u64::try_from(value)
                .map_err(|_| RoutingError::NegativeTravelTime { from, to, value })?;
            matrix.set(from, to, seconds);
        }
    }
    Ok(matrix)
}

/// Checks that the fleet and both budgets are positive.
pub fn validate_parameters(
    vehicle_count: usize,
    waiting_stop_seconds: u64,
    max_travel_time_seconds: u64,
) -> Result<(), RoutingError> {
    if vehicle_count == 0 {
        return Err(RoutingError::InvalidParameter {
            name: "vehicle_count",
        });
    }
    if waiting_stop_seconds == 0 {
        return Err(RoutingError::InvalidParameter {
            name: "waiting_stop_seconds",
        });
    }
    if max_travel_time_seconds == 0 {
        return Err(RoutingError::InvalidParameter {
            name: "max_travel_time_seconds",
        });
    }
    Ok(())
}

/// Runs every input check and returns the validated matrix.
pub fn validate(
    rows: &[Vec<i64>],
    vehicle_count: usize,
    waiting_stop_seconds: u64,
    max_travel_time_seconds: u64,
) -> Result<TimeMatrix, RoutingError> {
    let matrix = validate_matrix(rows)?;
    validate_parameters(vehicle_count, waiting_stop_seconds, max_travel_time_seconds)?;
    log::debug!(
        "validated {n}x{n} matrix (symmetric: {symmetric}), {vehicle_count} vehicle(s), \
         waiting_stop={waiting_stop_seconds}s, max_travel_time={max_travel_time_seconds}s",
        n = matrix.size(),
        symmetric = matrix.is_symmetric()
    );
    Ok(matrix)
}

//! Gradient field generators: linear pairs, black-to-white strips, and
//! radial falloffs.
//!
//! Every generator returns freshly allocated [`Field`]s whose values lie in
//! [0,1]. Linear fields are in range by construction (they are the coordinate
//! grids themselves); radial fields are normalized by their maximum distance.

use glam::DVec2;

use crate::direction::Direction;
use crate::error::GradientError;
use crate::field::Field;
use crate::grid::CoordinateGrid;

/// Returns the two orthogonal linear gradients for a `width` x `height` grid.
///
/// The first field varies 0 to 1 across columns (the X grid), the second
/// 0 to 1 down rows (the Y grid).
pub fn linear(width: usize, height: usize) -> Result<(Field, Field), GradientError> {
    Ok(CoordinateGrid::new(width, height)?.into_fields())
}

/// Returns the horizontal black-to-white gradient, i.e. the X half of
/// [`linear`].
pub fn black_to_white(width: usize, height: usize) -> Result<Field, GradientError> {
    let (x, _) = linear(width, height)?;
    Ok(x)
}

/// Returns the linear gradient pair with a polarity applied to each axis.
pub fn directional(
    width: usize,
    height: usize,
    direction_x: Direction,
    direction_y: Direction,
) -> Result<(Field, Field), GradientError> {
    let (x, y) = linear(width, height)?;
    Ok((direction_x.apply(&x), direction_y.apply(&y)))
}

/// Builds a radial gradient: Euclidean distance from the center in normalized
/// grid coordinates, divided by the maximum distance.
///
/// The farthest grid point from the center maps to exactly 1.0. The center is
/// not constrained to [0,1]; an off-grid center shifts the falloff but the
/// output stays in range. The division is skipped only when every distance is
/// zero (a 1x1 grid whose single point coincides with the center), which
/// leaves the field all-zero.
pub fn radial(
    width: usize,
    height: usize,
    center_x: f64,
    center_y: f64,
) -> Result<Field, GradientError> {
    if !center_x.is_finite() || !center_y.is_finite() {
        return Err(GradientError::InvalidCenter {
            x: center_x,
            y: center_y,
        });
    }
    let grid = CoordinateGrid::new(width, height)?;
    let center = DVec2::new(center_x, center_y);
    let mut distances: Vec<f64> = grid
        .x()
        .data()
        .iter()
        .zip(grid.y().data())
        .map(|(&x, &y)| DVec2::new(x, y).distance(center))
        .collect();
    let max = distances.iter().fold(0.0_f64, |acc, &d| acc.max(d));
    if max > 0.0 {
        for d in &mut distances {
            *d /= max;
        }
    }
    Field::from_data(width, height, distances)
}

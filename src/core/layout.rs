//! Visual size mapping for the category visualizations.
//!
//! The bubble scale is an intentional distortion, not a proportional area
//! computation: shares are compressed into `[60, 150]` so a 2% category is
//! still tappable and a 90% category does not swallow the screen.

use crate::core::aggregate::CategoryShare;

/// Lower bound of the bubble diameter.
const MIN_BUBBLE_SIZE: f64 = 60.0;
/// Upper bound of the bubble diameter.
const MAX_BUBBLE_SIZE: f64 = 150.0;

/// One cell of the grid view. The highest-ranked category renders as an
/// enlarged "hero" cell; every other cell is uniform.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell {
    /// Category the cell displays
    pub category_id: String,
    /// Summed spending for the category
    pub amount: f64,
    /// Share of the period total
    pub percentage: f64,
    /// Whether this is the enlarged top-ranked cell
    pub hero: bool,
}

/// Maps a percentage share onto a bounded bubble diameter:
/// `clamp(percentage / 100 * 200 + 50, 60, 150)`.
///
/// Monotone non-decreasing in its input, with exact bounds
/// `bubble_size(0) == 60` and `bubble_size(100) == 150`.
#[must_use]
pub fn bubble_size(percentage: f64) -> f64 {
    (percentage / 100.0 * 200.0 + 50.0).clamp(MIN_BUBBLE_SIZE, MAX_BUBBLE_SIZE)
}

/// Lays out ranked category shares as grid cells, designating the first
/// (highest-ranked) entry as the hero cell.
#[must_use]
pub fn grid_cells(shares: &[CategoryShare]) -> Vec<GridCell> {
    shares
        .iter()
        .enumerate()
        .map(|(rank, share)| GridCell {
            category_id: share.category_id.clone(),
            amount: share.amount,
            percentage: share.percentage,
            hero: rank == 0,
        })
        .collect()
}

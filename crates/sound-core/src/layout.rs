//! Masonry packing: items of varying height are dropped into the currently
//! shortest column, keeping source order.

use crate::constants::{MASONRY_BREAK_AT, MASONRY_COLUMNS, MASONRY_MARGIN};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("masonry needs at least one column")]
    NoColumns,
    #[error("breakpoint {width}px maps to zero columns")]
    EmptyBreakpoint { width: u32 },
    #[error("margin must be finite and non-negative, got {0}")]
    BadMargin(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MasonryOptions {
    pub margin: f64,
    pub columns: usize,
    /// (max viewport width in px, columns) pairs
    pub break_at: SmallVec<[(u32, usize); 2]>,
}

impl Default for MasonryOptions {
    fn default() -> Self {
        Self {
            margin: MASONRY_MARGIN,
            columns: MASONRY_COLUMNS,
            break_at: MASONRY_BREAK_AT.iter().copied().collect(),
        }
    }
}

impl MasonryOptions {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::NoColumns);
        }
        if let Some(&(width, _)) = self.break_at.iter().find(|(_, c)| *c == 0) {
            return Err(LayoutError::EmptyBreakpoint { width });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(LayoutError::BadMargin(self.margin));
        }
        Ok(())
    }

    /// Column count for a viewport width: the smallest breakpoint that is
    /// `>= viewport_width`, otherwise `columns`.
    pub fn columns_for_width(&self, viewport_width: f64) -> usize {
        self.break_at
            .iter()
            .filter(|(w, _)| viewport_width <= *w as f64)
            .min_by_key(|(w, _)| *w)
            .map(|(_, c)| *c)
            .unwrap_or(self.columns)
            .max(1)
    }
}

/// Position of one item relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub column: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MasonryLayout {
    pub columns: usize,
    pub column_width: f64,
    pub placements: Vec<Placement>,
    pub container_height: f64,
}

pub struct Masonry {
    options: MasonryOptions,
}

impl Masonry {
    pub fn new(options: MasonryOptions) -> Result<Self, LayoutError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &MasonryOptions {
        &self.options
    }

    pub fn pack(&self, container_width: f64, viewport_width: f64, heights: &[f64]) -> MasonryLayout {
        let cols = self.options.columns_for_width(viewport_width);
        let margin = self.options.margin;
        let column_width =
            ((container_width - margin * (cols as f64 - 1.0)) / cols as f64).max(0.0);

        let mut column_heights: SmallVec<[f64; 16]> = SmallVec::from_elem(0.0, cols);
        let mut placements = Vec::with_capacity(heights.len());
        for &h in heights {
            let (column, top) = shortest_column(&column_heights);
            placements.push(Placement {
                x: column as f64 * (column_width + margin),
                y: top,
                width: column_width,
                column,
            });
            column_heights[column] = top + h + margin;
        }
        let tallest = column_heights.iter().copied().fold(0.0_f64, f64::max);
        MasonryLayout {
            columns: cols,
            column_width,
            placements,
            container_height: if heights.is_empty() {
                0.0
            } else {
                (tallest - margin).max(0.0)
            },
        }
    }
}

// leftmost wins on ties
#[inline]
fn shortest_column(column_heights: &[f64]) -> (usize, f64) {
    let mut best_i = 0usize;
    let mut best_h = f64::MAX;
    for (i, h) in column_heights.iter().enumerate() {
        if *h < best_h {
            best_h = *h;
            best_i = i;
        }
    }
    (best_i, best_h)
}

/// Opaque result of laying out one generation of blocks. Replaced, never
/// merged, whenever blocks are regenerated.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutHandle {
    pub generation: u64,
    pub layout: MasonryLayout,
}

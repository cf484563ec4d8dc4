//! Row-windowing math for virtualized lists.
//!
//! Given a uniform row height and the current scroll viewport,
//! [`Virtualizer::window`] computes which slice of a row sequence needs
//! to be materialized, widened by a small overscan margin so fast
//! scrolling does not flicker. The reported total height always covers
//! the full sequence, so the scrollbar reflects the true dataset size
//! no matter how few rows are actually rendered.
//!
//! This module is pure math; the DOM side lives in the browser grid
//! component, which absolute-positions each rendered row at
//! `index * row_height` inside a spacer of `total_height`.

/// Windowing parameters: fixed row height plus overscan margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Virtualizer {
    /// Uniform height of a row in CSS pixels. Variable-height rows are
    /// out of scope.
    pub row_height: f64,
    /// Extra rows materialized on each side of the visible span.
    pub overscan: usize,
}

/// Scroll observation for one layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Scroll offset of the container, in pixels from the top.
    pub scroll_top: f64,
    /// Visible height of the container, in pixels.
    pub height: f64,
}

/// Result of a layout pass: the half-open row range to materialize and
/// the full scrollable extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowWindow {
    /// First row index to render (inclusive).
    pub start: usize,
    /// One past the last row index to render.
    pub end: usize,
    /// Scrollable content height covering every row, rendered or not.
    pub total_height: f64,
}

impl Virtualizer {
    pub fn new(row_height: f64, overscan: usize) -> Self {
        Self {
            row_height,
            overscan,
        }
    }

    /// Compute the rows intersecting `viewport` out of `row_count`
    /// total rows.
    ///
    /// Stateless: the window is recomputed from scratch on every call,
    /// so a row sequence that changed length since the last pass simply
    /// produces a fresh, clamped result with no stale positions.
    pub fn window(&self, row_count: usize, viewport: Viewport) -> RowWindow {
        let total_height = self.total_height(row_count);
        if row_count == 0 || self.row_height <= 0.0 {
            return RowWindow {
                start: 0,
                end: 0,
                total_height,
            };
        }

        let scroll = viewport.scroll_top.max(0.0);
        let first = (scroll / self.row_height).floor() as usize;
        let last = ((scroll + viewport.height.max(0.0)) / self.row_height).ceil() as usize;

        let start = first.saturating_sub(self.overscan).min(row_count);
        let end = last.saturating_add(self.overscan).min(row_count);
        RowWindow {
            start: start.min(end),
            end,
            total_height,
        }
    }

    /// Vertical offset of row `index` within the scroll container.
    pub fn row_offset(&self, index: usize) -> f64 {
        index as f64 * self.row_height
    }

    /// Scrollable extent for `row_count` rows, independent of overscan
    /// and of how many rows are materialized.
    pub fn total_height(&self, row_count: usize) -> f64 {
        row_count as f64 * self.row_height
    }
}

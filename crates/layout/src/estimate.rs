use crate::text::TextBlock;

/// Accumulates the height of a block before it is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockEstimate {
    height: f32,
}

impl BlockEstimate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, block: &TextBlock) -> Self {
        self.height += block.height();
        self
    }

    pub fn gap(mut self, mm: f32) -> Self {
        self.height += mm;
        self
    }

    /// Adds `mm` only when `cond` holds.
    pub fn gap_if(self, cond: bool, mm: f32) -> Self {
        if cond { self.gap(mm) } else { self }
    }

    /// Raises the running total to at least `mm`, for rows whose height is
    /// set by a fixed-size element such as a thumbnail.
    pub fn at_least(mut self, mm: f32) -> Self {
        self.height = self.height.max(mm);
        self
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

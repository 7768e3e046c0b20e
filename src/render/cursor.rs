//! Vertical layout cursor.

/// Baseline position and page index during one layout pass.
///
/// The cursor is a plain value: every emission step takes it and returns the
/// advanced cursor, so no layout state outlives a render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    /// Distance of the baseline from the top edge
    pub y: f32,
    /// Zero-based page index
    pub page: usize,
}

impl LayoutCursor {
    /// Cursor at the top margin of the first page.
    pub fn new(top: f32) -> Self {
        Self { y: top, page: 0 }
    }

    /// Move down by `dy`.
    #[must_use]
    pub fn advance(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    /// Move to the top of the next page.
    #[must_use]
    pub fn next_page(self, top: f32) -> Self {
        Self {
            y: top,
            page: self.page + 1,
        }
    }

    /// Whether advancing by `dy` would pass `limit`.
    pub fn overflows(self, dy: f32, limit: f32) -> bool {
        self.y + dy > limit
    }
}

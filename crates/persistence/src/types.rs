//! Result types returned by search operations.

use serde::Serialize;

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<R> {
    /// Matching records in this page, in result order.
    pub items: Vec<R>,
    /// Number of matches before paging was applied.
    pub total: usize,
    /// Number of matches skipped.
    pub skip: usize,
    /// Maximum page size that was applied, if any.
    pub limit: Option<usize>,
}

impl<R> Page<R> {
    /// Returns true if more matches exist past this page.
    pub fn has_more(&self) -> bool {
        self.skip + self.items.len() < self.total
    }
}

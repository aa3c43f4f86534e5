//! Identifiers and a simple allocator for core entities.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PageId(pub u32);

/// Monotonic allocator for PageId. Dense indices improve cache locality;
/// IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_page: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_page(&mut self) -> PageId {
        let id = PageId(self.next_page);
        self.next_page = self.next_page.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

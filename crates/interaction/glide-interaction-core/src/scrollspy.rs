//! Scroll spy for natural-scroll pages.
//!
//! Where the pager owns navigation, the arcade page lets the document scroll
//! natively and only tracks which section is closest to the viewport center,
//! snapping to the last section near the document bottom.

use serde::{Deserialize, Serialize};

/// Snap to the last section when within this many pixels of the bottom.
const BOTTOM_SNAP_PX: f32 = 20.0;

/// One section's extent in document space, host-measured and re-sent on
/// relayout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollSpy {
    bounds: Vec<SectionBounds>,
    active: u32,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bounds(&mut self, bounds: Vec<SectionBounds>) {
        self.bounds = bounds;
        if self.active as usize >= self.bounds.len() {
            self.active = 0;
        }
    }

    pub fn active(&self) -> u32 {
        self.active
    }

    /// Feed a scroll position. Returns Some(new_active) when the active
    /// section changed.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_h: f32, doc_height: f32) -> Option<u32> {
        if self.bounds.is_empty() {
            return None;
        }
        let next = if scroll_y + viewport_h >= doc_height - BOTTOM_SNAP_PX {
            (self.bounds.len() - 1) as u32
        } else {
            let viewport_center = scroll_y + viewport_h / 2.0;
            let mut best = 0u32;
            let mut best_dist = f32::INFINITY;
            for (i, b) in self.bounds.iter().enumerate() {
                let center = b.top + b.height / 2.0;
                let dist = (viewport_center - center).abs();
                if dist < best_dist {
                    best_dist = dist;
                    best = i as u32;
                }
            }
            best
        };
        if next != self.active {
            self.active = next;
            Some(next)
        } else {
            None
        }
    }
}

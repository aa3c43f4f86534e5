//! Responsive layout capability: one breakpoint, queried once per resize.
//!
//! Pages never branch on width themselves; the engine derives the mode from
//! the viewport and routes (or drops) input accordingly.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

impl LayoutMode {
    /// Widths strictly below the breakpoint are mobile, matching the site's
    /// `window.innerWidth < 768` check.
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

/// Viewport size in CSS pixels, as reported by the host on resize.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        // Desktop-sized until the host reports a real viewport; adapters send
        // an initial resize on mount.
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

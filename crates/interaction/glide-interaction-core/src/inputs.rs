//! Input contracts for the core engine.
//!
//! Adapters batch the DOM signals of one frame (pointer moves, wheel deltas,
//! hover edges, scroll, resize) into an `Inputs` and pass it to
//! `Engine::update()` each tick.

use serde::{Deserialize, Serialize};

use crate::ids::PageId;
use crate::layout::Viewport;
use crate::scrollspy::SectionBounds;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Per-page commands applied before ticking.
    #[serde(default)]
    pub page_cmds: Vec<PageCommand>,
    /// New viewport size, when the host window resized this frame.
    #[serde(default)]
    pub resize: Option<Viewport>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PageCommand {
    /// Raw pointer position in CSS pixels.
    PointerMove { page: PageId, x: f32, y: f32 },
    /// Pointer entered an interactive region.
    HoverEnter { page: PageId },
    /// Pointer left an interactive region.
    HoverLeave { page: PageId },
    /// Wheel delta; positive advances, negative retreats.
    Wheel { page: PageId, delta: f32 },
    /// Direct section navigation (dot indicators).
    Jump { page: PageId, index: u32 },
    /// Native scroll position for scroll-spy pages.
    Scroll {
        page: PageId,
        scroll_y: f32,
        doc_height: f32,
    },
    /// Host-measured section extents for scroll-spy pages; re-sent on
    /// relayout.
    SetSectionBounds {
        page: PageId,
        bounds: Vec<SectionBounds>,
    },
}

impl PageCommand {
    pub fn page(&self) -> PageId {
        match self {
            PageCommand::PointerMove { page, .. }
            | PageCommand::HoverEnter { page }
            | PageCommand::HoverLeave { page }
            | PageCommand::Wheel { page, .. }
            | PageCommand::Jump { page, .. }
            | PageCommand::Scroll { page, .. }
            | PageCommand::SetSectionBounds { page, .. } => *page,
        }
    }
}

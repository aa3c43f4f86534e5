//! Output contracts from the core engine.
//!
//! Outputs carry the presentational values for this tick, keyed by small
//! string keys per page, and a separate list of semantic events. Adapters
//! apply changes to the host view and transport events.

use serde::{Deserialize, Serialize};

use crate::ids::PageId;
use crate::layout::LayoutMode;
use crate::value::Value;

/// Change keys emitted by the engine.
pub mod keys {
    /// Top-left indicator position, `Vec2`.
    pub const CURSOR_POSITION: &str = "cursor.position";
    /// Indicator diameter, `Float`.
    pub const CURSOR_SIZE: &str = "cursor.size";
    /// Current section index, `Index`.
    pub const SECTION_INDEX: &str = "section.index";
    /// Eased transition progress, `Float` in [0, 1].
    pub const SECTION_PROGRESS: &str = "section.progress";
    /// Active section on scroll-spy pages, `Index`.
    pub const SCROLL_ACTIVE: &str = "scroll.active";
    /// Typewriter text revealed so far, `Text`.
    pub const TYPE_TEXT: &str = "type.text";
    /// Glitch banner text for this tick, `Text`.
    pub const GLITCH_TEXT: &str = "glitch.text";
}

/// One changed value for a given page this tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Change {
    pub page: PageId,
    pub key: String,
    pub value: Value,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum UiEvent {
    SectionChanged {
        page: PageId,
        from: u32,
        to: u32,
    },
    /// The cooldown elapsed and the pager settled on `index`.
    TransitionFinished {
        page: PageId,
        index: u32,
    },
    LayoutChanged {
        mode: LayoutMode,
    },
    HoverChanged {
        page: PageId,
        hovering: bool,
    },
    /// Catch-all for forward-compatible payloads.
    Custom {
        kind: String,
        data: serde_json::Value,
    },
}

/// Outputs returned by `Engine::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<UiEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}

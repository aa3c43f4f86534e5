//! Glide Interaction Core (host-agnostic)
//!
//! Controllers behind Glide's page chrome: the lagging "magnetic" cursor, the
//! wheel-driven section pager, the scroll spy for natural-scroll pages, and the
//! typewriter reveal. Everything here is deterministic and tick-driven: hosts
//! forward raw input as [`Inputs`] and call [`Engine::update`] once per display
//! frame; the engine answers with keyed [`Outputs`] the host renders. No DOM,
//! no timers, no I/O.

pub mod config;
pub mod ease;
pub mod engine;
pub mod follower;
pub mod glitch;
pub mod ids;
pub mod inputs;
pub mod layout;
pub mod outputs;
pub mod pager;
pub mod scrollspy;
pub mod typewriter;
pub mod value;

// Re-exports for consumers (adapters)
pub use config::{Config, CursorStyle};
pub use ease::EaseCurve;
pub use engine::{Engine, PageCfg};
pub use follower::PointerFollower;
pub use glitch::GlitchText;
pub use ids::PageId;
pub use inputs::{Inputs, PageCommand};
pub use layout::{LayoutMode, Viewport};
pub use outputs::{Change, Outputs, UiEvent};
pub use pager::{PagerPhase, SectionPager};
pub use scrollspy::{ScrollSpy, SectionBounds};
pub use typewriter::Typewriter;
pub use value::{Value, ValueKind};

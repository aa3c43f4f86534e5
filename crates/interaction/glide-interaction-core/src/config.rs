//! Core configuration for glide-interaction-core.

use serde::{Deserialize, Serialize};

use crate::ease::EaseCurve;

/// Engine-wide tunables. Per-page overrides live in `PageCfg`; these are the
/// defaults a page gets when it does not override them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cursor smoothing factor per 60 Hz frame, in (0, 1). The site variants
    /// shipped 0.12 (home) and 0.15 (galleries); both are just tunings.
    pub damping: f32,

    /// Seconds after a section change during which navigation input is dropped.
    pub cooldown: f32,

    /// Viewport widths strictly below this are the mobile layout.
    pub mobile_breakpoint: f32,

    /// Indicator geometry for idle/hover states.
    pub cursor: CursorStyle,

    /// Timing curve applied to `section.progress`.
    pub ease: EaseCurve,

    /// Seconds per revealed character for typewriter pages.
    pub type_interval: f32,

    /// Seconds between glitch bursts on pages with a glitch banner.
    pub glitch_interval: f32,

    /// Seconds a glitch burst stays on screen.
    pub glitch_hold: f32,

    /// Seed for the glitch mixer. Same seed, same bursts.
    pub glitch_seed: u64,

    /// Maximum events retained per tick; extra events are dropped.
    pub max_events_per_tick: usize,
}

/// Indicator size and centering offset, per hover state, in CSS pixels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CursorStyle {
    pub size: f32,
    pub offset: f32,
    pub hover_size: f32,
    pub hover_offset: f32,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            size: 24.0,
            offset: 12.0,
            hover_size: 60.0,
            hover_offset: 30.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.12,
            cooldown: 0.8,
            mobile_breakpoint: 768.0,
            cursor: CursorStyle::default(),
            ease: EaseCurve::EASE,
            type_interval: 0.08,
            glitch_interval: 3.0,
            glitch_hold: 0.1,
            glitch_seed: 0x5dee_ce66d,
            max_events_per_tick: 1024,
        }
    }
}

//! Pointer follower: the lagging cursor indicator.
//!
//! Raw pointer position is the target; the rendered position approaches it
//! exponentially each tick, which is what gives the cursor its drag. Hover
//! over an interactive region grows the indicator and recenters it.

use crate::config::CursorStyle;

/// Reference frame rate the damping constants were tuned against.
const REF_RATE: f32 = 60.0;

#[derive(Clone, Debug)]
pub struct PointerFollower {
    target: [f32; 2],
    pos: [f32; 2],
    hover_depth: u32,
    damping: f32,
}

impl PointerFollower {
    /// `damping` is the per-frame factor at 60 Hz, clamped into (0, 1).
    pub fn new(damping: f32) -> Self {
        Self {
            target: [0.0, 0.0],
            pos: [0.0, 0.0],
            hover_depth: 0,
            damping: damping.clamp(0.01, 0.99),
        }
    }

    /// Record the raw pointer position. No visual effect until the next tick.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = [x, y];
    }

    /// Entered an interactive region. Depth-counted so nested regions may
    /// overlap without a leave flickering the state.
    pub fn hover_enter(&mut self) {
        self.hover_depth = self.hover_depth.saturating_add(1);
    }

    pub fn hover_leave(&mut self) {
        self.hover_depth = self.hover_depth.saturating_sub(1);
    }

    pub fn hovering(&self) -> bool {
        self.hover_depth > 0
    }

    /// Advance the smoothed position by `dt` seconds.
    ///
    /// The naive per-frame form `pos += (target - pos) * damping` assumes a
    /// fixed 60 Hz loop. Raising the retained fraction to `dt * 60` keeps the
    /// settle time identical across refresh rates: two 1/120 s ticks land
    /// exactly where one 1/60 s tick does.
    pub fn tick(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let k = 1.0 - (1.0 - self.damping).powf(dt * REF_RATE);
        self.pos[0] += (self.target[0] - self.pos[0]) * k;
        self.pos[1] += (self.target[1] - self.pos[1]) * k;
    }

    /// Smoothed position (indicator center).
    pub fn position(&self) -> [f32; 2] {
        self.pos
    }

    /// Top-left corner the host should place the indicator at.
    pub fn render_position(&self, style: &CursorStyle) -> [f32; 2] {
        let offset = if self.hovering() {
            style.hover_offset
        } else {
            style.offset
        };
        [self.pos[0] - offset, self.pos[1] - offset]
    }

    /// Indicator diameter for the current hover state.
    pub fn indicator_size(&self, style: &CursorStyle) -> f32 {
        if self.hovering() {
            style.hover_size
        } else {
            style.size
        }
    }
}

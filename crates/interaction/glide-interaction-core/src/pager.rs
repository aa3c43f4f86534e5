//! Section pager: bounded, debounced index navigation.
//!
//! Wheel deltas and dot-indicator jumps become single-step index changes with
//! a fixed cooldown. Input that arrives mid-transition is dropped, never
//! queued; one flick of the wheel moves exactly one section.

use serde::{Deserialize, Serialize};

use crate::ease::EaseCurve;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PagerPhase {
    Idle,
    /// Holding navigation until the cooldown runs out. `remaining` counts
    /// down in seconds; `from` is the index we are leaving.
    Transitioning { from: u32, remaining: f32 },
}

/// A step accepted by the pager this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerStep {
    pub from: u32,
    pub to: u32,
}

#[derive(Clone, Debug)]
pub struct SectionPager {
    index: u32,
    count: u32,
    cooldown: f32,
    phase: PagerPhase,
    ease: EaseCurve,
}

impl SectionPager {
    /// `count` must be at least 1; `cooldown` is in seconds.
    pub fn new(count: u32, cooldown: f32, ease: EaseCurve) -> Self {
        Self {
            index: 0,
            count: count.max(1),
            cooldown: cooldown.max(0.0),
            phase: PagerPhase::Idle,
            ease,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, PagerPhase::Transitioning { .. })
    }

    pub fn phase(&self) -> PagerPhase {
        self.phase
    }

    /// Wheel input: positive delta advances, negative retreats. Returns the
    /// accepted step, or None when the input is dropped (mid-transition, zero
    /// delta, or at a boundary).
    pub fn on_wheel(&mut self, delta: f32) -> Option<PagerStep> {
        if self.is_transitioning() {
            log::debug!("pager: wheel dropped during cooldown");
            return None;
        }
        let target = if delta > 0.0 {
            if self.index + 1 >= self.count {
                return None;
            }
            self.index + 1
        } else if delta < 0.0 {
            if self.index == 0 {
                return None;
            }
            self.index - 1
        } else {
            return None;
        };
        Some(self.begin(target))
    }

    /// Direct navigation (dot indicators). Same Idle-only guard and timing as
    /// wheel input; out-of-range indices and the current index are no-ops.
    pub fn jump_to(&mut self, target: u32) -> Option<PagerStep> {
        if self.is_transitioning() {
            log::debug!("pager: jump dropped during cooldown");
            return None;
        }
        if target >= self.count {
            log::warn!(
                "pager: jump to {target} ignored (count {})",
                self.count
            );
            return None;
        }
        if target == self.index {
            return None;
        }
        Some(self.begin(target))
    }

    fn begin(&mut self, target: u32) -> PagerStep {
        let step = PagerStep {
            from: self.index,
            to: target,
        };
        self.phase = PagerPhase::Transitioning {
            from: self.index,
            remaining: self.cooldown,
        };
        self.index = target;
        step
    }

    /// Count the cooldown down. Returns the settled index when the window
    /// elapses this tick. The window clears unconditionally; no input received
    /// meanwhile can extend it.
    pub fn tick(&mut self, dt: f32) -> Option<u32> {
        if let PagerPhase::Transitioning { from, remaining } = self.phase {
            let remaining = remaining - dt.max(0.0);
            if remaining <= 0.0 {
                self.phase = PagerPhase::Idle;
                return Some(self.index);
            }
            self.phase = PagerPhase::Transitioning { from, remaining };
        }
        None
    }

    /// Eased progress of the in-flight transition in [0, 1]; 1.0 when idle.
    pub fn progress(&self) -> f32 {
        match self.phase {
            PagerPhase::Idle => 1.0,
            PagerPhase::Transitioning { remaining, .. } => {
                if self.cooldown <= 0.0 {
                    1.0
                } else {
                    let linear = 1.0 - (remaining / self.cooldown).clamp(0.0, 1.0);
                    self.ease.apply(linear)
                }
            }
        }
    }
}

//! Cubic-bezier timing curves for transition progress.
//!
//! The host renders section transitions with CSS-style easing; the engine
//! reports eased progress so dot indicators and parallax layers can follow the
//! same curve. X is inverted by binary search, same as a browser would.

use serde::{Deserialize, Serialize};

/// Control points (x1, y1, x2, y2) of a CSS cubic-bezier timing function.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EaseCurve {
    pub ctrl: [f32; 4],
}

impl EaseCurve {
    /// Identity timing.
    pub const LINEAR: EaseCurve = EaseCurve {
        ctrl: [0.0, 0.0, 1.0, 1.0],
    };
    /// CSS `ease`.
    pub const EASE: EaseCurve = EaseCurve {
        ctrl: [0.25, 0.1, 0.25, 1.0],
    };
    /// CSS `ease-out`.
    pub const EASE_OUT: EaseCurve = EaseCurve {
        ctrl: [0.0, 0.0, 0.58, 1.0],
    };

    /// Map linear progress t in [0,1] through the curve.
    pub fn apply(&self, t: f32) -> f32 {
        bezier_ease_t(t, self.ctrl[0], self.ctrl[1], self.ctrl[2], self.ctrl[3])
    }
}

impl Default for EaseCurve {
    fn default() -> Self {
        EaseCurve::EASE
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((EaseCurve::LINEAR.apply(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn ease_hits_endpoints_and_is_monotonic() {
        let curve = EaseCurve::EASE;
        assert!((curve.apply(0.0) - 0.0).abs() < 1e-4);
        assert!((curve.apply(1.0) - 1.0).abs() < 1e-4);
        let mut prev = 0.0;
        for i in 1..=20 {
            let y = curve.apply(i as f32 / 20.0);
            assert!(y >= prev - 1e-4, "not monotonic at step {i}: {y} < {prev}");
            prev = y;
        }
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        let curve = EaseCurve::EASE_OUT;
        assert!((curve.apply(-1.0) - 0.0).abs() < 1e-4);
        assert!((curve.apply(2.0) - 1.0).abs() < 1e-4);
    }
}

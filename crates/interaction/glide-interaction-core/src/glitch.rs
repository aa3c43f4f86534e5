//! Seeded glitch effect for the arcade page's name banner.
//!
//! Every few seconds the banner flashes a corrupted variant for one brief
//! hold, then restores. Corruption is drawn from a seeded mixer keyed by
//! burst ordinal and character position, so the effect is reproducible: same
//! seed and tick sequence, same bursts.

/// Substitution pool, ASCII only.
const GLITCH_POOL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Per-character corruption chance during a burst, in percent.
const GLITCH_PCT: u64 = 5;

#[derive(Clone, Debug)]
pub struct GlitchText {
    text: String,
    /// Seconds between bursts.
    interval: f32,
    /// Seconds a burst stays on screen.
    hold: f32,
    seed: u64,
    elapsed: f32,
}

impl GlitchText {
    pub fn new(text: impl Into<String>, interval: f32, hold: f32, seed: u64) -> Self {
        Self {
            text: text.into(),
            interval: interval.max(1e-3),
            hold: hold.max(0.0),
            seed,
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    /// Ordinal of the burst currently holding, if any. The first burst fires
    /// one full interval after mount, not immediately.
    fn burst(&self) -> Option<u64> {
        let cycle = (self.elapsed / self.interval) as u64;
        if cycle == 0 {
            return None;
        }
        let phase = self.elapsed - cycle as f32 * self.interval;
        (phase < self.hold).then_some(cycle)
    }

    /// Banner text for this tick: the plain text, or a corrupted variant
    /// while a burst holds. Character count is always preserved.
    pub fn visible(&self) -> String {
        match self.burst() {
            None => self.text.clone(),
            Some(burst) => {
                let pool = GLITCH_POOL.as_bytes();
                self.text
                    .chars()
                    .enumerate()
                    .map(|(i, c)| {
                        let r = splitmix(
                            self.seed
                                ^ burst.wrapping_mul(0x9e37_79b9_7f4a_7c15)
                                ^ (i as u64).wrapping_mul(0xd1b5_4a32_d192_ed03),
                        );
                        if r % 100 < GLITCH_PCT {
                            pool[((r >> 8) as usize) % pool.len()] as char
                        } else {
                            c
                        }
                    })
                    .collect()
            }
        }
    }
}

/// SplitMix64 finalizer; enough mixing for a visual effect.
fn splitmix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &str = "SHANE COSTELLO";

    #[test]
    fn quiet_before_first_burst() {
        let mut g = GlitchText::new(BANNER, 3.0, 0.1, 7);
        assert_eq!(g.visible(), BANNER);
        g.tick(2.9);
        assert_eq!(g.visible(), BANNER);
    }

    #[test]
    fn burst_is_deterministic_and_length_preserving() {
        let mut a = GlitchText::new(BANNER, 3.0, 0.1, 7);
        let mut b = GlitchText::new(BANNER, 3.0, 0.1, 7);
        a.tick(3.05);
        b.tick(1.5);
        b.tick(1.55);
        let va = a.visible();
        assert_eq!(va, b.visible());
        assert_eq!(va.chars().count(), BANNER.chars().count());
    }

    #[test]
    fn restores_after_hold() {
        let mut g = GlitchText::new(BANNER, 3.0, 0.1, 7);
        g.tick(3.05);
        g.tick(0.1);
        assert_eq!(g.visible(), BANNER);
    }

    #[test]
    fn bursts_eventually_corrupt() {
        let corrupted = (1..=100).any(|k| {
            let mut g = GlitchText::new(BANNER, 3.0, 0.1, 7);
            g.tick(k as f32 * 3.0 + 0.05);
            g.visible() != BANNER
        });
        assert!(corrupted, "no burst touched the banner in 100 cycles");
    }

    #[test]
    fn different_seeds_diverge() {
        let run = |seed: u64| -> String {
            (1..=100)
                .map(|k| {
                    let mut g = GlitchText::new(BANNER, 3.0, 0.1, seed);
                    g.tick(k as f32 * 3.0 + 0.05);
                    g.visible()
                })
                .collect()
        };
        assert_ne!(run(1), run(2));
    }
}

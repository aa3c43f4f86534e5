//! Tick-driven typewriter reveal for the arcade page's tagline.

#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    /// Seconds per character.
    interval: f32,
    elapsed: f32,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: f32) -> Self {
        Self {
            text: text.into(),
            interval: interval.max(1e-3),
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    fn revealed_chars(&self) -> usize {
        let n = (self.elapsed / self.interval) as usize;
        n.min(self.text.chars().count())
    }

    /// Prefix revealed so far; grows monotonically to the full text and holds.
    /// Cuts on char boundaries, never inside a multibyte sequence.
    pub fn visible(&self) -> &str {
        let n = self.revealed_chars();
        match self.text.char_indices().nth(n) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.revealed_chars() == self.text.chars().count()
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_interval() {
        let mut tw = Typewriter::new("abcd", 0.08);
        assert_eq!(tw.visible(), "");
        tw.tick(0.08);
        assert_eq!(tw.visible(), "a");
        tw.tick(0.16);
        assert_eq!(tw.visible(), "abc");
        tw.tick(10.0);
        assert_eq!(tw.visible(), "abcd");
        assert!(tw.is_done());
    }

    #[test]
    fn multibyte_text_cuts_on_char_boundaries() {
        let mut tw = Typewriter::new("héllo→", 0.1);
        tw.tick(0.25);
        assert_eq!(tw.visible(), "hé");
        tw.tick(1.0);
        assert_eq!(tw.visible(), "héllo→");
    }

    #[test]
    fn reset_starts_over() {
        let mut tw = Typewriter::new("xy", 0.1);
        tw.tick(1.0);
        assert!(tw.is_done());
        tw.reset();
        assert_eq!(tw.visible(), "");
    }
}

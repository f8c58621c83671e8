//! Single-value tween
//!
//! A cycle is `duration` seconds forward, plus the same again backwards
//! when `yoyo` is set. `Repeat::Times(n)` plays `n` extra cycles after the
//! first; `Repeat::Forever` never finishes.

use super::Ease;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Extra cycles after the first (0 = play once)
    Times(u32),
    Forever,
    #[default]
    Once,
}

#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    delay: f32,
    ease: Ease,
    yoyo: bool,
    repeat: Repeat,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            ease: Ease::Linear,
            yoyo: false,
            repeat: Repeat::Once,
            elapsed: 0.0,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Length of one forward (+ backward) pass
    fn cycle_len(&self) -> f32 {
        if self.yoyo { self.duration * 2.0 } else { self.duration }
    }

    fn cycles(&self) -> Option<u32> {
        match self.repeat {
            Repeat::Once => Some(1),
            Repeat::Times(n) => Some(n.saturating_add(1)),
            Repeat::Forever => None,
        }
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.is_finished() {
            return;
        }
        self.elapsed += dt.max(0.0);

        // Keep endless tweens from accumulating float error
        let cycle = self.cycle_len();
        if self.cycles().is_none() && cycle > 0.0 && self.elapsed > self.delay + cycle {
            self.elapsed = self.delay + (self.elapsed - self.delay) % cycle;
        }
    }

    pub fn is_finished(&self) -> bool {
        match self.cycles() {
            Some(n) => self.elapsed - self.delay >= self.cycle_len() * n as f32,
            None => false,
        }
    }

    /// Still waiting out the start delay
    #[cfg(test)]
    pub fn is_delayed(&self) -> bool {
        self.elapsed < self.delay
    }

    /// Current animated value
    pub fn value(&self) -> f32 {
        self.lerp(self.progress())
    }

    /// Eased 0..1 position between `from` and `to`
    fn progress(&self) -> f32 {
        if self.is_finished() {
            return if self.yoyo { 0.0 } else { 1.0 };
        }
        let active = self.elapsed - self.delay;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }

        let t = active % self.cycle_len();
        let linear = if t <= self.duration {
            t / self.duration
        } else {
            1.0 - (t - self.duration) / self.duration
        };
        self.ease.apply(linear)
    }

    fn lerp(&self, p: f32) -> f32 {
        self.from + (self.to - self.from) * p
    }
}

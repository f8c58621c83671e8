//! Delayed calls and looping events

#[derive(Debug, Clone)]
pub struct Timer {
    period: f32,
    elapsed: f32,
    looping: bool,
    done: bool,
}

impl Timer {
    /// Fires once after `delay` seconds
    pub fn once(delay: f32) -> Self {
        Self { period: delay.max(0.0), elapsed: 0.0, looping: false, done: false }
    }

    /// Fires every `period` seconds until dropped
    pub fn looping(period: f32) -> Self {
        Self { period: period.max(0.0), elapsed: 0.0, looping: true, done: false }
    }

    /// Advance by `dt`; returns how many times the timer fired
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.done {
            return 0;
        }
        self.elapsed += dt.max(0.0);

        if !self.looping {
            if self.elapsed >= self.period {
                self.done = true;
                return 1;
            }
            return 0;
        }

        // A zero period would never drain; treat it as once per tick
        if self.period <= 0.0 {
            self.elapsed = 0.0;
            return 1;
        }
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    /// One-shot timer that has already fired
    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Seconds until the next firing
    #[cfg(test)]
    pub fn remaining(&self) -> f32 {
        if self.done { 0.0 } else { (self.period - self.elapsed).max(0.0) }
    }
}

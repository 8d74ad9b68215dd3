use super::ease::Ease;

/// Values that can be interpolated by a [`Tween`].
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// A single interpolation from `from` to `to`, starting at `start` and lasting
/// `duration` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: f64,
    duration: f64,
    ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(0.0),
            ease,
        }
    }

    pub fn settled(value: T) -> Self {
        Self::new(value, value, f64::NEG_INFINITY, 0.0, Ease::Linear)
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    pub fn progress(&self, now: f64) -> f64 {
        if now < self.start {
            0.0
        } else if self.duration <= 0.0 || now >= self.end() {
            1.0
        } else {
            (now - self.start) / self.duration
        }
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn value_at(&self, now: f64) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            self.to
        } else if p <= 0.0 {
            self.from
        } else {
            self.from.lerp(self.to, self.ease.apply(p))
        }
    }

    pub fn retarget(&mut self, now: f64, to: T, duration: f64, ease: Ease) {
        self.retarget_at(now, now, to, duration, ease);
    }

    /// Restart towards `to` from the value at `now`, holding that value until
    /// `start`.
    pub fn retarget_at(&mut self, now: f64, start: f64, to: T, duration: f64, ease: Ease) {
        *self = Self::new(self.value_at(now), to, start.max(now), duration, ease);
    }
}

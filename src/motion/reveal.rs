use super::ease::Ease;
use super::transform::Transform;
use super::tween::Tween;
use crate::observer::Observer;

/// Whether a reveal plays again after its trigger scrolls back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPolicy {
    Once,
    Reversible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Armed,
    Fired,
}

/// How start times are spread across the items of one reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stagger {
    None,
    Each(f64),
    Amount(f64),
}

impl Stagger {
    pub fn offset(&self, index: usize, count: usize) -> f64 {
        match *self {
            Stagger::None => 0.0,
            Stagger::Each(each) => each * index as f64,
            Stagger::Amount(_) if count <= 1 => 0.0,
            Stagger::Amount(amount) => amount * index as f64 / (count - 1) as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub hidden: Transform,
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
    pub stagger: Stagger,
    /// Fraction of the viewport height, from the top, that the trigger's top
    /// edge has to reach.
    pub threshold: f64,
    pub policy: RevealPolicy,
}

impl RevealSpec {
    pub fn new(hidden: Transform, duration: f64, ease: Ease) -> Self {
        Self {
            hidden,
            duration,
            ease,
            delay: 0.0,
            stagger: Stagger::None,
            threshold: 0.85,
            policy: RevealPolicy::Once,
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn policy(mut self, policy: RevealPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Scroll-triggered entrance of one or more items.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    spec: RevealSpec,
    phase: RevealPhase,
    primed: bool,
    enabled: bool,
    items: Vec<Tween<Transform>>,
}

impl Reveal {
    pub fn new(spec: RevealSpec, count: usize) -> Self {
        Self {
            spec,
            phase: RevealPhase::Armed,
            primed: false,
            enabled: true,
            items: vec![Tween::settled(spec.hidden); count],
        }
    }

    pub fn disabled(spec: RevealSpec, count: usize) -> Self {
        Self {
            enabled: false,
            ..Self::new(spec, count)
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Time from firing until the last item is at rest.
    pub fn settle_time(&self) -> f64 {
        let n = self.items.len();
        let last = n.saturating_sub(1);
        self.spec.delay + self.spec.stagger.offset(last, n) + self.spec.duration
    }

    pub fn item(&self, index: usize, now: f64) -> Transform {
        if !self.enabled || !self.primed {
            return Transform::IDENTITY;
        }
        self.items
            .get(index)
            .map(|t| t.value_at(now))
            .unwrap_or(Transform::IDENTITY)
    }

    /// Feeds the trigger's top edge, in viewport coordinates. Returns whether
    /// anything changed.
    pub fn observe_top(&mut self, top: f64, viewport_height: f64, now: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let was_primed = self.primed;
        self.primed = true;
        let reached = top <= viewport_height * self.spec.threshold;
        let before = self.phase;
        if reached {
            self.region_entered(0, now);
        } else {
            self.region_left(0, now);
        }
        !was_primed || before != self.phase
    }

    fn fire(&mut self, now: f64) {
        if self.phase == RevealPhase::Fired {
            return;
        }
        self.phase = RevealPhase::Fired;
        let n = self.items.len();
        let spec = self.spec;
        for (i, item) in self.items.iter_mut().enumerate() {
            let start = now + spec.delay + spec.stagger.offset(i, n);
            item.retarget_at(now, start, Transform::IDENTITY, spec.duration, spec.ease);
        }
    }

    fn rewind(&mut self, now: f64) {
        if self.phase == RevealPhase::Armed || self.spec.policy == RevealPolicy::Once {
            return;
        }
        self.phase = RevealPhase::Armed;
        let n = self.items.len();
        let spec = self.spec;
        for (i, item) in self.items.iter_mut().enumerate() {
            // played backwards, so the last item leaves first
            let start = now + spec.stagger.offset(n - 1 - i, n);
            item.retarget_at(now, start, spec.hidden, spec.duration, spec.ease);
        }
    }
}

impl Observer for Reveal {
    fn region_entered(&mut self, _region: usize, now: f64) {
        self.primed = true;
        self.fire(now);
    }

    fn region_left(&mut self, _region: usize, now: f64) {
        self.rewind(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 1000.0;

    fn cards() -> RevealSpec {
        RevealSpec::new(
            Transform {
                y: 120.0,
                scale: 0.7,
                blur: 10.0,
                ..Transform::HIDDEN
            },
            1400.0,
            Ease::power_out(3),
        )
        .threshold(0.9)
    }

    #[test]
    fn test_unobserved_reveal_shows_content() {
        let r = Reveal::new(cards(), 3);
        assert_eq!(r.item(0, 0.0), Transform::IDENTITY);
        assert_eq!(r.phase(), RevealPhase::Armed);
    }

    #[test]
    fn test_hidden_until_threshold() {
        let mut r = Reveal::new(cards(), 1);
        assert!(r.observe_top(950.0, VH, 0.0));
        assert_eq!(r.phase(), RevealPhase::Armed);
        assert_eq!(r.item(0, 10.0).opacity, 0.0);

        assert!(r.observe_top(899.0, VH, 100.0));
        assert_eq!(r.phase(), RevealPhase::Fired);
        // staying past the threshold is not a change
        assert!(!r.observe_top(500.0, VH, 200.0));
    }

    #[test]
    fn test_never_stuck_invisible() {
        let spec = cards().stagger(Stagger::Amount(800.0)).delay(100.0);
        let mut r = Reveal::new(spec, 3);
        r.observe_top(2000.0, VH, 0.0);
        r.observe_top(0.0, VH, 50.0);
        let done = 50.0 + r.settle_time();
        for i in 0..3 {
            assert_eq!(r.item(i, done), Transform::IDENTITY);
            assert_eq!(r.item(i, done + 10_000.0).opacity, 1.0);
        }
    }

    #[test]
    fn test_stagger_offsets() {
        assert_eq!(Stagger::Each(150.0).offset(2, 4), 300.0);
        assert_eq!(Stagger::Amount(800.0).offset(2, 3), 800.0);
        assert_eq!(Stagger::Amount(800.0).offset(1, 3), 400.0);
        assert_eq!(Stagger::Amount(800.0).offset(0, 1), 0.0);
        assert_eq!(Stagger::None.offset(5, 6), 0.0);
    }

    #[test]
    fn test_staggered_items_start_in_order() {
        let spec = cards().stagger(Stagger::Each(200.0));
        let mut r = Reveal::new(spec, 3);
        r.observe_top(0.0, VH, 0.0);
        let at = 300.0;
        assert!(r.item(0, at).opacity > r.item(1, at).opacity);
        assert_eq!(r.item(2, at).opacity, 0.0);
    }

    #[test]
    fn test_once_never_replays() {
        let mut r = Reveal::new(cards(), 1);
        r.observe_top(0.0, VH, 0.0);
        r.observe_top(2000.0, VH, 5000.0);
        assert_eq!(r.phase(), RevealPhase::Fired);
        assert_eq!(r.item(0, 9000.0), Transform::IDENTITY);
    }

    #[test]
    fn test_reversible_rewinds_and_replays() {
        let mut r = Reveal::new(cards().policy(RevealPolicy::Reversible), 1);
        r.observe_top(0.0, VH, 0.0);
        r.observe_top(2000.0, VH, 5000.0);
        assert_eq!(r.phase(), RevealPhase::Armed);
        assert_eq!(r.item(0, 5000.0 + 1400.0).opacity, 0.0);

        r.observe_top(0.0, VH, 10_000.0);
        assert_eq!(r.phase(), RevealPhase::Fired);
        assert_eq!(r.item(0, 10_000.0 + r.settle_time()), Transform::IDENTITY);
    }

    #[test]
    fn test_rewind_mid_flight_has_no_jump() {
        let mut r = Reveal::new(cards().policy(RevealPolicy::Reversible), 1);
        r.observe_top(0.0, VH, 0.0);
        let mid = r.item(0, 700.0);
        r.observe_top(2000.0, VH, 700.0);
        assert_eq!(r.item(0, 700.0), mid);
    }

    #[test]
    fn test_disabled_is_always_identity() {
        let mut r = Reveal::disabled(cards(), 2);
        assert!(!r.is_enabled());
        assert!(!r.observe_top(2000.0, VH, 0.0));
        assert_eq!(r.item(1, 0.0), Transform::IDENTITY);
    }
}

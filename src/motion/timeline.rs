use super::ease::Ease;
use super::transform::Transform;
use super::tween::Lerp;

/// Where a step is placed on a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    End,
    Relative(f64),
    At(f64),
}

/// One tween on a timeline, optionally applied to `count` elements with
/// `stagger` milliseconds between each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub from: Transform,
    pub to: Transform,
    pub duration: f64,
    pub ease: Ease,
    pub count: usize,
    pub stagger: f64,
}

impl Step {
    pub fn from(from: Transform, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to: Transform::IDENTITY,
            duration,
            ease,
            count: 1,
            stagger: 0.0,
        }
    }

    pub fn to(to: Transform, duration: f64, ease: Ease) -> Self {
        Self {
            from: Transform::IDENTITY,
            to,
            duration,
            ease,
            count: 1,
            stagger: 0.0,
        }
    }

    pub fn staggered(mut self, count: usize, each: f64) -> Self {
        self.count = count.max(1);
        self.stagger = each;
        self
    }

    fn length(&self) -> f64 {
        self.stagger * (self.count.saturating_sub(1)) as f64 + self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Placed {
    key: &'static str,
    start: f64,
    step: Step,
}

/// A sequence of keyed steps, sampled by elapsed time since the timeline was
/// started.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    delay: f64,
    end: f64,
    steps: Vec<Placed>,
}

impl Timeline {
    pub fn new(delay: f64) -> Self {
        Self {
            delay,
            end: 0.0,
            steps: Vec::new(),
        }
    }

    pub fn add(mut self, key: &'static str, step: Step, position: Position) -> Self {
        let start = match position {
            Position::End => self.end,
            Position::Relative(offset) => (self.end + offset).max(0.0),
            Position::At(at) => at.max(0.0),
        };
        self.end = self.end.max(start + step.length());
        self.steps.push(Placed { key, start, step });
        self
    }

    pub fn duration(&self) -> f64 {
        self.delay + self.end
    }

    #[cfg(test)]
    pub fn start_of(&self, key: &str) -> Option<f64> {
        self.steps.iter().find(|p| p.key == key).map(|p| p.start)
    }

    pub fn progress(&self, key: &str, index: usize, elapsed: f64) -> f64 {
        let Some(placed) = self.steps.iter().find(|p| p.key == key) else {
            return 1.0;
        };
        let step = &placed.step;
        let local = elapsed - self.delay - placed.start - step.stagger * index as f64;
        if step.duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        step.ease.apply(local / step.duration)
    }

    /// State of element `index` of the step for `key`. Keys that were never
    /// added sample as the identity.
    pub fn sample(&self, key: &str, index: usize, elapsed: f64) -> Transform {
        let Some(placed) = self.steps.iter().find(|p| p.key == key) else {
            return Transform::IDENTITY;
        };
        let p = self.progress(key, index, elapsed);
        if p >= 1.0 {
            placed.step.to
        } else if p <= 0.0 {
            placed.step.from
        } else {
            placed.step.from.lerp(placed.step.to, p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faded() -> Transform {
        Transform::HIDDEN
    }

    #[test]
    fn test_relative_positions_overlap() {
        let tl = Timeline::new(200.0)
            .add("background", Step::from(faded(), 3000.0, Ease::Linear), Position::End)
            .add(
                "orbs",
                Step::from(faded(), 2000.0, Ease::Linear).staggered(2, 300.0),
                Position::Relative(-1500.0),
            )
            .add("heading", Step::from(faded(), 1500.0, Ease::Linear), Position::Relative(-1200.0));
        assert_eq!(tl.start_of("background"), Some(0.0));
        assert_eq!(tl.start_of("orbs"), Some(1500.0));
        // orbs end at 1500 + 300 + 2000
        assert_eq!(tl.start_of("heading"), Some(3800.0 - 1200.0));
        assert_eq!(tl.duration(), 200.0 + 2600.0 + 1500.0);
    }

    #[test]
    fn test_sample_respects_delay_and_stagger() {
        let tl = Timeline::new(100.0).add(
            "items",
            Step::from(faded(), 1000.0, Ease::Linear).staggered(3, 500.0),
            Position::End,
        );
        assert_eq!(tl.sample("items", 0, 0.0), faded());
        assert_eq!(tl.sample("items", 0, 600.0).opacity, 0.5);
        assert_eq!(tl.sample("items", 2, 600.0), faded());
        assert_eq!(tl.sample("items", 2, 2100.0), Transform::IDENTITY);
    }

    #[test]
    fn test_everything_settles_after_duration() {
        let tl = Timeline::new(0.0)
            .add("a", Step::from(faded(), 800.0, Ease::elastic_out(1.0, 0.5)), Position::End)
            .add("b", Step::from(faded(), 400.0, Ease::power_out(3)), Position::Relative(-600.0));
        let end = tl.duration();
        assert!(tl.sample("a", 0, end).is_identity());
        assert!(tl.sample("b", 0, end).is_identity());
    }

    #[test]
    fn test_to_steps_and_unknown_keys() {
        let glow = Transform {
            opacity: 0.5,
            ..Transform::IDENTITY
        };
        let tl = Timeline::new(0.0).add("glow", Step::to(glow, 100.0, Ease::Linear), Position::At(50.0));
        assert_eq!(tl.sample("glow", 0, 0.0), Transform::IDENTITY);
        assert_eq!(tl.sample("glow", 0, 150.0), glow);
        assert_eq!(tl.sample("missing", 0, 0.0), Transform::IDENTITY);
        assert_eq!(tl.progress("missing", 0, 0.0), 1.0);
    }
}

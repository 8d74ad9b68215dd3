use super::ease::Ease;
use super::tween::Tween;
use crate::observer::Point;

/// An eased animation of the window's vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    tween: Tween<f64>,
}

impl ScrollTo {
    pub fn new(from: f64, to: f64, now: f64, duration: f64, ease: Ease) -> Self {
        Self {
            tween: Tween::new(from, to.max(0.0), now, duration, ease),
        }
    }

    pub fn offset_at(&self, now: f64) -> f64 {
        self.tween.value_at(now)
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.tween.is_done(now)
    }
}

/// Progress of a scrubbed effect across a container: 0 when its top meets the
/// bottom of the viewport, 1 when its bottom passes the top of the viewport.
/// `top` is in viewport coordinates.
pub fn scrub_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = height + viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Pointer position normalized to `[-1, 1]` on both axes, centered on the
/// viewport.
pub fn normalized_pointer(pointer: Point, width: f64, height: f64) -> Point {
    let norm = |v: f64, size: f64| {
        if size <= 0.0 {
            0.0
        } else {
            ((v / size - 0.5) * 2.0).clamp(-1.0, 1.0)
        }
    };
    Point::new(norm(pointer.x, width), norm(pointer.y, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_is_eased_not_instant() {
        let s = ScrollTo::new(0.0, 1000.0, 0.0, 1200.0, Ease::power_in_out(2));
        assert_eq!(s.offset_at(0.0), 0.0);
        let early = s.offset_at(100.0);
        assert!(early > 0.0 && early < 100.0 * 1000.0 / 1200.0);
        assert_eq!(s.offset_at(600.0), 500.0);
        assert_eq!(s.offset_at(1200.0), 1000.0);
        assert!(s.is_done(1200.0));
    }

    #[test]
    fn test_scroll_target_never_negative() {
        let s = ScrollTo::new(300.0, -20.0, 0.0, 100.0, Ease::Linear);
        assert_eq!(s.offset_at(100.0), 0.0);
    }

    #[test]
    fn test_scrub_progress() {
        assert_eq!(scrub_progress(1000.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scrub_progress(-2000.0, 2000.0, 1000.0), 1.0);
        assert!((scrub_progress(-500.0, 2000.0, 1000.0) - 0.5).abs() < 1e-12);
        assert_eq!(scrub_progress(5000.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_normalized_pointer() {
        assert_eq!(normalized_pointer(Point::new(500.0, 250.0), 1000.0, 500.0), Point::new(0.0, 0.0));
        assert_eq!(normalized_pointer(Point::new(0.0, 500.0), 1000.0, 500.0), Point::new(-1.0, 1.0));
        assert_eq!(normalized_pointer(Point::new(3.0, 3.0), 0.0, 0.0), Point::new(0.0, 0.0));
    }
}

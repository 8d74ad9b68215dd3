use super::ease::Ease;
use super::transform::Transform;
use super::tween::Tween;
use crate::observer::{Bounds, Observer, Point};

/// How strongly an element follows the pointer, per pixel of offset from its
/// center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSpec {
    pub translate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub follow: f64,
    pub follow_ease: Ease,
    pub settle: f64,
    pub settle_ease: Ease,
}

impl TiltSpec {
    pub const PROJECT_CARD: TiltSpec = TiltSpec {
        translate: 0.1,
        rotate_x: 0.05,
        rotate_y: 0.05,
        follow: 500.0,
        follow_ease: Ease::PowerOut(2),
        settle: 700.0,
        settle_ease: Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.5,
        },
    };

    pub const CERTIFICATE_CARD: TiltSpec = TiltSpec {
        translate: 0.0,
        rotate_x: -0.1,
        rotate_y: 0.1,
        ..TiltSpec::PROJECT_CARD
    };

    pub fn pose(&self, offset: Point) -> Transform {
        Transform {
            x: offset.x * self.translate,
            y: offset.y * self.translate,
            rotate_x: offset.y * self.rotate_x,
            rotate_y: offset.x * self.rotate_y,
            ..Transform::IDENTITY
        }
    }
}

/// Pointer-relative tilt of a single element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    spec: TiltSpec,
    tween: Tween<Transform>,
}

impl Tilt {
    pub fn new(spec: TiltSpec) -> Self {
        Self {
            spec,
            tween: Tween::settled(Transform::IDENTITY),
        }
    }

    pub fn current(&self, now: f64) -> Transform {
        self.tween.value_at(now)
    }

    pub fn settle_time(&self) -> f64 {
        self.spec.settle
    }
}

impl Observer for Tilt {
    fn pointer_moved(&mut self, pointer: Point, bounds: Bounds, now: f64) {
        let pose = self.spec.pose(bounds.offset_from_center(pointer));
        self.tween
            .retarget(now, pose, self.spec.follow, self.spec.follow_ease);
    }

    fn pointer_left(&mut self, now: f64) {
        self.tween.retarget(
            now,
            Transform::IDENTITY,
            self.spec.settle,
            self.spec.settle_ease,
        );
    }
}

const PRESS_MS: f64 = 100.0;
const PRESS_DEPTH: f64 = 0.05;

/// Scale of a pressed element `since` ms after the press: a short dip and
/// back to rest.
pub fn press_scale(since: f64) -> f64 {
    let ease = Ease::power_out(2);
    if !(0.0..2.0 * PRESS_MS).contains(&since) {
        1.0
    } else if since < PRESS_MS {
        1.0 - PRESS_DEPTH * ease.apply(since / PRESS_MS)
    } else {
        1.0 - PRESS_DEPTH + PRESS_DEPTH * ease.apply((since - PRESS_MS) / PRESS_MS)
    }
}

use super::tween::Lerp;

/// The visual state of an animated element: translation in pixels, rotations
/// in degrees, a uniform scale, opacity and blur radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate: f64,
    pub scale: f64,
    pub opacity: f64,
    pub blur: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        rotate: 0.0,
        scale: 1.0,
        opacity: 1.0,
        blur: 0.0,
    };

    pub const HIDDEN: Transform = Transform {
        opacity: 0.0,
        ..Transform::IDENTITY
    };

    pub fn is_identity(&self) -> bool {
        const EPS: f64 = 1e-9;
        let d = |a: f64, b: f64| (a - b).abs() < EPS;
        d(self.x, 0.0)
            && d(self.y, 0.0)
            && d(self.rotate_x, 0.0)
            && d(self.rotate_y, 0.0)
            && d(self.rotate, 0.0)
            && d(self.scale, 1.0)
            && d(self.opacity, 1.0)
            && d(self.blur, 0.0)
    }

    /// Layers `other` on top of `self`: offsets and rotations add, scale and
    /// opacity multiply.
    pub fn compose(self, other: Transform) -> Transform {
        Transform {
            x: self.x + other.x,
            y: self.y + other.y,
            rotate_x: self.rotate_x + other.rotate_x,
            rotate_y: self.rotate_y + other.rotate_y,
            rotate: self.rotate + other.rotate,
            scale: self.scale * other.scale,
            opacity: self.opacity * other.opacity,
            blur: self.blur + other.blur,
        }
    }

    /// Inline CSS for this state. The identity renders as an empty string so
    /// that elements at rest carry no animation styles at all.
    pub fn to_style(&self) -> String {
        if self.is_identity() {
            return String::new();
        }
        let mut style = format!(
            "transform: perspective(1000px) translate3d({:.2}px, {:.2}px, 0) rotateX({:.2}deg) rotateY({:.2}deg) rotate({:.2}deg) scale({:.4}); opacity: {:.4};",
            self.x,
            self.y,
            self.rotate_x,
            self.rotate_y,
            self.rotate,
            self.scale,
            self.opacity.clamp(0.0, 1.0),
        );
        if self.blur > 0.0 {
            style.push_str(&format!(" filter: blur({:.2}px);", self.blur));
        }
        style
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl Lerp for Transform {
    fn lerp(self, to: Self, t: f64) -> Self {
        Transform {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            rotate_x: self.rotate_x.lerp(to.rotate_x, t),
            rotate_y: self.rotate_y.lerp(to.rotate_y, t),
            rotate: self.rotate.lerp(to.rotate, t),
            scale: self.scale.lerp(to.scale, t),
            opacity: self.opacity.lerp(to.opacity, t),
            blur: self.blur.lerp(to.blur, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_has_no_style() {
        assert!(Transform::IDENTITY.is_identity());
        assert_eq!(Transform::IDENTITY.to_style(), "");
        assert!(!Transform::HIDDEN.is_identity());
    }

    #[test]
    fn test_style_contains_channels() {
        let t = Transform {
            y: 100.0,
            scale: 0.8,
            blur: 5.0,
            opacity: 0.0,
            ..Transform::IDENTITY
        };
        let style = t.to_style();
        assert!(style.contains("translate3d(0.00px, 100.00px, 0)"));
        assert!(style.contains("scale(0.8000)"));
        assert!(style.contains("opacity: 0.0000"));
        assert!(style.contains("blur(5.00px)"));
    }

    #[test]
    fn test_compose_with_identity_is_noop() {
        let t = Transform {
            x: 4.0,
            rotate_y: 12.0,
            scale: 1.05,
            ..Transform::IDENTITY
        };
        assert_eq!(t.compose(Transform::IDENTITY), t);
        assert_eq!(Transform::IDENTITY.compose(t), t);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Transform::HIDDEN.lerp(Transform::IDENTITY, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.scale, 1.0);
    }
}

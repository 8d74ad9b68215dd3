mod ease;
mod reveal;
mod scroll;
mod tilt;
mod timeline;
mod transform;
mod tween;

use serde::{Deserialize, Serialize};

pub use ease::Ease;
pub use reveal::{Reveal, RevealPhase, RevealPolicy, RevealSpec, Stagger};
pub use scroll::{normalized_pointer, scrub_progress, ScrollTo};
pub use tilt::{press_scale, Tilt, TiltSpec};
pub use timeline::{Position, Step, Timeline};
pub use transform::Transform;
pub use tween::{Lerp, Tween};

/// Site-wide animation settings, created once when the app starts and handed
/// to components through context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// When false every animated element renders at rest.
    pub enabled: bool,
    pub nav_scroll_ms: f64,
    pub cta_scroll_ms: f64,
    pub indicator_ms: f64,
    pub indicator_collapse_ms: f64,
    /// Reference line for the active section, as a fraction of the viewport
    /// height.
    pub focus_line: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            nav_scroll_ms: 1200.0,
            cta_scroll_ms: 1500.0,
            indicator_ms: 300.0,
            indicator_collapse_ms: 200.0,
            focus_line: 0.5,
        }
    }
}

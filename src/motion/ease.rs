use std::f64::consts::TAU;

/// Easing curves, named after the curves the page's designs were tuned with.
///
/// `Power(n)` curves use an exponent of `n + 1`, so `Power(1)` is quadratic and
/// `Power(4)` is quintic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    PowerOut(u8),
    PowerInOut(u8),
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    pub const fn power_out(n: u8) -> Self {
        Ease::PowerOut(n)
    }

    pub const fn power_in_out(n: u8) -> Self {
        Ease::PowerInOut(n)
    }

    pub const fn elastic_out(amplitude: f64, period: f64) -> Self {
        Ease::ElasticOut { amplitude, period }
    }

    /// Maps linear progress in `[0, 1]` to eased progress. Input outside the
    /// range is clamped, and the end points are always exact.
    pub fn apply(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Ease::Linear => t,
            Ease::PowerOut(n) => 1.0 - (1.0 - t).powi(n as i32 + 1),
            Ease::PowerInOut(n) => {
                let p = n as i32 + 1;
                if t < 0.5 {
                    (2.0 * t).powi(p) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(p) / 2.0
                }
            }
            Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    let a = amplitude.max(1.0);
    let period = if period > 0.0 { period } else { 0.3 };
    let shift = period / TAU * (1.0 / a).asin();
    a * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
}

//! Maps snake length to the time between simulation ticks.

/// Log-linear interpolation of the tick delay over the snake's length.
///
/// `log10(delay)` moves linearly from `log10(start_delay)` at
/// `start_length` to `log10(end_delay)` at `end_length`. Speed is perceived
/// roughly logarithmically, so this keeps every extra segment feeling like
/// a step up instead of flattening out after the first few.
///
/// Defaults:
///
/// ```rust
/// # use rapid_snake::speed::*;
/// # fn main() { assert_eq!(
/// SpeedCurve {
///     start_delay: 0.1,
///     end_delay: 0.01,
///     start_length: 1,
///     end_length: 25,
///     clamp: true,
/// }
/// # , SpeedCurve::default()); }
/// ```
#[derive(
    Debug, Copy, Clone, smart_default::SmartDefault, serde::Serialize, serde::Deserialize, PartialEq,
)]
#[serde(default)]
pub struct SpeedCurve {
    /// Seconds per tick at `start_length`
    #[default = 0.1]
    pub start_delay: f64,
    /// Seconds per tick at `end_length`
    #[default = 0.01]
    pub end_delay: f64,
    /// Length at which `start_delay` applies
    #[default = 1]
    pub start_length: usize,
    /// Length at which `end_delay` applies
    #[default = 25]
    pub end_length: usize,
    /// Keep the delay between the two bounds for lengths outside
    /// `start_length..=end_length`. Without it the curve extrapolates.
    #[default = true]
    pub clamp: bool,
}

impl SpeedCurve {
    /// Seconds per tick for a snake of `length` segments.
    pub fn delay_for_length(&self, length: usize) -> f64 {
        let span = self.end_length as f64 - self.start_length as f64;
        let mut t = if span == 0.0 {
            1.0
        } else {
            (length as f64 - self.start_length as f64) / span
        };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        let from = self.start_delay.log10();
        let to = self.end_delay.log10();
        10f64.powf(from + (to - from) * t)
    }

    /// Whether the curve can be evaluated to a positive delay.
    pub fn is_valid(&self) -> bool {
        self.start_delay > 0.0
            && self.end_delay > 0.0
            && self.start_delay.is_finite()
            && self.end_delay.is_finite()
            && self.start_length <= self.end_length
    }
}

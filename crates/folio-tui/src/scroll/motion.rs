//! Easing curves and time helpers for smooth scrolling

use std::time::{Duration, Instant};

pub use folio_core::EasingType;

/// Easing math for the config enum
pub trait EasingTypeExt {
    /// Map progress `t` in `[0, 1]` onto the curve, also in `[0, 1]`
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - inv.powi(3),
            EasingType::Quintic => 1.0 - inv.powi(5),
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Fraction of `duration` elapsed since `start`, clamped to `[0, 1]`
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (start.elapsed().as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Row between `from` and `to` at factor `t`
#[inline]
pub fn lerp_rows(from: u16, to: u16, t: f64) -> u16 {
    let from = from as f64;
    (from + (to as f64 - from) * t).round() as u16
}

/// Interval between frames at `fps`, never shorter than 1ms
pub fn frame_interval(fps: u32) -> Duration {
    match fps {
        0 => Duration::from_millis(16),
        fps => Duration::from_millis((1000 / fps as u64).max(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_curves_hit_both_ends() {
        for easing in CURVES {
            assert!(easing.apply(0.0).abs() < 0.001, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at 1", easing);
        }
        assert_eq!(EasingType::None.apply(0.99), 0.0);
        assert_eq!(EasingType::None.apply(1.0), 1.0);
    }

    #[test]
    fn test_curves_never_go_back() {
        for easing in CURVES {
            let samples: Vec<f64> = (0..=20).map(|i| easing.apply(i as f64 / 20.0)).collect();
            assert!(samples.windows(2).all(|w| w[0] <= w[1]), "{:?}", easing);
        }
    }

    #[test]
    fn test_lerp_rows() {
        assert_eq!(lerp_rows(10, 30, 0.0), 10);
        assert_eq!(lerp_rows(10, 30, 0.5), 20);
        assert_eq!(lerp_rows(30, 10, 1.0), 10);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        assert_eq!(progress(Instant::now(), Duration::ZERO), 1.0);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(0), Duration::from_millis(16));
        assert_eq!(frame_interval(60), Duration::from_millis(16));
        assert_eq!(frame_interval(5000), Duration::from_millis(1));
    }
}

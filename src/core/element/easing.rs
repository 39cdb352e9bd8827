//=========================================================================
// Easing Curves
//=========================================================================
//
// The two canned curves used by element show/hide tweens.
//
//   EaseOut      decelerating quadratic, used for hides and movement shows
//   EaseOutBack  overshoot-then-settle, used for scale shows
//
//=========================================================================

//=== Constants ===========================================================

/// Overshoot amount for [`Easing::EaseOutBack`].
const BACK_OVERSHOOT: f32 = 1.70158;

//=== Easing ==============================================================

/// Easing curve applied to a tween's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Fast start, slow end.
    #[default]
    EaseOut,

    /// Overshoots the target slightly, then settles back onto it.
    EaseOutBack,
}

impl Easing {
    /// Maps normalized time to eased progress.
    ///
    /// Input is clamped to `[0, 1]`. Both curves return exactly `0.0` at
    /// `t = 0` and `1.0` at `t = 1`; `EaseOutBack` exceeds `1.0` in between.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutBack => {
                let c3 = BACK_OVERSHOOT + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + BACK_OVERSHOOT * u.powi(2)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn ease_out_endpoints() {
        assert!(Easing::EaseOut.apply(0.0).abs() < EPS);
        assert!((Easing::EaseOut.apply(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn ease_out_decelerates() {
        // Covers more than half the distance in the first half of the time
        assert!((Easing::EaseOut.apply(0.5) - 0.75).abs() < EPS);
    }

    #[test]
    fn ease_out_back_endpoints() {
        assert!(Easing::EaseOutBack.apply(0.0).abs() < 1e-4);
        assert!((Easing::EaseOutBack.apply(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn ease_out_back_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::EaseOutBack.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.05, "EaseOutBack should overshoot, peak was {}", peak);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::EaseOut.apply(-3.0), Easing::EaseOut.apply(0.0));
        assert_eq!(Easing::EaseOutBack.apply(7.0), Easing::EaseOutBack.apply(1.0));
    }

    #[test]
    fn default_is_ease_out() {
        assert_eq!(Easing::default(), Easing::EaseOut);
    }
}

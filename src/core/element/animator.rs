//=========================================================================
// Animator
//=========================================================================
//
// Single-slot eased transform animation.
//
// Architecture:
//   start(tween) ─► kill previous ─► sample `from` ─► active slot
//   advance(dt)  ─► delay ─► ease(t) ─► write transform ─► completion tag
//
// The animator never advances itself; the owning element forwards the
// host's per-frame delta through `advance()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use super::easing::Easing;
use super::transform::Transform;
use crate::core::context::MIN_SPEED_MULTIPLIER;

//=== TweenProperty =======================================================

/// Transform channel a tween writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenProperty {
    Position,
    Scale,
}

impl TweenProperty {
    fn read(self, transform: &dyn Transform) -> Vec3 {
        match self {
            TweenProperty::Position => transform.position(),
            TweenProperty::Scale => transform.scale(),
        }
    }

    fn write(self, transform: &mut dyn Transform, value: Vec3) {
        match self {
            TweenProperty::Position => transform.set_position(value),
            TweenProperty::Scale => transform.set_scale(value),
        }
    }
}

//=== OnComplete ==========================================================

/// Hook reported back to the element when a tween reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnComplete {
    #[default]
    Nothing,

    /// The element's show animation settled; flush deferred control state.
    FinishShow,
}

//=== Tween ===============================================================

/// One eased animation of a single transform property.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    property: TweenProperty,
    from: Vec3,
    to: Vec3,
    duration: f32,
    delay: f32,
    easing: Easing,
    on_complete: OnComplete,
    elapsed: f32,
}

impl Tween {
    /// Creates a tween towards `to`. Negative duration or delay is treated as zero.
    pub fn new(
        property: TweenProperty,
        to: Vec3,
        duration: f32,
        delay: f32,
        easing: Easing,
    ) -> Self {
        Self {
            property,
            from: Vec3::ZERO,
            to,
            duration: duration.max(0.0),
            delay: delay.max(0.0),
            easing,
            on_complete: OnComplete::Nothing,
            elapsed: 0.0,
        }
    }

    /// Divides both duration and delay by `divider`.
    pub fn time_scaled(mut self, divider: f32) -> Self {
        let divider = divider.max(MIN_SPEED_MULTIPLIER);
        self.duration /= divider;
        self.delay /= divider;
        self
    }

    /// Sets the hook reported when the tween completes.
    pub fn on_complete(mut self, on_complete: OnComplete) -> Self {
        self.on_complete = on_complete;
        self
    }

    pub fn property(&self) -> TweenProperty {
        self.property
    }

    pub fn target(&self) -> Vec3 {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Normalized progress, or `None` while still waiting out the delay.
    fn progress(&self) -> Option<f32> {
        let running = self.elapsed - self.delay;
        if running < 0.0 {
            return None;
        }
        if self.duration <= 0.0 {
            return Some(1.0);
        }
        Some((running / self.duration).min(1.0))
    }
}

//=== Animator ============================================================

/// Owns at most one in-flight tween for one element.
#[derive(Debug, Default)]
pub struct Animator {
    active: Option<Tween>,
}

impl Animator {
    pub fn new() -> Self {
        Self { active: None }
    }

    //--- Control ----------------------------------------------------------

    /// Starts `tween`, cancelling whatever was running.
    ///
    /// The start value is sampled from `transform` now, so a tween that
    /// interrupts another picks up from the interrupted pose.
    pub fn start(&mut self, mut tween: Tween, transform: &dyn Transform) {
        self.kill();
        tween.from = tween.property.read(transform);
        tween.elapsed = 0.0;
        self.active = Some(tween);
    }

    /// Cancels the active tween without reporting completion.
    pub fn kill(&mut self) {
        self.active = None;
    }

    //--- Frame Update -----------------------------------------------------

    /// Advances the active tween by `dt` seconds and writes its value.
    ///
    /// Returns the completion hook on the frame the tween reaches its target;
    /// the slot is empty afterwards.
    pub fn advance(&mut self, dt: f32, transform: &mut dyn Transform) -> Option<OnComplete> {
        let tween = self.active.as_mut()?;
        tween.elapsed += dt.max(0.0);

        let t = tween.progress()?;
        if t >= 1.0 {
            tween.property.write(transform, tween.to);
            return self.active.take().map(|done| done.on_complete);
        }

        let value = tween.from.lerp(tween.to, tween.easing.apply(t));
        tween.property.write(transform, value);
        None
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&Tween> {
        self.active.as_ref()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

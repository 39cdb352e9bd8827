//=========================================================================
// Visual Element
//=========================================================================
//
// The atomic show/hide unit: one transform, one animator, one gate.
//
// State machine:
//   Uninitialized ──initialize()──► Hidden | Shown
//   Hidden  ──show()──► Showing ──(tween done)──► Shown
//   Showing | Shown ──hide()──► Hidden
//
// `Hidden` starts the moment hide() runs; the hide tween may still be
// playing. Controls are disabled synchronously on hide and restored only
// when a show tween completes.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::animator::{Animator, OnComplete, Tween, TweenProperty};
use super::control::{ControlId, InteractiveControl};
use super::easing::Easing;
use super::gate::InteractabilityGate;
use super::transform::Transform;

//=== HideMode ============================================================

/// How an element gets out of the way when hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HideMode {
    /// Translate by `offset` from the resting position.
    Movement { offset: Vec3 },

    /// Scale to `target` (usually zero).
    Scale { target: Vec3 },
}

impl Default for HideMode {
    fn default() -> Self {
        Self::Scale { target: Vec3::ZERO }
    }
}

//=== ElementConfig =======================================================

/// Authoring parameters for a [`VisualElement`].
///
/// # Default Values
///
/// - **Hide mode**: scale to zero
/// - **Show duration**: 0.25 s
/// - **Hide duration ratio**: 0.5 (hide takes half as long as show)
/// - **Delays**: none
/// - **Interactability**: managed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementConfig {
    pub hide_mode: HideMode,
    pub show_duration: f32,
    pub hide_duration_ratio: f32,
    pub hide_delay: f32,
    pub show_delay: f32,
    pub ignore_interactability: bool,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            hide_mode: HideMode::default(),
            show_duration: 0.25,
            hide_duration_ratio: 0.5,
            hide_delay: 0.0,
            show_delay: 0.0,
            ignore_interactability: false,
        }
    }
}

impl ElementConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hide_mode(mut self, hide_mode: HideMode) -> Self {
        self.hide_mode = hide_mode;
        self
    }

    /// Negative values clamp to zero.
    pub fn with_show_duration(mut self, seconds: f32) -> Self {
        self.show_duration = seconds.max(0.0);
        self
    }

    /// Fraction of the show duration spent hiding. Negative values clamp to zero.
    pub fn with_hide_duration_ratio(mut self, ratio: f32) -> Self {
        self.hide_duration_ratio = ratio.max(0.0);
        self
    }

    pub fn with_hide_delay(mut self, seconds: f32) -> Self {
        self.hide_delay = seconds.max(0.0);
        self
    }

    pub fn with_show_delay(mut self, seconds: f32) -> Self {
        self.show_delay = seconds.max(0.0);
        self
    }

    /// Leaves the element's controls alone on show and hide.
    pub fn ignoring_interactability(mut self) -> Self {
        self.ignore_interactability = true;
        self
    }

    fn hide_duration(&self) -> f32 {
        self.hide_duration_ratio * self.show_duration
    }
}

//=== ElementPhase ========================================================

/// Where an element is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementPhase {
    /// Constructed but not yet initialized by its group.
    #[default]
    Uninitialized,

    /// Hide started (the hide tween may still be running).
    Hidden,

    /// Show tween in flight; controls still held disabled.
    Showing,

    /// Show tween finished; controls reflect their logical state.
    Shown,
}

//=== VisualElement =======================================================

/// An independently animated UI unit with its own interactive controls.
pub struct VisualElement {
    name: String,
    config: ElementConfig,
    transform: Option<Box<dyn Transform>>,
    pending_controls: Vec<Box<dyn InteractiveControl>>,

    //--- Runtime State ----------------------------------------------------
    initial_position: Vec3,
    initial_scale: Vec3,
    initialized: bool,
    phase: ElementPhase,
    animator: Animator,
    gate: InteractabilityGate,
}

impl VisualElement {
    //--- Construction -----------------------------------------------------

    /// Creates an element backed by `transform`.
    pub fn new(
        name: impl Into<String>,
        config: ElementConfig,
        transform: Box<dyn Transform>,
    ) -> Self {
        Self::build(name.into(), config, Some(transform))
    }

    /// Creates an element with no backing transform. Show and hide are no-ops.
    pub fn detached(name: impl Into<String>, config: ElementConfig) -> Self {
        Self::build(name.into(), config, None)
    }

    fn build(name: String, config: ElementConfig, transform: Option<Box<dyn Transform>>) -> Self {
        Self {
            name,
            config,
            transform,
            pending_controls: Vec::new(),
            initial_position: Vec3::ZERO,
            initial_scale: Vec3::ONE,
            initialized: false,
            phase: ElementPhase::Uninitialized,
            animator: Animator::new(),
            gate: InteractabilityGate::new(),
        }
    }

    /// Adds a control to be captured at initialization.
    pub fn with_control(mut self, control: Box<dyn InteractiveControl>) -> Self {
        self.pending_controls.push(control);
        self
    }

    //--- Lifecycle --------------------------------------------------------

    /// Captures the resting pose and the owned controls.
    ///
    /// With `start_hidden` the element jumps to its hidden pose with no
    /// animation; otherwise it is considered fully shown. Only the first
    /// call has any effect.
    pub fn initialize(&mut self, start_hidden: bool) {
        if self.initialized {
            debug!("Element '{}' already initialized, ignoring", self.name);
            return;
        }
        self.initialized = true;

        if let Some(transform) = self.transform.as_deref() {
            self.initial_position = transform.position();
            self.initial_scale = transform.scale();
        }

        let controls = std::mem::take(&mut self.pending_controls);
        if self.config.ignore_interactability {
            debug!(
                "Element '{}' ignores interactability, releasing {} controls",
                self.name,
                controls.len()
            );
        } else {
            self.gate.capture(controls);
        }

        if start_hidden {
            self.hide(1.0, true);
        } else {
            self.phase = ElementPhase::Shown;
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Starts hiding. `time_divider` scales both duration and delay.
    ///
    /// Ignored until the element has been initialized.
    pub fn hide(&mut self, time_divider: f32, instantaneous: bool) {
        if !self.initialized || self.phase == ElementPhase::Hidden {
            return;
        }
        let Some(transform) = self.transform.as_deref_mut() else {
            return;
        };

        if self.phase == ElementPhase::Shown {
            self.gate.snapshot();
        }
        self.phase = ElementPhase::Hidden;
        self.animator.kill();

        let (property, target) = match self.config.hide_mode {
            HideMode::Movement { offset } => {
                (TweenProperty::Position, self.initial_position + offset)
            }
            HideMode::Scale { target } => (TweenProperty::Scale, target),
        };

        if instantaneous {
            match property {
                TweenProperty::Position => transform.set_position(target),
                TweenProperty::Scale => transform.set_scale(target),
            }
        } else {
            let tween = Tween::new(
                property,
                target,
                self.config.hide_duration(),
                self.config.hide_delay,
                Easing::EaseOut,
            )
            .time_scaled(time_divider);
            self.animator.start(tween, transform);
        }

        self.gate.disable_all();
        debug!("Element '{}' hiding (instant: {})", self.name, instantaneous);
    }

    /// Starts showing. Controls are restored when the tween completes.
    ///
    /// Ignored until the element has been initialized.
    pub fn show(&mut self, time_divider: f32) {
        if !self.initialized || matches!(self.phase, ElementPhase::Showing | ElementPhase::Shown) {
            return;
        }
        let Some(transform) = self.transform.as_deref() else {
            return;
        };

        self.phase = ElementPhase::Showing;

        let (property, target, easing) = match self.config.hide_mode {
            HideMode::Movement { .. } => {
                (TweenProperty::Position, self.initial_position, Easing::EaseOut)
            }
            HideMode::Scale { .. } => {
                (TweenProperty::Scale, self.initial_scale, Easing::EaseOutBack)
            }
        };

        let config = &self.config;
        let tween = Tween::new(property, target, config.show_duration, config.show_delay, easing)
            .time_scaled(time_divider)
            .on_complete(OnComplete::FinishShow);
        self.animator.start(tween, transform);

        debug!("Element '{}' showing", self.name);
    }

    //--- Frame Update -----------------------------------------------------

    /// Advances the active tween and handles its completion hook.
    pub fn update(&mut self, dt: f32) {
        let Some(transform) = self.transform.as_deref_mut() else {
            return;
        };

        if let Some(OnComplete::FinishShow) = self.animator.advance(dt, transform) {
            self.gate.restore();
            self.phase = ElementPhase::Shown;
            debug!("Element '{}' shown", self.name);
        }
    }

    //--- Interactability --------------------------------------------------

    /// Requests a control's enabled state.
    ///
    /// Applied immediately once the element is fully shown; otherwise held
    /// until the next show completes. Controls owned elsewhere are ignored.
    pub fn set_button_interactability(&mut self, control: ControlId, enabled: bool) {
        let settled = self.phase == ElementPhase::Shown;
        if !self.gate.request(control, enabled, settled) {
            trace!("Element '{}' does not own {:?}, ignoring", self.name, control);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ElementConfig {
        &self.config
    }

    pub fn phase(&self) -> ElementPhase {
        self.phase
    }

    /// `true` while showing or shown.
    pub fn is_visible_target(&self) -> bool {
        matches!(self.phase, ElementPhase::Showing | ElementPhase::Shown)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Tween currently in flight, if any.
    pub fn active_tween(&self) -> Option<&Tween> {
        self.animator.active()
    }

    pub fn owns_control(&self, control: ControlId) -> bool {
        self.gate.owns(control)
    }

    /// Live enabled flag of an owned control.
    pub fn control_enabled(&self, control: ControlId) -> Option<bool> {
        self.gate.is_enabled(control)
    }

    /// Logical enabled flag the control will get once shown.
    pub fn saved_interactability(&self, control: ControlId) -> Option<bool> {
        self.gate.saved_state(control)
    }

    pub fn transform(&self) -> Option<&dyn Transform> {
        self.transform.as_deref()
    }

    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    pub fn initial_scale(&self) -> Vec3 {
        self.initial_scale
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::control::Toggle;
    use crate::core::element::transform::LocalTransform;

    const BTN: ControlId = ControlId::new(10);

    fn scale_element() -> VisualElement {
        let config = ElementConfig::new().with_show_duration(1.0);
        VisualElement::new("panel", config, Box::new(LocalTransform::default()))
            .with_control(Box::new(Toggle::new(BTN, true)))
    }

    fn move_element(offset: Vec3) -> VisualElement {
        let config = ElementConfig::new()
            .with_hide_mode(HideMode::Movement { offset })
            .with_show_duration(1.0)
            .with_hide_duration_ratio(0.5);
        VisualElement::new("drawer", config, Box::new(LocalTransform::at(Vec3::new(5.0, 0.0, 0.0))))
            .with_control(Box::new(Toggle::new(BTN, true)))
    }

    fn position(e: &VisualElement) -> Vec3 {
        e.transform().map(|t| t.position()).unwrap_or(Vec3::NAN)
    }

    fn scale(e: &VisualElement) -> Vec3 {
        e.transform().map(|t| t.scale()).unwrap_or(Vec3::NAN)
    }

    //--- Initialization ---------------------------------------------------

    #[test]
    fn initialize_hidden_applies_pose_instantly() {
        let mut e = scale_element();
        e.initialize(true);

        assert_eq!(e.phase(), ElementPhase::Hidden);
        assert_eq!(scale(&e), Vec3::ZERO);
        assert!(!e.is_animating());
        assert_eq!(e.control_enabled(BTN), Some(false));
        assert_eq!(e.saved_interactability(BTN), Some(true));
    }

    #[test]
    fn initialize_shown_leaves_controls_live() {
        let mut e = scale_element();
        e.initialize(false);

        assert_eq!(e.phase(), ElementPhase::Shown);
        assert_eq!(e.control_enabled(BTN), Some(true));
        assert_eq!(e.initial_scale(), Vec3::ONE);
    }

    #[test]
    fn ignoring_interactability_captures_no_controls() {
        let config = ElementConfig::new().ignoring_interactability();
        let mut e = VisualElement::new("label", config, Box::new(LocalTransform::default()))
            .with_control(Box::new(Toggle::new(BTN, true)));
        e.initialize(true);

        assert!(!e.owns_control(BTN));
        assert_eq!(e.control_enabled(BTN), None);
    }

    #[test]
    fn second_initialize_keeps_controls_and_pose() {
        let mut e = scale_element();
        e.initialize(true);
        e.initialize(true);

        assert!(e.owns_control(BTN));
        assert_eq!(e.initial_scale(), Vec3::ONE);

        e.show(1.0);
        e.update(10.0);
        assert_eq!(scale(&e), Vec3::ONE);
        assert_eq!(e.control_enabled(BTN), Some(true));
    }

    #[test]
    fn show_and_hide_before_initialize_are_ignored() {
        let mut e = scale_element();
        e.show(1.0);
        assert_eq!(e.phase(), ElementPhase::Uninitialized);
        assert!(!e.is_animating());

        e.hide(1.0, false);
        assert_eq!(e.phase(), ElementPhase::Uninitialized);
        assert!(!e.is_initialized());
        assert_eq!(scale(&e), Vec3::ONE);
    }

    #[test]
    fn initially_shown_element_applies_requests_at_once() {
        let mut e = scale_element();
        e.initialize(false);

        e.set_button_interactability(BTN, false);
        assert_eq!(e.control_enabled(BTN), Some(false));
        assert_eq!(e.saved_interactability(BTN), Some(true));

        e.set_button_interactability(BTN, true);
        assert_eq!(e.control_enabled(BTN), Some(true));
    }

    //--- Hide -------------------------------------------------------------

    #[test]
    fn hide_disables_controls_before_animation_finishes() {
        let mut e = scale_element();
        e.initialize(false);

        e.hide(1.0, false);
        assert!(e.is_animating());
        assert_eq!(e.control_enabled(BTN), Some(false));
        assert_eq!(scale(&e), Vec3::ONE);
    }

    #[test]
    fn movement_hide_translates_by_offset() {
        let mut e = move_element(Vec3::new(0.0, -100.0, 0.0));
        e.initialize(false);

        e.hide(1.0, false);
        let active = e.animator.active().map(|t| (t.duration(), t.easing()));
        assert_eq!(active, Some((0.5, Easing::EaseOut)));

        e.update(0.5);
        assert_eq!(position(&e), Vec3::new(5.0, -100.0, 0.0));
        assert!(!e.is_animating());
        assert_eq!(e.phase(), ElementPhase::Hidden);
    }

    #[test]
    fn hide_is_noop_when_already_hidden() {
        let mut e = scale_element();
        e.initialize(true);
        e.hide(1.0, false);
        assert!(!e.is_animating());
    }

    #[test]
    fn hide_time_divider_scales_duration_and_delay() {
        let config = ElementConfig::new()
            .with_show_duration(2.0)
            .with_hide_duration_ratio(0.5)
            .with_hide_delay(1.0);
        let mut e = VisualElement::new("x", config, Box::new(LocalTransform::default()));
        e.initialize(false);
        e.hide(2.0, false);

        let timings = e.animator.active().map(|t| (t.duration(), t.delay()));
        assert_eq!(timings, Some((0.5, 0.5)));
    }

    #[test]
    fn hide_from_shown_resnapshots_controls() {
        let mut e = scale_element();
        e.initialize(false);
        e.set_button_interactability(BTN, false);

        e.hide(1.0, false);
        assert_eq!(e.saved_interactability(BTN), Some(false));
    }

    //--- Show -------------------------------------------------------------

    #[test]
    fn show_restores_controls_on_completion() {
        let mut e = scale_element();
        e.initialize(true);

        e.show(1.0);
        assert_eq!(e.phase(), ElementPhase::Showing);
        assert_eq!(e.animator.active().map(Tween::easing), Some(Easing::EaseOutBack));

        e.update(0.5);
        assert_eq!(e.control_enabled(BTN), Some(false));

        e.update(0.5);
        assert_eq!(e.phase(), ElementPhase::Shown);
        assert_eq!(e.control_enabled(BTN), Some(true));
        assert_eq!(scale(&e), Vec3::ONE);
    }

    #[test]
    fn show_is_noop_when_showing_or_shown() {
        let mut e = scale_element();
        e.initialize(false);
        e.show(1.0);
        assert!(!e.is_animating());
        assert_eq!(e.phase(), ElementPhase::Shown);
    }

    #[test]
    fn hide_interrupts_show_without_restoring_controls() {
        let mut e = scale_element();
        e.initialize(true);
        e.show(1.0);
        e.update(0.5);

        e.hide(1.0, false);
        e.update(10.0);
        assert_eq!(e.phase(), ElementPhase::Hidden);
        assert_eq!(e.control_enabled(BTN), Some(false));
        assert_eq!(scale(&e), Vec3::ZERO);
    }

    #[test]
    fn movement_show_returns_to_initial_position() {
        let mut e = move_element(Vec3::new(0.0, 50.0, 0.0));
        e.initialize(true);
        assert_eq!(position(&e), Vec3::new(5.0, 50.0, 0.0));

        e.show(1.0);
        e.update(1.0);
        assert_eq!(position(&e), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(e.phase(), ElementPhase::Shown);
    }

    //--- Interactability --------------------------------------------------

    #[test]
    fn request_while_shown_applies_immediately() {
        let mut e = scale_element();
        e.initialize(false);

        e.set_button_interactability(BTN, false);
        assert_eq!(e.control_enabled(BTN), Some(false));
    }

    #[test]
    fn request_while_showing_waits_for_completion() {
        let mut e = scale_element();
        e.initialize(true);
        e.show(1.0);

        e.set_button_interactability(BTN, false);
        e.set_button_interactability(BTN, true);
        assert_eq!(e.control_enabled(BTN), Some(false));

        e.update(1.0);
        assert_eq!(e.control_enabled(BTN), Some(true));
    }

    #[test]
    fn request_while_hidden_survives_hide_show_cycle() {
        let mut e = scale_element();
        e.initialize(false);
        e.hide(1.0, false);

        e.set_button_interactability(BTN, false);
        e.show(1.0);
        e.update(1.0);
        assert_eq!(e.control_enabled(BTN), Some(false));
    }

    //--- Detached ---------------------------------------------------------

    #[test]
    fn detached_element_ignores_show_and_hide() {
        let mut e = VisualElement::detached("ghost", ElementConfig::new())
            .with_control(Box::new(Toggle::new(BTN, true)));
        e.initialize(true);

        assert_eq!(e.phase(), ElementPhase::Uninitialized);
        assert_eq!(e.control_enabled(BTN), Some(true));

        e.show(1.0);
        assert_eq!(e.phase(), ElementPhase::Uninitialized);
        e.update(1.0);
    }
}

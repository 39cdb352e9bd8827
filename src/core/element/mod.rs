//=========================================================================
// Element System
//=========================================================================
//
// Per-element show/hide animation and interactability arbitration.
//
// Architecture:
//   VisualElement
//     ├─ transform: Box<dyn Transform>      (host scene graph)
//     ├─ animator:  Animator                (single active Tween)
//     └─ gate:      InteractabilityGate     (controls + saved flags)
//
// Flow:
//   hide()/show() → Animator::start() → update(dt) → OnComplete → gate
//
//=========================================================================

//=== Module Declarations =================================================

mod animator;
mod control;
mod easing;
mod gate;
mod transform;
mod visual_element;

//=== Public API ==========================================================

pub use animator::{Animator, OnComplete, Tween, TweenProperty};
pub use control::{ControlId, InteractiveControl, Toggle};
pub use easing::Easing;
pub use gate::InteractabilityGate;
pub use transform::{LocalTransform, Transform};
pub use visual_element::{ElementConfig, ElementPhase, HideMode, VisualElement};

//=========================================================================
// Test Support
//=========================================================================
//
// Shared fixtures for unit tests across the context and element systems.
//
//=========================================================================

use crate::core::context::ContextKey;
use crate::core::element::{ControlId, ElementConfig, LocalTransform, Toggle, VisualElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Ctx {
    A,
    B,
    C,
}

impl ContextKey for Ctx {}

pub(crate) const BUTTON: ControlId = ControlId::new(1);
pub(crate) const OTHER_BUTTON: ControlId = ControlId::new(2);

/// Scale-mode element with a one second show and one enabled control.
pub(crate) fn panel(name: &str, control: ControlId) -> VisualElement {
    let config = ElementConfig::new().with_show_duration(1.0);
    VisualElement::new(name, config, Box::new(LocalTransform::default()))
        .with_control(Box::new(Toggle::new(control, true)))
}

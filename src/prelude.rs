//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_ui_context::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Context system
pub use crate::core::context::{
    ContextChanged, ContextGroup, ContextKey, ContextManager, ContextManagerBuilder,
    ContextRegistry, ManagerId, SpeedMultiplier,
};

// Element system
pub use crate::core::element::{
    ControlId, ElementConfig, ElementPhase, HideMode, InteractiveControl, LocalTransform,
    Toggle, Transform, VisualElement,
};

// Errors
pub use crate::core::ContextError;

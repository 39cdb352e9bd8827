//=========================================================================
// Context System
//=========================================================================
//
// Context-driven visibility for UI groups.
//
// Architecture:
//   ContextRegistry (shared: speed multiplier, main slot, global events)
//     └─ ContextManager (one per UI root)
//          ├─ current / previous / history
//          └─ groups: Vec<ContextGroup>
//               └─ elements: Vec<VisualElement>
//
// Flow:
//   change_context() → on_context_changed() → show()/hide() → ContextChanged
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Module Declarations =================================================

mod event;
mod group;
mod manager;
mod registry;
mod speed;

//=== Public API ==========================================================

pub use event::ContextChanged;
pub use group::ContextGroup;
pub use manager::{ContextManager, ContextManagerBuilder};
pub use registry::{ContextRegistry, ManagerId};
pub use speed::{SpeedMultiplier, MIN_SPEED_MULTIPLIER};

//=== Context Key Trait ===================================================

/// Marker trait for context identifiers.
///
/// A context names an application state (main menu, inventory, dialogue)
/// that decides which UI groups are visible. Typically implemented by
/// game-defined enums. The absence of a context is `None`.
///
/// ```
/// # use aetheric_ui_context::prelude::*;
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Screen { Title, Inventory }
///
/// impl ContextKey for Screen {}
/// ```
pub trait ContextKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

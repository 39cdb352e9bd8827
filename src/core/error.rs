//=========================================================================
// Error Types
//=========================================================================
//
// Only main-manager registration can fail. Everything else in the
// context system contains bad input through no-ops and clamping.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::context::ManagerId;

//=== ContextError ========================================================

/// Errors reported by the context system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// Another manager already holds the registry's main slot.
    #[error("manager {requested:?} cannot become main: {existing:?} is already main")]
    MainAlreadyRegistered {
        existing: ManagerId,
        requested: ManagerId,
    },
}

//=========================================================================
// Core Systems
//=========================================================================
//
// UI context subsystems.
//
// Architecture:
//   context  managers, groups, registry, events, speed multiplier
//   element  visual elements, animator, interactability gate,
//            host transform and control boundaries
//
// Everything here runs on the caller's thread; the only asynchrony is
// tween progress, driven by the host calling `update(dt)` each frame.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod context;
pub mod element;
mod error;

#[cfg(test)]
pub(crate) mod test_support;

//=== Public API ==========================================================

pub use error::ContextError;

//=========================================================================
// Interactability Gate
//=========================================================================
//
// Keeps interactive controls from accepting input while their element
// is hidden or still animating in.
//
// Architecture:
//   controls: Vec<Box<dyn InteractiveControl>>   live widgets
//   saved:    HashMap<ControlId, bool>           logical enabled state
//
// Flow:
//   hide  → snapshot() (if settled) → disable_all()
//   show  → ...animation... → restore()
//   request(id, on, settled) → live control (settled) | saved (otherwise)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::trace;

//=== Internal Dependencies ===============================================

use super::control::{ControlId, InteractiveControl};

//=== InteractabilityGate =================================================

/// Arbitrates the enabled flag of every control owned by one element.
///
/// The saved map holds each control's logical state: what it should be
/// once the element is fully shown. The live flag is only written from the
/// saved map when a show completes, or directly when the element is settled.
#[derive(Default)]
pub struct InteractabilityGate {
    controls: Vec<Box<dyn InteractiveControl>>,
    saved: HashMap<ControlId, bool>,
}

impl InteractabilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Capture ----------------------------------------------------------

    /// Takes ownership of `controls` and snapshots their current flags.
    pub fn capture(&mut self, controls: Vec<Box<dyn InteractiveControl>>) {
        self.controls = controls;
        self.saved.clear();
        self.snapshot();
    }

    //--- Transitions ------------------------------------------------------

    /// Records every control's live flag as its logical state.
    pub fn snapshot(&mut self) {
        for control in &self.controls {
            self.saved.insert(control.id(), control.is_enabled());
        }
    }

    /// Disables every control without touching the saved state.
    pub fn disable_all(&mut self) {
        for control in &mut self.controls {
            control.set_enabled(false);
        }
    }

    /// Writes the saved state back onto the live controls.
    pub fn restore(&mut self) {
        for control in &mut self.controls {
            if let Some(&enabled) = self.saved.get(&control.id()) {
                control.set_enabled(enabled);
            }
        }
    }

    //--- Requests ---------------------------------------------------------

    /// Applies an external interactability request.
    ///
    /// When `settled` the live control changes now; otherwise only the saved
    /// state changes and the request takes effect at the next `restore()`.
    /// Returns `false` if no owned control has `id`.
    pub fn request(&mut self, id: ControlId, enabled: bool, settled: bool) -> bool {
        let Some(control) = self.controls.iter_mut().find(|c| c.id() == id) else {
            return false;
        };

        if settled {
            control.set_enabled(enabled);
        } else {
            trace!("Deferring {:?} -> {} until show completes", id, enabled);
            self.saved.insert(id, enabled);
        }
        true
    }

    //--- Queries ----------------------------------------------------------

    pub fn owns(&self, id: ControlId) -> bool {
        self.controls.iter().any(|c| c.id() == id)
    }

    /// Live enabled flag of an owned control.
    pub fn is_enabled(&self, id: ControlId) -> Option<bool> {
        self.controls
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.is_enabled())
    }

    /// Logical (saved) enabled flag of an owned control.
    pub fn saved_state(&self, id: ControlId) -> Option<bool> {
        self.saved.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::control::Toggle;

    const A: ControlId = ControlId::new(1);
    const B: ControlId = ControlId::new(2);

    fn gate() -> InteractabilityGate {
        let mut gate = InteractabilityGate::new();
        gate.capture(vec![Box::new(Toggle::new(A, true)), Box::new(Toggle::new(B, false))]);
        gate
    }

    #[test]
    fn capture_snapshots_live_flags() {
        let gate = gate();
        assert_eq!(gate.len(), 2);
        assert_eq!(gate.saved_state(A), Some(true));
        assert_eq!(gate.saved_state(B), Some(false));
    }

    #[test]
    fn disable_all_keeps_saved_state() {
        let mut gate = gate();
        gate.disable_all();

        assert_eq!(gate.is_enabled(A), Some(false));
        assert_eq!(gate.saved_state(A), Some(true));
    }

    #[test]
    fn restore_reapplies_saved_state() {
        let mut gate = gate();
        gate.disable_all();
        gate.restore();

        assert_eq!(gate.is_enabled(A), Some(true));
        assert_eq!(gate.is_enabled(B), Some(false));
    }

    #[test]
    fn settled_request_applies_immediately() {
        let mut gate = gate();
        assert!(gate.request(A, false, true));
        assert_eq!(gate.is_enabled(A), Some(false));
    }

    #[test]
    fn unsettled_request_is_deferred_last_write_wins() {
        let mut gate = gate();
        gate.disable_all();

        assert!(gate.request(B, true, false));
        assert!(gate.request(B, false, false));
        assert!(gate.request(B, true, false));
        assert_eq!(gate.is_enabled(B), Some(false));

        gate.restore();
        assert_eq!(gate.is_enabled(B), Some(true));
    }

    #[test]
    fn unknown_control_is_ignored() {
        let mut gate = gate();
        let stranger = ControlId::new(99);

        assert!(!gate.request(stranger, true, true));
        assert!(!gate.owns(stranger));
        assert_eq!(gate.saved_state(stranger), None);
    }

    #[test]
    fn empty_gate_owns_nothing() {
        let mut gate = InteractabilityGate::new();
        assert!(gate.is_empty());
        gate.disable_all();
        gate.restore();
        assert!(!gate.request(A, true, true));
    }
}

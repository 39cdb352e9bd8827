//=========================================================================
// Context Group
//=========================================================================
//
// Binds a set of contexts to a set of visual elements. The elements are
// visible exactly while the current context is a member of the set.
//
// Transition table (was = previous ∈ set, is = current ∈ set):
//
//   was  is   action
//   ───  ───  ──────
//    T    F   hide all
//    F    T   show all
//    T    T   none
//    F    F   none
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::debug;

//=== Internal Dependencies ===============================================

use super::speed::SpeedMultiplier;
use super::ContextKey;
use crate::core::element::{ControlId, VisualElement};

//=== ContextGroup ========================================================

/// Elements that share one visibility rule.
///
/// `None` stands for "no context" and can be added as a member with
/// [`with_no_context`](Self::with_no_context).
pub struct ContextGroup<C: ContextKey> {
    contexts: HashSet<Option<C>>,
    elements: Vec<VisualElement>,
    use_speed_multiplier: bool,
}

impl<C: ContextKey> ContextGroup<C> {
    /// Creates an empty group that honours the speed multiplier.
    pub fn new() -> Self {
        Self {
            contexts: HashSet::new(),
            elements: Vec::new(),
            use_speed_multiplier: true,
        }
    }

    //--- Configuration ----------------------------------------------------

    pub fn with_context(mut self, context: C) -> Self {
        self.contexts.insert(Some(context));
        self
    }

    /// Makes the group visible when no context is active.
    pub fn with_no_context(mut self) -> Self {
        self.contexts.insert(None);
        self
    }

    pub fn with_element(mut self, element: VisualElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn use_speed_multiplier(mut self, enabled: bool) -> Self {
        self.use_speed_multiplier = enabled;
        self
    }

    //--- Lifecycle --------------------------------------------------------

    /// Initializes every element, hidden unless `current` is a member.
    pub fn initialize(&mut self, current: Option<C>) {
        let hidden = !self.contains(current);
        for element in &mut self.elements {
            element.initialize(hidden);
        }
    }

    /// Shows or hides the group's elements for a context change.
    pub fn on_context_changed(
        &mut self,
        previous: Option<C>,
        current: Option<C>,
        speed: &SpeedMultiplier,
    ) {
        let was = self.contains(previous);
        let is = self.contains(current);
        let divider = self.time_divider(speed);

        match (was, is) {
            (true, false) => {
                debug!("Hiding group {:?} ({} elements)", self.contexts, self.elements.len());
                for element in &mut self.elements {
                    element.hide(divider, false);
                }
            }
            (false, true) => {
                debug!("Showing group {:?} ({} elements)", self.contexts, self.elements.len());
                for element in &mut self.elements {
                    element.show(divider);
                }
            }
            _ => {}
        }
    }

    /// Forwards a per-frame delta to every element.
    pub fn update(&mut self, dt: f32) {
        for element in &mut self.elements {
            element.update(dt);
        }
    }

    pub fn set_button_interactability(&mut self, control: ControlId, enabled: bool) {
        for element in &mut self.elements {
            element.set_button_interactability(control, enabled);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, context: Option<C>) -> bool {
        self.contexts.contains(&context)
    }

    pub fn elements(&self) -> &[VisualElement] {
        &self.elements
    }

    pub fn element(&self, name: &str) -> Option<&VisualElement> {
        self.elements.iter().find(|e| e.name() == name)
    }

    pub fn uses_speed_multiplier(&self) -> bool {
        self.use_speed_multiplier
    }

    fn time_divider(&self, speed: &SpeedMultiplier) -> f32 {
        if self.use_speed_multiplier {
            speed.get()
        } else {
            1.0
        }
    }
}

impl<C: ContextKey> Default for ContextGroup<C> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

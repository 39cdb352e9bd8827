//=========================================================================
// Context Manager
//=========================================================================
//
// Root of one UI hierarchy. Owns the context groups and switches which
// of them is visible.
//
// Flow:
//   change_context(new)
//     ├─ history.push(previous)
//     ├─ previous = current, current = new
//     ├─ ContextGroup::on_context_changed() for every group, in order
//     └─ publish ContextChanged (instance, then registry if main)
//
// change_context() returns as soon as tweens are dispatched; update(dt)
// advances them on later frames.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::event::{ContextChanged, Subscribers};
use super::group::ContextGroup;
use super::registry::{ContextRegistry, ManagerId};
use super::ContextKey;
use crate::core::element::ControlId;
use crate::core::ContextError;

//=== ContextManagerBuilder ===============================================

/// Builder for configuring and constructing a [`ContextManager`].
///
/// # Default Values
///
/// - **Groups**: none
/// - **Start context**: none (everything hidden after `initialize()`)
/// - **Main**: no
pub struct ContextManagerBuilder<C: ContextKey> {
    registry: ContextRegistry<C>,
    groups: Vec<ContextGroup<C>>,
    start_context: Option<C>,
    is_main: bool,
}

impl<C: ContextKey> ContextManagerBuilder<C> {
    pub fn new(registry: ContextRegistry<C>) -> Self {
        Self {
            registry,
            groups: Vec::new(),
            start_context: None,
            is_main: false,
        }
    }

    /// Appends a group. Groups are notified in the order they were added.
    pub fn with_group(mut self, group: ContextGroup<C>) -> Self {
        self.groups.push(group);
        self
    }

    /// Context entered by [`ContextManager::initialize`].
    pub fn with_start_context(mut self, context: C) -> Self {
        self.start_context = Some(context);
        self
    }

    /// Registers the manager as the registry's main manager on build.
    pub fn as_main(mut self) -> Self {
        self.is_main = true;
        self
    }

    /// Builds the manager.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::MainAlreadyRegistered`] if [`as_main`](Self::as_main)
    /// was requested while another manager is main.
    pub fn build(self) -> Result<ContextManager<C>, ContextError> {
        let id = ManagerId::next();
        if self.is_main {
            self.registry.claim_main(id)?;
        }

        info!(
            "Built context manager {:?} ({} groups, main: {})",
            id,
            self.groups.len(),
            self.is_main
        );

        Ok(ContextManager {
            id,
            registry: self.registry,
            groups: self.groups,
            start_context: self.start_context,
            is_main: self.is_main,
            current: None,
            previous: None,
            history: Vec::new(),
            subscribers: Subscribers::new(),
        })
    }
}

//=== ContextManager ======================================================

/// Switches the active context of one UI root.
pub struct ContextManager<C: ContextKey> {
    id: ManagerId,
    registry: ContextRegistry<C>,
    groups: Vec<ContextGroup<C>>,
    start_context: Option<C>,
    is_main: bool,

    //--- Context State ----------------------------------------------------
    current: Option<C>,
    previous: Option<C>,
    history: Vec<Option<C>>,
    subscribers: Subscribers<C>,
}

impl<C: ContextKey> ContextManager<C> {
    //--- Lifecycle --------------------------------------------------------

    /// Applies the initial visibility of every group without animation,
    /// then enters the start context if one was configured.
    pub fn initialize(&mut self) {
        debug!("Initializing context manager {:?} in context {:?}", self.id, self.current);

        let current = self.current;
        for group in &mut self.groups {
            group.initialize(current);
        }

        if let Some(start) = self.start_context {
            self.change_context(start);
        }
    }

    //--- Context Switching ------------------------------------------------

    /// Switches to `context`. Does nothing if it is already current.
    pub fn change_context(&mut self, context: impl Into<Option<C>>) {
        let context = context.into();
        if context == self.current {
            debug!("Already in context {:?}, ignoring change", context);
            return;
        }

        self.history.push(self.previous);
        self.previous = self.current;
        self.current = context;

        debug!("Context {:?} -> {:?}", self.previous, self.current);

        let (previous, current) = (self.previous, self.current);
        let speed = self.registry.speed_multiplier();
        for group in &mut self.groups {
            group.on_context_changed(previous, current, speed);
        }

        let event = ContextChanged { previous, current };
        self.subscribers.publish(event);
        if self.is_main {
            self.registry.publish(event);
        }
    }

    /// Returns to the previous context.
    ///
    /// Does nothing if no change has been made yet. The target is the
    /// context active before the last change, so repeated calls alternate
    /// between the two most recent contexts.
    pub fn go_to_previous_context(&mut self) {
        if self.history.is_empty() {
            debug!("No context history, ignoring go_to_previous_context");
            return;
        }

        self.change_context(self.previous);
        let _ = self.history.pop();
    }

    pub fn is_in_context(&self, context: impl Into<Option<C>>) -> bool {
        context.into() == self.current
    }

    //--- Interactability --------------------------------------------------

    /// Requests a control's enabled state from whichever element owns it.
    pub fn set_button_interactability(&mut self, control: ControlId, enabled: bool) {
        for group in &mut self.groups {
            group.set_button_interactability(control, enabled);
        }
    }

    //--- Frame Update -----------------------------------------------------

    /// Advances all element animations by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for group in &mut self.groups {
            group.update(dt);
        }
    }

    //--- Events -----------------------------------------------------------

    /// Opens a channel receiving this manager's context changes.
    pub fn subscribe(&mut self) -> Receiver<ContextChanged<C>> {
        let rx = self.subscribers.subscribe();
        debug!("Manager {:?} now has {} subscribers", self.id, self.subscribers.len());
        rx
    }

    //--- Speed ------------------------------------------------------------

    pub fn speed_multiplier(&self) -> f32 {
        self.registry.speed_multiplier().get()
    }

    /// Sets the registry-wide multiplier, clamped to at least 0.01.
    pub fn set_speed_multiplier(&self, value: f32) {
        if value <= 0.0 {
            warn!("Speed multiplier {} out of range, clamping", value);
        }
        self.registry.speed_multiplier().set(value);
    }

    //--- Queries ----------------------------------------------------------

    pub fn id(&self) -> ManagerId {
        self.id
    }

    pub fn is_main(&self) -> bool {
        self.is_main
    }

    pub fn current_context(&self) -> Option<C> {
        self.current
    }

    pub fn previous_context(&self) -> Option<C> {
        self.previous
    }

    /// Saved previous contexts, oldest first.
    pub fn history(&self) -> &[Option<C>] {
        &self.history
    }

    pub fn groups(&self) -> &[ContextGroup<C>] {
        &self.groups
    }

    pub fn registry(&self) -> &ContextRegistry<C> {
        &self.registry
    }

    /// `true` while any element has a tween in flight.
    pub fn is_transitioning(&self) -> bool {
        self.groups
            .iter()
            .flat_map(|g| g.elements())
            .any(|e| e.is_animating())
    }

    /// Live enabled flag of `control`, from the first element owning it.
    pub fn control_enabled(&self, control: ControlId) -> Option<bool> {
        self.groups
            .iter()
            .flat_map(|g| g.elements())
            .find_map(|e| e.control_enabled(control))
    }
}

impl<C: ContextKey> Drop for ContextManager<C> {
    fn drop(&mut self) {
        if self.is_main {
            self.registry.release_main(self.id);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

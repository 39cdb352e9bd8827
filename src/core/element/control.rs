//=========================================================================
// Interactive Controls
//=========================================================================
//
// Boundary to the host widget layer. A control is anything with an
// "enabled" flag the user can click through (buttons, toggles, sliders).
//
//=========================================================================

//=== ControlId ===========================================================

/// Stable identifier for an interactive control.
///
/// Used in place of live widget references so that interactability
/// requests can be routed without aliasing the host's widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub u64);

impl ControlId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

//=== InteractiveControl Trait ============================================

/// A host widget whose enabled flag is driven by its owning element.
pub trait InteractiveControl: Send {
    /// Identifier the control is addressed by.
    fn id(&self) -> ControlId;

    /// Whether the control currently accepts input.
    fn is_enabled(&self) -> bool;

    /// Enables or disables input on the control.
    fn set_enabled(&mut self, enabled: bool);
}

//=== Toggle ==============================================================

/// Plain-data control for hosts without a widget layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    id: ControlId,
    enabled: bool,
}

impl Toggle {
    pub fn new(id: ControlId, enabled: bool) -> Self {
        Self { id, enabled }
    }
}

impl InteractiveControl for Toggle {
    fn id(&self) -> ControlId {
        self.id
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

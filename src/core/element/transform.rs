//=========================================================================
// Transform Provider
//=========================================================================
//
// Boundary to the host scene graph. Elements only read and write local
// position and scale; parenting, rotation and rendering stay with the host.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Transform Trait =====================================================

/// Local transform of one UI element, owned by the host engine.
///
/// Implementations typically forward to a scene-graph node. The element
/// animates it by writing interpolated values every frame.
pub trait Transform: Send {
    /// Current local position.
    fn position(&self) -> Vec3;

    /// Overwrites the local position.
    fn set_position(&mut self, position: Vec3);

    /// Current local scale.
    fn scale(&self) -> Vec3;

    /// Overwrites the local scale.
    fn set_scale(&mut self, scale: Vec3);
}

//=== LocalTransform ======================================================

/// Plain-data transform for hosts without a scene graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub position: Vec3,
    pub scale: Vec3,
}

impl LocalTransform {
    /// Transform at `position` with unit scale.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: Vec3::ONE,
        }
    }
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl Transform for LocalTransform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

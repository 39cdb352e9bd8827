//=========================================================================
// Speed Multiplier
//=========================================================================
//
// Shared animation speed scalar. One value per registry, read by
// elements only when a tween starts.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

//=== Constants ===========================================================

/// Smallest speed multiplier that can be stored.
pub const MIN_SPEED_MULTIPLIER: f32 = 0.01;

//=== SpeedMultiplier =====================================================

/// Cloneable handle to a shared animation speed multiplier.
///
/// All clones observe the same value. Writes affect tweens started
/// afterwards; running tweens keep the timing they were created with.
#[derive(Debug, Clone)]
pub struct SpeedMultiplier {
    bits: Arc<AtomicU32>,
}

impl SpeedMultiplier {
    /// Creates a multiplier set to `1.0`.
    pub fn new() -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(1.0f32.to_bits())),
        }
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Stores `max(0.01, value)`. NaN is stored as the minimum.
    pub fn set(&self, value: f32) {
        let clamped = value.max(MIN_SPEED_MULTIPLIER);
        self.bits.store(clamped.to_bits(), Ordering::Relaxed);
    }
}

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

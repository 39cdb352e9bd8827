//=========================================================================
// Context Registry
//=========================================================================
//
// Application-owned service shared by every context manager.
//
// Architecture:
//   ContextRegistry (Arc, cloneable)
//     ├─ speed:       SpeedMultiplier
//     ├─ main:        Mutex<Option<ManagerId>>
//     └─ subscribers: Mutex<Subscribers<C>>      (main-manager events)
//
// At most one manager holds the main slot. Its context changes are
// republished to the registry's subscribers.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Receiver;
use log::{info, warn};
use parking_lot::Mutex;

//=== Internal Dependencies ===============================================

use super::event::{ContextChanged, Subscribers};
use super::speed::SpeedMultiplier;
use super::ContextKey;
use crate::core::ContextError;

//=== ManagerId ===========================================================

/// Process-unique identifier of a context manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManagerId(u64);

impl ManagerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

//=== ContextRegistry =====================================================

struct RegistryInner<C: ContextKey> {
    speed: SpeedMultiplier,
    main: Mutex<Option<ManagerId>>,
    subscribers: Mutex<Subscribers<C>>,
}

/// Shared services for all context managers of one application.
///
/// Create one at the application root and hand clones to every
/// [`ContextManagerBuilder`](super::ContextManagerBuilder).
pub struct ContextRegistry<C: ContextKey> {
    inner: Arc<RegistryInner<C>>,
}

impl<C: ContextKey> Clone for ContextRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: ContextKey> ContextRegistry<C> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                speed: SpeedMultiplier::new(),
                main: Mutex::new(None),
                subscribers: Mutex::new(Subscribers::new()),
            }),
        }
    }

    //--- Main Slot --------------------------------------------------------

    /// Makes `id` the main manager.
    ///
    /// Fails if a different manager already holds the slot; the slot is
    /// left unchanged. Claiming twice with the same id succeeds.
    pub fn claim_main(&self, id: ManagerId) -> Result<(), ContextError> {
        let mut main = self.inner.main.lock();
        match *main {
            Some(existing) if existing != id => {
                warn!("Manager {:?} tried to become main while {:?} is main", id, existing);
                Err(ContextError::MainAlreadyRegistered {
                    existing,
                    requested: id,
                })
            }
            _ => {
                info!("Manager {:?} is now the main context manager", id);
                *main = Some(id);
                Ok(())
            }
        }
    }

    /// Clears the main slot if `id` holds it.
    pub fn release_main(&self, id: ManagerId) {
        let mut main = self.inner.main.lock();
        if *main == Some(id) {
            info!("Main context manager {:?} released", id);
            *main = None;
        }
    }

    pub fn main_manager(&self) -> Option<ManagerId> {
        *self.inner.main.lock()
    }

    //--- Events -----------------------------------------------------------

    /// Opens a channel receiving every change made by the main manager.
    pub fn subscribe(&self) -> Receiver<ContextChanged<C>> {
        self.inner.subscribers.lock().subscribe()
    }

    pub(crate) fn publish(&self, event: ContextChanged<C>) {
        self.inner.subscribers.lock().publish(event);
    }

    //--- Speed ------------------------------------------------------------

    /// Handle to the shared speed multiplier.
    pub fn speed_multiplier(&self) -> &SpeedMultiplier {
        &self.inner.speed
    }
}

impl<C: ContextKey> Default for ContextRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

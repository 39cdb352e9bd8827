//=========================================================================
// Context Change Events
//=========================================================================
//
// Notification fan-out for context changes.
//
// Architecture:
//   change_context() → Subscribers::publish() → Vec<Sender<ContextChanged>>
//                                                   ↓
//   UI / game logic ←──────────────────────── Receiver::try_recv()
//
// Each subscriber owns its own unbounded channel, so every listener sees
// every event. Disconnected receivers are pruned on the next publish.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};

//=== Internal Dependencies ===============================================

use super::ContextKey;

//=== ContextChanged ======================================================

/// Emitted after every successful context change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextChanged<C: ContextKey> {
    pub previous: Option<C>,
    pub current: Option<C>,
}

//=== Subscribers =========================================================

/// List of live event channels.
pub(crate) struct Subscribers<C: ContextKey> {
    senders: Vec<Sender<ContextChanged<C>>>,
}

impl<C: ContextKey> Subscribers<C> {
    pub(crate) fn new() -> Self {
        Self { senders: Vec::new() }
    }

    /// Opens a new channel and returns its receiving end.
    pub(crate) fn subscribe(&mut self) -> Receiver<ContextChanged<C>> {
        let (tx, rx) = unbounded();
        self.senders.push(tx);
        rx
    }

    /// Sends `event` to every live subscriber.
    pub(crate) fn publish(&mut self, event: ContextChanged<C>) {
        self.senders.retain(|tx| tx.send(event).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

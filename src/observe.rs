//! Change notification for UI collaborators.
//!
//! Each subscriber gets its own unbounded crossbeam channel. Notifications are
//! sent synchronously from the mutating call; receivers that have been dropped
//! are pruned on the next send.

use crossbeam_channel::{Receiver, Sender, unbounded};
use parking_lot::Mutex;

/// A list of subscribers interested in snapshots of `T`.
pub struct Observers<T> {
    senders: Mutex<Vec<Sender<T>>>,
}

impl<T: Clone> Observers<T> {
    pub fn new() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> Receiver<T> {
        let (tx, rx) = unbounded();
        self.senders.lock().push(tx);
        rx
    }

    /// Send `value` to every live subscriber.
    pub fn notify(&self, value: T) {
        let mut senders = self.senders.lock();
        senders.retain(|tx| tx.send(value.clone()).is_ok());
        tracing::trace!(subscribers = senders.len(), "Notified observers");
    }

    /// Number of live subscribers as of the last notification.
    pub fn len(&self) -> usize {
        self.senders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Signal/slot system for Ember UI.
//!
//! Signals are the change-notification backbone of the toolkit. An object
//! exposes a `Signal` field per event it reports; interested parties connect
//! closures (slots) and are invoked synchronously whenever the signal is
//! emitted.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - the signal type itself
//! - [`ConnectionId`] - handle returned when connecting a slot
//! - [`ConnectionGuard`] - RAII handle that disconnects when dropped
//!
//! # Dispatch Model
//!
//! Emission is synchronous: every connected slot runs inside the emitting
//! call's stack frame, and all slots have run before `emit` returns. There
//! is no queuing and no cross-thread hand-off; widgets live on the thread
//! that drives them.
//!
//! # Re-entrancy
//!
//! Slots run without any signal-internal lock held, so a slot may freely
//! call back into the emitting object: connect or disconnect slots, emit
//! the same signal again, or mutate the property that triggered the
//! emission. The connection list is snapshotted at the start of each
//! emission - a slot connected during an emission is first invoked by the
//! *next* emission, and a slot disconnected during an emission may still
//! receive the in-flight one.
//!
//! # Example
//!
//! ```
//! use ember_ui_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let id = text_changed.connect(|text| {
//!     println!("text is now {text:?}");
//! });
//!
//! text_changed.emit("hello".to_string());
//! text_changed.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot to invoke (Arc-wrapped so emission can run it lock-free).
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal with synchronous slot dispatch.
///
/// # Type Parameter
///
/// - `Args`: the argument type passed to connected slots. Use `()` for
///   signals with no payload, or a tuple for several values.
///
/// # Thread Safety
///
/// `Signal<Args>` is `Send + Sync`; the toolkit itself only ever emits from
/// the UI thread, but an embedding engine may move widget ownership across
/// threads between updates.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether emission is temporarily suppressed.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a [`ConnectionId`] that can be used to disconnect the slot
    /// later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Connect a slot and receive an RAII guard that disconnects on drop.
    ///
    /// Useful when the observer has a shorter lifetime than the signal's
    /// owner and must not outlive its borrow of captured state.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            signal: self,
            id: Some(self.connect(slot)),
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block or unblock signal emission.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful during batch
    /// updates to suppress cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking every connected slot synchronously.
    ///
    /// The connection list is snapshotted before any slot runs; slots are
    /// then invoked with no internal lock held, so they may re-enter this
    /// signal (or the object emitting it) freely. All slots have run when
    /// `emit` returns.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "ember_ui_core::signal", "signal blocked, skipping emit");
            return;
        }

        // Snapshot under the lock, invoke outside it. Slots may connect,
        // disconnect, or emit recursively without deadlocking.
        let slots: Vec<Arc<dyn Fn(&Args) + Send + Sync>> = {
            let connections = self.connections.lock();
            connections.values().map(|c| Arc::clone(&c.slot)).collect()
        };

        tracing::trace!(
            target: "ember_ui_core::signal",
            slot_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}

/// RAII guard for a signal connection.
///
/// Dropping the guard disconnects the slot. Call [`release`](Self::release)
/// to keep the connection alive past the guard.
pub struct ConnectionGuard<'a, Args> {
    signal: &'a Signal<Args>,
    id: Option<ConnectionId>,
}

impl<Args> ConnectionGuard<'_, Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> Option<ConnectionId> {
        self.id
    }

    /// Detach the guard, leaving the connection in place.
    ///
    /// Returns the connection ID for later manual disconnection.
    pub fn release(mut self) -> Option<ConnectionId> {
        self.id.take()
    }
}

impl<Args> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.signal.disconnect(id);
        }
    }
}

static_assertions::assert_impl_all!(Signal<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_connect_and_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(AtomicUsize::new(0));

        let received_clone = received.clone();
        signal.connect(move |&n| {
            received_clone.store(n as usize, Ordering::SeqCst);
        });

        signal.emit(42);
        assert_eq!(received.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_emit_invokes_all_slots() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let count = count.clone();
            signal.connect(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        let id = signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(());
        assert!(signal.disconnect(id));
        signal.emit(());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        // Disconnecting twice fails.
        assert!(!signal.disconnect(id));
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();
        signal.connect(|_| {});
        signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_blocked_signal_does_not_emit() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reentrant_emit_from_slot() {
        // A slot may emit the same signal again; the recursion terminates
        // because the slot only re-emits while the payload is non-zero.
        let signal = Arc::new(Signal::<i32>::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let signal_clone = signal.clone();
        let seen_clone = seen.clone();
        signal.connect(move |&n| {
            seen_clone.lock().push(n);
            if n > 0 {
                signal_clone.emit(n - 1);
            }
        });

        signal.emit(2);
        assert_eq!(*seen.lock(), vec![2, 1, 0]);
    }

    #[test]
    fn test_slot_connected_during_emit_not_invoked() {
        let signal = Arc::new(Signal::<()>::new());
        let late_calls = Arc::new(AtomicUsize::new(0));

        let signal_clone = signal.clone();
        let late_calls_clone = late_calls.clone();
        signal.connect(move |_| {
            let late_calls = late_calls_clone.clone();
            signal_clone.connect(move |_| {
                late_calls.fetch_add(1, Ordering::SeqCst);
            });
        });

        signal.emit(());
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        // The slot added during the first emission runs on the next one.
        signal.emit(());
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slot_disconnecting_itself() {
        let signal = Arc::new(Signal::<()>::new());
        let count = Arc::new(AtomicUsize::new(0));

        let signal_clone = signal.clone();
        let count_clone = count.clone();
        let id_cell: Arc<Mutex<Option<ConnectionId>>> = Arc::new(Mutex::new(None));
        let id_cell_clone = id_cell.clone();

        let id = signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = id_cell_clone.lock().take() {
                signal_clone.disconnect(id);
            }
        });
        *id_cell.lock() = Some(id);

        signal.emit(());
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_connection_guard_disconnects_on_drop() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        {
            let count = count.clone();
            let _guard = signal.connect_scoped(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
            signal.emit(());
        }

        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_connection_guard_release_keeps_connection() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let id = {
            let count = count.clone();
            let guard = signal.connect_scoped(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
            guard.release()
        };

        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(signal.disconnect(id.unwrap()));
    }
}

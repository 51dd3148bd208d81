//! Process-wide network connectivity tracking
//!
//! The monitor caches the platform's last-reported online/offline signal.
//! It never probes the network itself: `is_online` is a plain read of the
//! cached value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// Source of platform connectivity events
///
/// Implemented by whatever host integration can observe network
/// reachability. Headless contexts have no such source and simply pass
/// `None` to [`ConnectivityMonitor::initialize`].
pub trait ConnectivitySignal: Send + Sync {
    /// The platform's current connectivity value
    fn current(&self) -> bool;

    /// Feed of "became online" (true) / "became offline" (false) events
    fn events(&self) -> broadcast::Receiver<bool>;
}

/// Process-wide observable online/offline flag
///
/// Two states, transitions driven solely by platform events; every event is
/// applied immediately and unconditionally. Defaults to online when no
/// platform signal exists.
pub struct ConnectivityMonitor {
    online: watch::Sender<bool>,
    initialized: AtomicBool,
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityMonitor {
    /// Creates a monitor in the ONLINE state
    pub fn new() -> Self {
        let (online, _) = watch::channel(true);
        Self {
            online,
            initialized: AtomicBool::new(false),
        }
    }

    /// Registers for platform connectivity events
    ///
    /// Idempotent: only the first call takes effect. With no signal source
    /// this is a no-op and the monitor stays online for the process
    /// lifetime. Otherwise the current value is sampled immediately and a
    /// forwarder task applies every subsequent event.
    pub fn initialize(&self, signal: Option<Arc<dyn ConnectivitySignal>>) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return;
        }

        let Some(signal) = signal else {
            return;
        };

        // Subscribe before sampling: an event fired during the sample is
        // then buffered and applied by the forwarder instead of lost.
        let mut events = signal.events();
        self.online.send_replace(signal.current());

        let online = self.online.clone();
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(value) => {
                        online.send_replace(value);
                    }
                    // Skipped events only matter as their latest value,
                    // which the next recv returns.
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }

    /// The platform's last-reported connectivity; never blocks, never
    /// triggers a network probe
    pub fn is_online(&self) -> bool {
        *self.online.borrow()
    }

    /// Subscribes to connectivity changes
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.online.subscribe()
    }
}

//! Configuration-change notifications and subscriptions.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// A configuration change delivered by the host.
///
/// The host reports which parts of its configuration tree a change
/// touched; listeners scope their reaction with [`affects`].
///
/// [`affects`]: ConfigurationChange::affects
pub trait ConfigurationChange {
    /// Reports whether settings under `namespace` were affected.
    fn affects(&self, namespace: &str) -> bool;
}

/// Value implementation of [`ConfigurationChange`] naming the affected
/// namespaces.
#[derive(Debug, Clone, Default)]
pub struct ScopedChange {
    namespaces: Vec<String>,
}

impl ScopedChange {
    /// Change touching the given namespaces.
    #[must_use]
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }
}

impl ConfigurationChange for ScopedChange {
    fn affects(&self, namespace: &str) -> bool {
        self.namespaces.iter().any(|entry| entry == namespace)
    }
}

/// Callback invoked for every delivered configuration change.
pub type ChangeListener = Box<dyn Fn(&dyn ConfigurationChange) + Send + Sync>;

/// Source of configuration-change events.
pub trait ChangeNotifier {
    /// Registers `listener` against the event stream.
    ///
    /// The returned guard keeps the registration alive; dropping it
    /// unsubscribes the listener.
    fn subscribe(&self, listener: ChangeListener) -> Subscription;
}

/// Guard for a registered change listener.
///
/// Dropping the guard releases the registration; the listener is never
/// invoked afterwards.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wraps the cancellation action invoked when the guard is dropped.
    #[must_use]
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Subscription")
    }
}

/// In-process fan-out notifier used by tests and simple embedders.
#[derive(Clone, Default)]
pub struct ChangeBus {
    shared: Arc<Mutex<Slots>>,
}

type SharedListener = Arc<dyn Fn(&dyn ConfigurationChange) + Send + Sync>;

#[derive(Default)]
struct Slots {
    listeners: Vec<Option<SharedListener>>,
}

impl ChangeBus {
    /// Creates a bus with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `change` to every live listener in registration order.
    ///
    /// Listeners run without the bus locked, so a listener may subscribe
    /// or drop a [`Subscription`] on this bus.
    pub fn emit(&self, change: &dyn ConfigurationChange) {
        let live: Vec<SharedListener> = {
            let slots = lock(&self.shared);
            slots.listeners.iter().flatten().map(Arc::clone).collect()
        };
        for listener in live {
            listener(change);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        let slots = lock(&self.shared);
        slots.listeners.iter().flatten().count()
    }
}

impl ChangeNotifier for ChangeBus {
    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        let mut slots = lock(&self.shared);
        let index = slots.listeners.len();
        slots.listeners.push(Some(Arc::from(listener)));

        let shared = Arc::clone(&self.shared);
        Subscription::new(move || {
            let mut inner = lock(&shared);
            if let Some(slot) = inner.listeners.get_mut(index) {
                *slot = None;
            }
        })
    }
}

impl fmt::Debug for ChangeBus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ChangeBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

fn lock(shared: &Mutex<Slots>) -> MutexGuard<'_, Slots> {
    shared.lock().unwrap_or_else(|poison| poison.into_inner())
}

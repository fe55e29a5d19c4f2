//! The per-context identifier table.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use octet_arena::View;
use octet_core::ContextId;
use uuid::Uuid;

use crate::entry::{BlobInfo, Entry};
use crate::reference::BlobRef;

#[derive(Debug, Default)]
struct RegistryState {
    entries: IndexMap<Uuid, Entry>,
    disposed: bool,
}

/// Shared table behind a [`Registry`] and its [`RegistryHandle`]s.
///
/// Every operation holds the mutex for its whole duration, so a resolve
/// racing a dispose sees either the full table or an empty one.
#[derive(Debug, Default)]
struct Table {
    state: Mutex<RegistryState>,
}

impl Table {
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // A panic while holding the lock cannot leave an entry half-written:
        // every mutation is a single map insert or remove.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn resolve(&self, reference: &str) -> Option<BlobInfo> {
        let id = BlobRef::parse(reference).ok()?.id();
        self.lock().entries.get(&id).map(Entry::info)
    }

    fn fetch(&self, reference: &str) -> Option<Arc<[u8]>> {
        let id = BlobRef::parse(reference).ok()?.id();
        self.lock().entries.get(&id).map(|e| Arc::clone(&e.bytes))
    }

    fn revoke(&self, reference: &str) -> Option<Entry> {
        let id = BlobRef::parse(reference).ok()?.id();
        self.lock().entries.shift_remove(&id)
    }
}

/// Map from generated identifiers to registered binary objects.
///
/// Obtained from [`Context::registry`](crate::Context::registry). All
/// lookups are infallible: anything that does not name a live entry of
/// this registry yields `None` or `false`.
#[derive(Debug)]
pub struct Registry {
    context: ContextId,
    table: Arc<Table>,
}

impl Registry {
    pub(crate) fn new(context: ContextId) -> Self {
        Self {
            context,
            table: Arc::new(Table::default()),
        }
    }

    /// The owning context.
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// Register a snapshot of `view` under a fresh identifier.
    ///
    /// Returns the opaque reference string. Later writes to `view` are not
    /// observed through the registry.
    pub fn create(&self, view: &View, type_tag: &str) -> String {
        let reference = BlobRef::generate();
        let entry = Entry::new(view.to_vec(), type_tag);
        let size = entry.bytes.len();
        self.table.lock().entries.insert(reference.id(), entry);
        tracing::debug!(context = %self.context, %reference, size, "registered blob");
        reference.to_string()
    }

    /// Type tag, size, and creation time of a live entry.
    pub fn resolve(&self, reference: &str) -> Option<BlobInfo> {
        self.table.resolve(reference)
    }

    /// A fresh copy of the registered bytes.
    pub fn fetch(&self, reference: &str) -> Option<View> {
        self.table
            .fetch(reference)
            .map(|bytes| View::from_vec(bytes.to_vec()))
    }

    /// Remove an entry. Returns whether anything was removed; revoking an
    /// unknown or already-revoked reference is a no-op.
    pub fn revoke(&self, reference: &str) -> bool {
        let removed = self.table.revoke(reference).is_some();
        if removed {
            tracing::debug!(context = %self.context, reference, "revoked blob");
        }
        removed
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.table.lock().entries.len()
    }

    /// Whether no entries are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A thread-safe handle onto the same table.
    pub fn handle(&self) -> RegistryHandle {
        RegistryHandle {
            context: self.context,
            table: Arc::clone(&self.table),
        }
    }

    /// Revoke every live entry and mark the table disposed. Idempotent.
    pub(crate) fn dispose_all(&self) {
        let mut state = self.table.lock();
        if state.disposed {
            return;
        }
        state.disposed = true;
        let revoked = state.entries.len();
        state.entries.clear();
        drop(state);
        tracing::debug!(context = %self.context, revoked, "disposed registry");
    }
}

/// `Send + Sync` resolve/revoke access to a [`Registry`] from other
/// threads.
///
/// A handle never keeps entries alive: once the owning context is
/// disposed every lookup through it returns `None`.
#[derive(Clone, Debug)]
pub struct RegistryHandle {
    context: ContextId,
    table: Arc<Table>,
}

impl RegistryHandle {
    /// The owning context.
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// See [`Registry::resolve`].
    pub fn resolve(&self, reference: &str) -> Option<BlobInfo> {
        self.table.resolve(reference)
    }

    /// A copy of the registered bytes.
    pub fn fetch_bytes(&self, reference: &str) -> Option<Vec<u8>> {
        self.table.fetch(reference).map(|bytes| bytes.to_vec())
    }

    /// See [`Registry::revoke`].
    pub fn revoke(&self, reference: &str) -> bool {
        let removed = self.table.revoke(reference).is_some();
        if removed {
            tracing::debug!(context = %self.context, reference, "revoked blob");
        }
        removed
    }

    /// Whether `reference` names a live entry.
    pub fn contains(&self, reference: &str) -> bool {
        self.resolve(reference).is_some()
    }

    /// Whether the owning context has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.table.lock().disposed
    }
}

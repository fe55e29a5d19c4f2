//! Execution contexts and teardown.

use octet_core::ContextId;

use crate::registry::Registry;

/// An isolated execution context owning its own [`Registry`].
///
/// Dropping the context revokes every entry it still holds, as does
/// [`Context::dispose`]. Handles obtained from the registry observe the
/// teardown.
#[derive(Debug)]
pub struct Context {
    id: ContextId,
    registry: Registry,
}

impl Context {
    /// A fresh context with an empty registry.
    pub fn new() -> Self {
        let id = ContextId::next();
        Self {
            id,
            registry: Registry::new(id),
        }
    }

    /// This context's unique ID.
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// The context's registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Tear the context down, revoking all live entries.
    pub fn dispose(self) {
        self.registry.dispose_all();
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.registry.dispose_all();
    }
}

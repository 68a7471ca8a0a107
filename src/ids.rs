//! Session id generation.

use crate::session::SessionId;
use uuid::Uuid;

/// Produces fresh identifiers for new sessions.
///
/// Implementations should make collisions with live ids negligible; the
/// store re-draws while holding its lock if one ever occurs.
pub trait IdGenerator: Send + Sync {
    /// Returns the next identifier.
    fn generate(&self) -> SessionId;
}

/// UUID v4 ids, the production generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> SessionId {
        Uuid::new_v4().to_string()
    }
}

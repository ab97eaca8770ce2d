pub mod json_backend;

use crate::domain::LedgerStore;
use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends for the whole-store snapshot.
///
/// Load and save are opaque whole-object operations; the core never writes
/// partial state. A failed save does not roll back the in-memory mutation
/// that preceded it.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<LedgerStore>;
    fn save(&self, store: &LedgerStore) -> Result<()>;
}

pub use json_backend::JsonStorage;

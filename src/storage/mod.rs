pub mod json_backend;

use std::path::Path;

use crate::{errors::LedgerError, ledger::TripLedger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing trip snapshots.
///
/// The engine itself never persists state; this seam exists for callers that
/// need to park a ledger snapshot between sessions (fixtures, CLIs, tests).
pub trait StorageBackend: Send + Sync {
    fn save(&self, trip: &TripLedger, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<TripLedger>;
    fn list(&self) -> Result<Vec<String>>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to the JSON codec.
    fn save_to_path(&self, trip: &TripLedger, path: &Path) -> Result<()> {
        json_backend::save_trip_to_path(trip, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<TripLedger> {
        json_backend::load_trip_from_path(path)
    }
}

pub use json_backend::JsonStorage;

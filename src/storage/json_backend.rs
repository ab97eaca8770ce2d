use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::time::Clock;
use crate::domain::LedgerStore;
use crate::utils::ensure_dir;

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for the ledger store.
///
/// Saves stage to a `.tmp` sibling and rename over the target, so a crash
/// mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage rooted at the default app data directory.
    pub fn new_default() -> Result<Self> {
        let dir = crate::utils::app_data_dir();
        ensure_dir(&dir)?;
        Ok(Self::new(dir.join("store.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot, writing a freshly seeded store first if the
    /// file does not exist yet.
    pub fn load_or_seed(&self, clock: &dyn Clock) -> Result<LedgerStore> {
        if !self.path.exists() {
            let store = LedgerStore::seeded(clock.now());
            self.save(&store)?;
            info!(path = %self.path.display(), "seeded new ledger store");
            return Ok(store);
        }
        self.load()
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<LedgerStore> {
        let data = fs::read_to_string(&self.path)?;
        let store = serde_json::from_str(&data)?;
        debug!(path = %self.path.display(), "loaded ledger store");
        Ok(store)
    }

    fn save(&self, store: &LedgerStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(store)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), months = store.months.len(), "saved ledger store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;
    use crate::errors::LedgerError;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2022, 7, 1, 8, 0, 0).unwrap())
    }

    #[test]
    fn load_or_seed_creates_the_file_once() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonStorage::new(dir.path().join("store.json"));

        let store = storage.load_or_seed(&clock()).expect("seed");
        assert!(storage.path().exists());
        assert_eq!(store.defaults.monthly_income, 570_000);

        let again = storage.load_or_seed(&clock()).expect("load");
        assert_eq!(again, store);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonStorage::new(dir.path().join("store.json"));

        let mut store = LedgerStore::seeded(clock().0);
        let defaults = store.defaults.clone();
        store.get_or_create_month("07/22".parse().unwrap(), &defaults);
        storage.save(&store).expect("save");

        let loaded = storage.load().expect("load");
        assert_eq!(loaded, store);
        assert!(loaded.get_month("07/22".parse().unwrap()).is_some());
    }

    #[test]
    fn malformed_snapshot_is_a_parse_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("store.json");
        fs::write(&path, "{ not json").expect("write");

        let err = JsonStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, LedgerError::MalformedStore(_)));
    }

    #[test]
    fn missing_file_is_an_io_error_on_plain_load() {
        let dir = tempdir().expect("tempdir");
        let err = JsonStorage::new(dir.path().join("absent.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::ledger::TripLedger;

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores trip snapshots as pretty-printed JSON files under a root directory.
#[derive(Clone)]
pub struct JsonStorage {
    trips_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let trips_dir = root.into().join("trips");
        fs::create_dir_all(&trips_dir)?;
        Ok(Self { trips_dir })
    }

    pub fn trip_path(&self, name: &str) -> PathBuf {
        self.trips_dir
            .join(format!("{}.json", canonical_name(name)))
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, trip: &TripLedger, name: &str) -> Result<()> {
        save_trip_to_path(trip, &self.trip_path(name))
    }

    fn load(&self, name: &str) -> Result<TripLedger> {
        load_trip_from_path(&self.trip_path(name))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.trips_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

pub fn save_trip_to_path(trip: &TripLedger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(trip)?;
    write_atomic(path, &json)
}

pub fn load_trip_from_path(path: &Path) -> Result<TripLedger> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn canonical_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { '_' })
        .collect()
}

// Write to a sibling tmp file and rename, so a crash mid-write never leaves
// a truncated snapshot behind.
fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp_path = path.with_extension(TMP_SUFFIX);
    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}

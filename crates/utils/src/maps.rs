//! Installed map lookup
//!
//! Maps are the `.vpk` archives directly inside `<game>/csgo/maps`. The
//! registry is rebuilt on [`MapRegistry::reload`] and swapped in whole, so
//! readers never observe a half-built set.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use cs2utils_core::host::Host;
use parking_lot::RwLock;
use tracing::{info, instrument};

use crate::error::{UtilsError, UtilsResult};

const MAP_EXTENSION: &str = "vpk";

/// Set of map names available on the server
#[derive(Debug)]
pub struct MapRegistry {
    maps_dir: PathBuf,
    maps: RwLock<HashSet<String>>,
}

impl MapRegistry {
    /// Create an empty registry reading from `maps_dir`
    pub fn new(maps_dir: impl Into<PathBuf>) -> Self {
        Self {
            maps_dir: maps_dir.into(),
            maps: RwLock::new(HashSet::new()),
        }
    }

    /// Registry for `<game_dir>/csgo/maps`
    pub fn from_game_dir(game_dir: &Path) -> Self {
        Self::new(game_dir.join("csgo").join("maps"))
    }

    pub fn from_host(host: &dyn Host) -> Self {
        Self::from_game_dir(&host.game_directory())
    }

    pub fn maps_dir(&self) -> &Path {
        &self.maps_dir
    }

    /// Rescan the maps directory
    ///
    /// Returns the number of maps found. If the directory cannot be read the
    /// previous set is kept.
    #[instrument(skip(self), fields(dir = %self.maps_dir.display()))]
    pub fn reload(&self) -> UtilsResult<usize> {
        let maps = scan(&self.maps_dir).map_err(|source| UtilsError::MapsDirectory {
            path: self.maps_dir.clone(),
            source,
        })?;

        let count = maps.len();
        *self.maps.write() = maps;
        info!("Loaded {} maps", count);
        Ok(count)
    }

    /// Check if `name` (without extension) is an installed map
    pub fn is_valid(&self, name: &str) -> bool {
        self.maps.read().contains(name)
    }

    pub fn len(&self) -> usize {
        self.maps.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.read().is_empty()
    }

    /// All map names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.maps.read().iter().cloned().collect();
        names.sort();
        names
    }
}

fn scan(dir: &Path) -> std::io::Result<HashSet<String>> {
    let mut maps = HashSet::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        // follows symlinks, broken links are skipped
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(MAP_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            maps.insert(stem.to_string());
        }
    }
    Ok(maps)
}

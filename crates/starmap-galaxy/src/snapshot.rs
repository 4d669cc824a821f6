//! Byte-stream persistence of a built galaxy.
//!
//! The whole galaxy, derived data included, is written with `postcard`, so a
//! restored galaxy compares equal to the original field for field.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};
use crate::galaxy::Galaxy;

/// Current snapshot format version.
pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    galaxy: &'a Galaxy,
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

#[derive(Deserialize)]
struct Snapshot {
    #[allow(dead_code)]
    version: u32,
    galaxy: Galaxy,
}

impl Galaxy {
    /// Encode this galaxy with a version header.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let snapshot = SnapshotRef {
            version: CURRENT_SNAPSHOT_VERSION,
            galaxy: self,
        };
        Ok(postcard::to_allocvec(&snapshot)?)
    }

    /// Decode a galaxy written by [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    ///
    /// [`GalaxyError::SnapshotVersion`] for another format version,
    /// [`GalaxyError::Snapshot`] for malformed bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        // The version is the first field, so a prefix decode reads it alone.
        let (header, _): (VersionHeader, _) = postcard::take_from_bytes(bytes)?;
        if header.version != CURRENT_SNAPSHOT_VERSION {
            return Err(GalaxyError::SnapshotVersion {
                found: header.version,
                expected: CURRENT_SNAPSHOT_VERSION,
            });
        }
        let snapshot: Snapshot = postcard::from_bytes(bytes)?;
        Ok(snapshot.galaxy)
    }

    /// Write a snapshot to `path`, creating parent directories.
    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        log::info!("Saved galaxy snapshot to {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Read a snapshot from `path`.
    pub fn load_snapshot(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let galaxy = Self::from_bytes(&bytes)?;
        log::info!("Loaded galaxy snapshot from {}", path.display());
        Ok(galaxy)
    }
}

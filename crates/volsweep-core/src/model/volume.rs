/// Mount-table records.
///
/// A `MountEntry` is one mounted filesystem under the removable-media
/// root; a `VolumeSet` is the deduplicated name → mount-path map the
/// sweep consumes. Nothing here is persisted — both are rebuilt from
/// the live mount table on every run.
use std::collections::HashMap;

use serde::Serialize;

/// Root of the removable-media mount namespace on macOS. Every volume
/// the sweep may touch lives under this prefix; anything mounted
/// elsewhere is out of scope by construction.
pub const VOLUMES_ROOT: &str = "/Volumes/";

/// A single mounted volume under [`VOLUMES_ROOT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountEntry {
    /// Volume name as shown in Finder, e.g. "My Drive". Derived from
    /// the mount path by stripping the `/Volumes/` prefix; may contain
    /// spaces and punctuation.
    pub name: String,
    /// Absolute mount path, e.g. "/Volumes/My Drive".
    pub mount_path: String,
}

impl MountEntry {
    /// Build an entry from a bare mount path, if it lies under
    /// [`VOLUMES_ROOT`]. Returns `None` for anything mounted outside
    /// the removable-media namespace.
    pub fn from_mount_path(mount_path: &str) -> Option<Self> {
        let name = mount_path.strip_prefix(VOLUMES_ROOT)?;
        Some(Self {
            name: name.to_string(),
            mount_path: mount_path.to_string(),
        })
    }
}

/// Volume name → mount path for every candidate volume in one run.
///
/// Duplicate names overwrite earlier entries (last-seen wins), matching
/// how the mount table itself resolves a name collision. Iteration
/// order is unspecified; the sweep treats volumes independently.
pub type VolumeSet = HashMap<String, String>;

/// Fold parsed entries into a [`VolumeSet`], last-seen name winning.
pub fn collect_volumes<I: IntoIterator<Item = MountEntry>>(entries: I) -> VolumeSet {
    entries
        .into_iter()
        .map(|e| (e.name, e.mount_path))
        .collect()
}

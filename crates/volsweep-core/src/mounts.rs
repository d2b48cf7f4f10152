/// Volume enumeration from the mount table.
///
/// The mount-table report is plain text, one mounted filesystem per
/// line, in the form `<source> on <mountPath> (<options>)`. Parsing is
/// a pure function over that text so it tests without invoking any
/// external command; [`mounted_volumes`] adds the fail-safe wrapper
/// around the real command.
use crate::model::{collect_volumes, MountEntry, VolumeSet};
use crate::platform::VolumeCommands;

/// Structural marker for a line describing a removable-media mount.
/// Only lines containing it are considered at all.
const VOLUMES_MARKER: &str = " on /Volumes/";

/// Separator between the mount source and the mount descriptor.
/// Volume names may themselves contain spaces, so only the *first*
/// occurrence is structural.
const ON_SEPARATOR: &str = " on ";

/// Parse raw mount-table text into one record per removable volume.
///
/// Lines deviating from the expected format are skipped, never
/// reported. For each qualifying line the mount descriptor is
/// everything after the first `" on "`, truncated at the ` (` that
/// opens the options suffix when present.
pub fn parse_mount_table(raw: &str) -> Vec<MountEntry> {
    raw.lines()
        .filter(|line| line.contains(VOLUMES_MARKER))
        .filter_map(parse_line)
        .collect()
}

/// Parse one mount-table line already known to contain the marker.
fn parse_line(line: &str) -> Option<MountEntry> {
    let (_, descriptor) = line.split_once(ON_SEPARATOR)?;
    let mount_path = match descriptor.find(" (") {
        Some(idx) => &descriptor[..idx],
        None => descriptor,
    };
    MountEntry::from_mount_path(mount_path)
}

/// Enumerate every volume currently mounted under
/// [`VOLUMES_ROOT`](crate::model::VOLUMES_ROOT).
///
/// Never raises: if the mount-reporting command cannot be invoked or
/// exits non-zero, the failure is logged and an empty set is returned —
/// "unknown" is treated as "nothing to eject". Duplicate volume names
/// overwrite earlier entries, last-seen wins.
pub fn mounted_volumes<C: VolumeCommands>(commands: &C) -> VolumeSet {
    let raw = match commands.mount_table() {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "mount table unavailable, assuming no volumes");
            return VolumeSet::new();
        }
    };

    let volumes = collect_volumes(parse_mount_table(&raw));
    tracing::debug!(count = volumes.len(), "enumerated removable volumes");
    volumes
}

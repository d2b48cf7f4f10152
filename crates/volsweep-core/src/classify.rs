/// System/boot volume protection rules.
///
/// Two layers: an exact-path deny-list that protects the canonical
/// system layout even when volumes are renamed, and a keyword check on
/// the volume name as defence-in-depth for default naming. Pure
/// functions, no side effects.
use crate::model::VOLUMES_ROOT;

/// Absolute mount paths that must never be ejected, whatever the
/// volume is named.
const PROTECTED_PATHS: [&str; 7] = [
    "/",
    "/System",
    "/Library",
    "/Users",
    "/Applications",
    "/Volumes/Macintosh HD",
    "/Volumes/Macintosh HD - Data",
];

/// Lower-case name fragments that suggest a system or boot volume.
const PROTECTED_KEYWORDS: [&str; 4] = ["macintosh", "hd", "system", "boot"];

/// Decide whether a volume is a protected system/boot volume.
///
/// First matching rule wins:
///
/// 1. `mount_path` exactly on the deny-list → protected.
/// 2. Lower-cased `name` contains a protected keyword → protected,
///    unless the volume is a genuine external mount (path under
///    `/Volumes/` and not itself on the deny-list) — then the keyword
///    hit is overridden so a user drive named, say, "My Backup HD" is
///    still ejected.
/// 3. Otherwise not protected.
///
/// The override in rule 2 is asymmetric: a system volume renamed to a
/// keyword-matching name but mounted at a non-deny-list `/Volumes/...`
/// path would not be protected. That matches the long-standing
/// behaviour of this tool and is kept as-is.
pub fn is_protected(name: &str, mount_path: &str) -> bool {
    if PROTECTED_PATHS.contains(&mount_path) {
        return true;
    }

    let lowered = name.to_lowercase();
    if PROTECTED_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        let external = mount_path.starts_with(VOLUMES_ROOT)
            && !PROTECTED_PATHS.contains(&mount_path);
        return !external;
    }

    false
}

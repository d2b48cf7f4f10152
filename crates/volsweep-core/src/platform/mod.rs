/// Platform-specific functionality — the macOS `mount` and `diskutil`
/// command-line facilities, isolated behind a narrow trait so the rest
/// of the crate tests without real devices.
pub mod diskutil;

pub use diskutil::{CommandError, DiskUtil, VolumeCommands};

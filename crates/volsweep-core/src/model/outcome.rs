/// Per-volume sweep outcomes.
///
/// The reference behaviour swallows every failure, so the CLI exit code
/// carries no information. These records exist so callers and tests can
/// still observe what happened to each volume.
use serde::Serialize;

/// Final result of one volume's eject attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EjectOutcome {
    /// `diskutil eject` succeeded; the device is safe to unplug.
    Ejected,
    /// Eject was refused but the plain `diskutil unmount` fallback
    /// succeeded. The filesystem is detached; the device itself may
    /// still be powered.
    UnmountFallback,
    /// Both eject and the unmount fallback were refused. The volume is
    /// left mounted and the sweep moved on.
    Failed,
}

impl EjectOutcome {
    /// Human-readable label for log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ejected => "ejected",
            Self::UnmountFallback => "unmounted (eject refused)",
            Self::Failed => "failed",
        }
    }

    /// Whether the volume ended up detached.
    pub fn detached(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// One attempted volume and how it fared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepRecord {
    /// Volume name, e.g. "My Drive".
    pub name: String,
    /// Mount path the eject/unmount commands were given.
    pub mount_path: String,
    /// Final per-volume result.
    pub outcome: EjectOutcome,
}

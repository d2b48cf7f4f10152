/// Sequential best-effort eject sweep.
///
/// Each volume is handled independently: eject first, plain unmount as
/// fallback, and a short pause between volumes so the disk subsystem is
/// not hit with rapid consecutive device-removal requests. One volume's
/// failure never aborts the sweep.
use std::time::Duration;

use crate::classify::is_protected;
use crate::model::{EjectOutcome, SweepRecord, VolumeSet, VOLUMES_ROOT};
use crate::platform::VolumeCommands;

/// Pause between consecutive volume attempts in production.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(500);

/// Drives the eject sweep over a [`VolumeSet`].
pub struct Sweeper<C: VolumeCommands> {
    commands: C,
    pause: Duration,
}

impl<C: VolumeCommands> Sweeper<C> {
    /// Sweeper with the production inter-volume pause.
    pub fn new(commands: C) -> Self {
        Self::with_pause(commands, DEFAULT_PAUSE)
    }

    /// Sweeper with an explicit pause; tests pass `Duration::ZERO`.
    pub fn with_pause(commands: C, pause: Duration) -> Self {
        Self { commands, pause }
    }

    /// Eject every unprotected volume in `volumes`, best-effort.
    ///
    /// Only entries whose mount path lies under `/Volumes/` and that
    /// pass [`is_protected`] are attempted. Returns one record per
    /// attempted volume; protected and out-of-namespace entries produce
    /// no record. The sweep always runs to completion.
    pub fn eject_all(&self, volumes: &VolumeSet) -> Vec<SweepRecord> {
        let candidates: Vec<_> = volumes
            .iter()
            .filter(|(name, path)| {
                path.starts_with(VOLUMES_ROOT) && !is_protected(name, path)
            })
            .collect();

        let mut records = Vec::with_capacity(candidates.len());
        let last = candidates.len().saturating_sub(1);

        for (i, (name, mount_path)) in candidates.into_iter().enumerate() {
            let outcome = self.eject_one(name, mount_path);
            records.push(SweepRecord {
                name: name.clone(),
                mount_path: mount_path.clone(),
                outcome,
            });
            // Let the disk subsystem settle before the next request.
            if i < last && !self.pause.is_zero() {
                std::thread::sleep(self.pause);
            }
        }

        records
    }

    /// Attempt one volume: eject, then unmount on refusal.
    fn eject_one(&self, name: &str, mount_path: &str) -> EjectOutcome {
        match self.commands.eject(mount_path) {
            Ok(()) => {
                tracing::info!(volume = name, path = mount_path, "ejected");
                EjectOutcome::Ejected
            }
            Err(eject_err) => {
                tracing::debug!(
                    volume = name,
                    error = %eject_err,
                    "eject refused, falling back to unmount"
                );
                match self.commands.unmount(mount_path) {
                    Ok(()) => {
                        tracing::info!(volume = name, path = mount_path, "unmounted");
                        EjectOutcome::UnmountFallback
                    }
                    Err(unmount_err) => {
                        tracing::warn!(
                            volume = name,
                            path = mount_path,
                            error = %unmount_err,
                            "could not detach volume, skipping"
                        );
                        EjectOutcome::Failed
                    }
                }
            }
        }
    }
}

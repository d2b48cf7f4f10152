/// External disk command invocation.
///
/// All three OS facilities the sweep consumes — the mount-table report,
/// eject, and unmount — are opaque external commands with a simple
/// request/response contract. `VolumeCommands` is the seam: everything
/// above it is pure logic, everything below it is `std::process`.
use std::process::Command;

use thiserror::Error;

/// Failure of a single external command invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The OS could not launch the command at all (not installed,
    /// not executable, fork failure).
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// The command ran but exited non-zero.
    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// The external disk commands the sweep consumes.
///
/// Implemented by [`DiskUtil`] for real hardware and by scripted fakes
/// in tests. Each call is synchronous and blocking; the child process
/// is scoped to the single call and collected on both success and
/// failure paths.
pub trait VolumeCommands {
    /// Report the current mount table as raw text, one mounted
    /// filesystem per line.
    fn mount_table(&self) -> Result<String, CommandError>;

    /// Ask the OS to gracefully eject the volume at `mount_path`,
    /// halting I/O and making the device safe to remove.
    fn eject(&self, mount_path: &str) -> Result<(), CommandError>;

    /// Detach the filesystem at `mount_path` without necessarily
    /// powering down the underlying device. Used as the fallback when
    /// eject is refused.
    fn unmount(&self, mount_path: &str) -> Result<(), CommandError>;
}

impl<C: VolumeCommands + ?Sized> VolumeCommands for &C {
    fn mount_table(&self) -> Result<String, CommandError> {
        (**self).mount_table()
    }

    fn eject(&self, mount_path: &str) -> Result<(), CommandError> {
        (**self).eject(mount_path)
    }

    fn unmount(&self, mount_path: &str) -> Result<(), CommandError> {
        (**self).unmount(mount_path)
    }
}

/// Real implementation backed by `/sbin/mount` and `diskutil`.
///
/// No timeout is imposed on the child processes — a hung `diskutil`
/// hangs the whole sweep. This matches the reference behaviour and is
/// documented as an accepted limitation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskUtil;

impl DiskUtil {
    /// Run `program args...`, capturing output, mapping non-zero exit
    /// to [`CommandError::Failed`].
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let rendered = if args.is_empty() {
            program.to_string()
        } else {
            format!("{program} {}", args.join(" "))
        };
        tracing::debug!(command = %rendered, "invoking external command");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CommandError::Spawn {
                command: rendered.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command: rendered,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VolumeCommands for DiskUtil {
    fn mount_table(&self) -> Result<String, CommandError> {
        self.run("mount", &[])
    }

    fn eject(&self, mount_path: &str) -> Result<(), CommandError> {
        self.run("diskutil", &["eject", mount_path]).map(|_| ())
    }

    fn unmount(&self, mount_path: &str) -> Result<(), CommandError> {
        self.run("diskutil", &["unmount", mount_path]).map(|_| ())
    }
}

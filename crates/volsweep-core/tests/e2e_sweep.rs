/// End-to-end sweep integration tests.
///
/// These tests exercise the full pipeline — mount-table text through
/// `mounted_volumes`, classification inside `Sweeper::eject_all`, and
/// the eject/unmount call sequence — against a scripted command double.
///
/// **Why a `tests/` integration test (not unit test)?**
///
/// The unit tests pin down each stage in isolation; these verify the
/// stages compose: that what the enumerator produces is exactly what
/// the sweeper filters and acts on, with no real `mount` or `diskutil`
/// involved. The double also lets a second run see the mount table as
/// it would look after the first run's ejects, which is the only way to
/// check idempotence without real hardware.
use std::sync::Mutex;
use std::time::Duration;

use volsweep_core::model::{EjectOutcome, VolumeSet};
use volsweep_core::mounts::mounted_volumes;
use volsweep_core::platform::{CommandError, VolumeCommands};
use volsweep_core::sweep::Sweeper;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Scripted replacement for the real OS commands.
///
/// Serves a fixed mount table and records every eject/unmount call.
/// Ejects fail for paths listed in `eject_refused`; unmounts always
/// succeed.
struct FakeDisk {
    table: String,
    eject_refused: Vec<String>,
    ejects: Mutex<Vec<String>>,
    unmounts: Mutex<Vec<String>>,
}

impl FakeDisk {
    fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            eject_refused: Vec::new(),
            ejects: Mutex::new(Vec::new()),
            unmounts: Mutex::new(Vec::new()),
        }
    }

    fn refusing_eject(table: &str, paths: &[&str]) -> Self {
        Self {
            eject_refused: paths.iter().map(|p| p.to_string()).collect(),
            ..Self::new(table)
        }
    }

    fn ejects(&self) -> Vec<String> {
        self.ejects.lock().unwrap().clone()
    }

    fn unmounts(&self) -> Vec<String> {
        self.unmounts.lock().unwrap().clone()
    }
}

impl VolumeCommands for FakeDisk {
    fn mount_table(&self) -> Result<String, CommandError> {
        Ok(self.table.clone())
    }

    fn eject(&self, mount_path: &str) -> Result<(), CommandError> {
        self.ejects.lock().unwrap().push(mount_path.to_string());
        if self.eject_refused.iter().any(|p| p == mount_path) {
            return Err(CommandError::Failed {
                command: format!("diskutil eject {mount_path}"),
                status: "exit status: 1".into(),
                stderr: "Volume failed to eject: at least one process is using it".into(),
            });
        }
        Ok(())
    }

    fn unmount(&self, mount_path: &str) -> Result<(), CommandError> {
        self.unmounts.lock().unwrap().push(mount_path.to_string());
        Ok(())
    }
}

/// A mount table as `mount` prints it on a machine with the default
/// system volumes plus two external drives.
const TWO_EXTERNALS: &str = "\
/dev/disk3s1s1 on / (apfs, sealed, local, read-only, journaled)
devfs on /dev (devfs, local, nobrowse)
/dev/disk3s6 on /System/Volumes/VM (apfs, local, noexec, journaled, noatime, nobrowse)
/dev/disk3s5 on /System/Volumes/Data (apfs, local, journaled, nobrowse)
map auto_home on /System/Volumes/Data/home (autofs, automounted, nobrowse)
/dev/disk4s1 on /Volumes/My Drive (exfat, local, nodev, nosuid, read-only, noowners)
/dev/disk5s2 on /Volumes/USB1 (msdos, local, nodev, nosuid, noowners)";

fn run_sweep(disk: &FakeDisk) -> (VolumeSet, Vec<volsweep_core::model::SweepRecord>) {
    let volumes = mounted_volumes(disk);
    let records = Sweeper::with_pause(disk, Duration::ZERO).eject_all(&volumes);
    (volumes, records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The whole pipeline must eject exactly the external volumes and leave
/// every system mount alone.
#[test]
fn sweep_ejects_only_external_volumes() {
    let disk = FakeDisk::new(TWO_EXTERNALS);
    let (volumes, records) = run_sweep(&disk);

    assert_eq!(volumes.len(), 2);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.outcome == EjectOutcome::Ejected));

    let mut ejected = disk.ejects();
    ejected.sort();
    assert_eq!(ejected, vec!["/Volumes/My Drive", "/Volumes/USB1"]);
    assert!(disk.unmounts().is_empty());
}

/// The default system volume must survive even when mounted under
/// /Volumes like any external drive.
#[test]
fn sweep_spares_macintosh_hd() {
    let table = format!(
        "{TWO_EXTERNALS}\n/dev/disk3s1 on /Volumes/Macintosh HD (apfs, local, journaled)"
    );
    let disk = FakeDisk::new(&table);
    let (volumes, records) = run_sweep(&disk);

    // Enumerated (it is under /Volumes/) but never attempted.
    assert_eq!(volumes.len(), 3);
    assert_eq!(records.len(), 2);
    assert!(!disk.ejects().iter().any(|p| p.contains("Macintosh")));
}

/// A refused eject falls back to unmount and the sweep still covers the
/// remaining volumes.
#[test]
fn refused_eject_falls_back_and_sweep_continues() {
    let disk = FakeDisk::refusing_eject(TWO_EXTERNALS, &["/Volumes/USB1"]);
    let (_, records) = run_sweep(&disk);

    assert_eq!(records.len(), 2);
    let outcome_of = |name: &str| {
        records
            .iter()
            .find(|r| r.name == name)
            .expect("record present")
            .outcome
    };
    assert_eq!(outcome_of("USB1"), EjectOutcome::UnmountFallback);
    assert_eq!(outcome_of("My Drive"), EjectOutcome::Ejected);
    assert_eq!(disk.unmounts(), vec!["/Volumes/USB1"]);
}

/// An unavailable mount table means an empty set and zero external
/// calls — the fail-safe path all the way through.
#[test]
fn unavailable_mount_table_means_no_action() {
    struct NoMount;
    impl VolumeCommands for NoMount {
        fn mount_table(&self) -> Result<String, CommandError> {
            Err(CommandError::Spawn {
                command: "mount".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
        fn eject(&self, _: &str) -> Result<(), CommandError> {
            panic!("eject must not be called when enumeration failed");
        }
        fn unmount(&self, _: &str) -> Result<(), CommandError> {
            panic!("unmount must not be called when enumeration failed");
        }
    }

    let volumes = mounted_volumes(&NoMount);
    assert!(volumes.is_empty());
    let records = Sweeper::with_pause(&NoMount, Duration::ZERO).eject_all(&volumes);
    assert!(records.is_empty());
}

/// Running the sweep twice with no new devices attached performs zero
/// ejections the second time: the first run's volumes are gone from the
/// mount table.
#[test]
fn second_run_is_a_no_op() {
    let first = FakeDisk::new(TWO_EXTERNALS);
    let (_, records) = run_sweep(&first);
    assert_eq!(records.len(), 2);

    // Same machine after the sweep: only system mounts remain.
    let after: String = TWO_EXTERNALS
        .lines()
        .filter(|l| !l.contains(" on /Volumes/"))
        .collect::<Vec<_>>()
        .join("\n");
    let second = FakeDisk::new(&after);
    let (volumes, records) = run_sweep(&second);

    assert!(volumes.is_empty());
    assert!(records.is_empty());
    assert!(second.ejects().is_empty());
    assert!(second.unmounts().is_empty());
}

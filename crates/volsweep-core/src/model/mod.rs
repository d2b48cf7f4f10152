/// Data model for the VolSweep pipeline.
///
/// Re-exports the mount-table record types and the per-volume
/// sweep outcome types.
pub mod outcome;
pub mod volume;

pub use outcome::{EjectOutcome, SweepRecord};
pub use volume::{collect_volumes, MountEntry, VolumeSet, VOLUMES_ROOT};

/// VolSweep Core — volume enumeration, classification, and eject logic.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`model`] — Mount entries, the volume map, and per-volume sweep outcomes.
/// - [`platform`] — Narrow interface over the macOS `mount` and `diskutil`
///   commands, plus the real process-spawning implementation.
/// - [`mounts`] — Mount-table parsing and fail-safe volume enumeration.
/// - [`classify`] — System/boot volume protection rules.
/// - [`sweep`] — Sequential best-effort eject with unmount fallback.
pub mod classify;
pub mod model;
pub mod mounts;
pub mod platform;
pub mod sweep;

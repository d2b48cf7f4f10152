//! VolSweep — eject every external volume in one sweep.
//!
//! Thin binary entry point. All logic lives in the `volsweep-core`
//! crate. No flags, no arguments, no prompts: the sweep is meant for
//! unattended use, so every failure is contained inside the pipeline
//! and the process always exits 0.

use volsweep_core::model::EjectOutcome;
use volsweep_core::mounts::mounted_volumes;
use volsweep_core::platform::DiskUtil;
use volsweep_core::sweep::Sweeper;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("VolSweep starting");

    let commands = DiskUtil;
    let volumes = mounted_volumes(&commands);
    if volumes.is_empty() {
        tracing::info!("no external volumes mounted, nothing to do");
        return Ok(());
    }
    tracing::info!(candidates = volumes.len(), "found mounted external volumes");

    let records = Sweeper::new(commands).eject_all(&volumes);

    // Per-volume outcomes as one machine-readable line for anyone
    // scraping the logs; the exit code stays 0 regardless.
    if let Ok(summary) = serde_json::to_string(&records) {
        tracing::debug!(records = %summary, "sweep detail");
    }

    let detached = records.iter().filter(|r| r.outcome.detached()).count();
    let failed = records
        .iter()
        .filter(|r| r.outcome == EjectOutcome::Failed)
        .count();
    tracing::info!(attempted = records.len(), detached, failed, "sweep complete");

    Ok(())
}

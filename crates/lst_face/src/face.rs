//! The face update cycle and configuration handshake.
//!
//! The host calls [`Face::on_tick`] once per clock second; the pipeline
//! only runs on seconds divisible by [`UPDATE_PERIOD_SECONDS`] (three
//! updates per minute), a deliberate throttle. A configuration message
//! that carries a longitude persists it and refreshes immediately,
//! bypassing the throttle.
//!
//! Single-threaded dispatch: the host event loop never overlaps the two
//! handlers, so the persisted longitude cannot be read mid-write.

use lst_config::{ConfigError, ConfigMessage, ObserverConfig, SettingsStore};
use lst_time::ClockSnapshot;

use crate::readout::{ReadoutSet, ReadoutSink, compute_readouts};

/// Seconds between pipeline runs on the tick path.
pub const UPDATE_PERIOD_SECONDS: u32 = 20;

/// The watchface: owns the settings store, drives the pipeline.
#[derive(Debug)]
pub struct Face {
    store: SettingsStore,
}

impl Face {
    pub fn new(store: SettingsStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Per-second tick. Returns the new readouts when the cadence
    /// filter let the pipeline run, `None` on skipped ticks.
    pub fn on_tick(
        &self,
        snapshot: &ClockSnapshot,
        sink: &mut dyn ReadoutSink,
    ) -> Result<Option<ReadoutSet>, ConfigError> {
        if snapshot.utc.second % UPDATE_PERIOD_SECONDS != 0 {
            return Ok(None);
        }
        self.refresh(snapshot, sink).map(Some)
    }

    /// Run the pipeline now, regardless of cadence: load the persisted
    /// longitude, convert, format, deliver to the sink.
    pub fn refresh(
        &self,
        snapshot: &ClockSnapshot,
        sink: &mut dyn ReadoutSink,
    ) -> Result<ReadoutSet, ConfigError> {
        let config = ObserverConfig::load(&self.store)?;
        let set = compute_readouts(snapshot, &config);
        set.push_to(sink);
        Ok(set)
    }

    /// Inbound configuration. A message without a longitude field is
    /// silently ignored; one with a field is persisted (unconditional
    /// overwrite) and triggers an immediate refresh.
    pub fn on_config_message(
        &self,
        message: &ConfigMessage,
        snapshot: &ClockSnapshot,
        sink: &mut dyn ReadoutSink,
    ) -> Result<Option<ReadoutSet>, ConfigError> {
        let Some(longitude_deg) = message.longitude_deg() else {
            return Ok(None);
        };
        ObserverConfig { longitude_deg }.save(&self.store)?;
        self.refresh(snapshot, sink).map(Some)
    }
}

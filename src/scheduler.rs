use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{config::CardConfig, layout, render, state::StateStore};

/// Asks the host for one future `fire` call at its next paint
/// opportunity. Implemented by the host adapter's frame channel and by
/// test doubles.
pub trait FramePump {
    fn request_frame(&mut self);
}

impl FramePump for tokio::sync::mpsc::UnboundedSender<()> {
    fn request_frame(&mut self) {
        // a dropped receiver means the host is shutting down
        let _ = self.send(());
    }
}

/// Coalesces bursts of state pushes into at most one pending render.
/// Owns the only mutable render state: the latest snapshot and the
/// pending flag. All mutation happens on the host's single cooperative
/// thread, so pushes arriving between frames simply overwrite
/// `latest` and the eventual fire reflects the newest one.
pub struct RenderScheduler<P> {
    latest: Option<Arc<StateStore>>,
    pending: bool,
    pump: P,
}

impl<P: FramePump> RenderScheduler<P> {
    pub fn new(pump: P) -> Self {
        Self {
            latest: None,
            pending: false,
            pump,
        }
    }

    /// Record a snapshot and schedule a frame if none is pending.
    /// N pushes before the frame fires produce exactly one frame
    /// request; the superseded snapshots are never rendered.
    pub fn push(&mut self, snapshot: Arc<StateStore>) {
        self.latest = Some(snapshot);
        if !self.pending {
            self.pending = true;
            self.pump.request_frame();
        }
    }

    /// Run one render against the latest snapshot as of now, not the
    /// one that scheduled the frame. Never propagates an error: the
    /// frame-driven path has no caller positioned to catch one, so a
    /// failed render is logged and skipped.
    pub fn fire(&mut self, config: &CardConfig, now: DateTime<Utc>) -> Option<String> {
        self.pending = false;

        let snapshot = self.latest.as_ref()?;
        let model = layout::build(snapshot, config, now);

        match render::render(&model, config) {
            Ok(markup) => Some(markup),
            Err(error) => {
                warn!(%error, "card render failed");
                None
            }
        }
    }
}

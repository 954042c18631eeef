//! Dispatcher seam wiring the tmux send path.

use agsend_core::{AgsendError, PaneDescriptor, Transmitter};
use agsend_tmux::{TmuxCommandRunner, focus_pane, send_literal};

pub struct TmuxTransmitter<R> {
    runner: R,
}

impl<R: TmuxCommandRunner> TmuxTransmitter<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: TmuxCommandRunner> Transmitter for TmuxTransmitter<R> {
    fn send(&self, pane: &PaneDescriptor, text: &str) -> Result<(), AgsendError> {
        send_literal(&self.runner, &pane.pane_id, text)
            .map_err(|e| AgsendError::SendFailed(e.to_string()))?;
        // The message already landed; a focus hiccup is not a send failure.
        if let Err(e) = focus_pane(&self.runner, &pane.pane_id) {
            tracing::warn!(%e, pane_id = %pane.pane_id, "delivered, but focusing the pane failed");
        }
        Ok(())
    }
}

use crate::core::rotator::{lock_rotator, SharedRotator};
use crate::domain::model::SessionEvent;
use crate::utils::error::{FelineError, Result};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Handle to the periodic fact-advance task. Stopping or dropping it ends the task.
pub struct AutoAdvance {
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        rotator: SharedRotator,
        period: Duration,
        events: mpsc::Sender<SessionEvent>,
    ) -> Result<Self> {
        if period.is_zero() {
            return Err(FelineError::invalid_configuration(
                "auto-advance period must be greater than zero",
            ));
        }

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(run_ticker(rotator, period, events, shutdown_rx));
        tracing::info!("⏱️ Auto-advance started (every {:?})", period);

        Ok(Self {
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!("Auto-advance task ended abnormally: {}", e);
            }
        }
        tracing::info!("⏹️ Auto-advance stopped");
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.shutdown.take();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn run_ticker(
    rotator: SharedRotator,
    period: Duration,
    events: mpsc::Sender<SessionEvent>,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                let (index, fact) = {
                    let mut rotator = lock_rotator(&rotator);
                    rotator.advance();
                    (rotator.current_index(), rotator.current().to_string())
                };
                tracing::debug!("Auto-advanced to fact #{}", index);

                // A full queue means nobody is rendering; the rotator still moves.
                match events.try_send(SessionEvent::FactAdvanced { index, fact }) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Event queue full, dropping fact #{} event", index);
                    }
                    Err(TrySendError::Closed(_)) => {
                        tracing::debug!("Event receiver dropped, ending auto-advance");
                        break;
                    }
                }
            }
        }
    }
}

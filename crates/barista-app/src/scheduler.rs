use std::time::Duration;

use barista_types::AppEvent;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

/// Posts events back into the event loop after a delay, without blocking it
#[derive(Clone)]
pub struct Scheduler {
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
}

impl Scheduler {
    pub fn new(event_tx: AsyncSender<AppEvent>, cancel: CancellationToken) -> Self {
        Self { event_tx, cancel }
    }

    pub fn schedule(&self, delay: Duration, event: AppEvent) {
        let tx = self.event_tx.clone();
        let cancel = self.cancel.child_token();

        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    if let Err(e) = tx.send(event).await {
                        tracing::debug!("Deferred event dropped: {}", e);
                    }
                }
                _ = cancel.cancelled() => {}
            }
        });
    }
}

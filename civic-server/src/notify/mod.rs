//! Notification channel
//!
//! Outbound citizen notifications (creation confirmations, status changes)
//! go through an in-process queue drained by a background worker. `send` is
//! synchronous and infallible from the caller's perspective; delivery
//! failures are logged by the worker and dropped, never propagated into the
//! operation that triggered them.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// A queued outbound message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub contact: String,
    pub message: String,
}

/// Delivery error reported by a gateway implementation.
#[derive(Debug, thiserror::Error)]
#[error("delivery failed: {0}")]
pub struct DeliveryError(pub String);

/// Best-effort delivery backend (SMS/email provider, or the log in
/// development). No delivery guarantee is part of the contract.
#[async_trait]
pub trait NotificationGateway: Send + Sync + 'static {
    async fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

/// Gateway that writes messages to the log. The default until a real
/// provider is configured.
#[derive(Debug, Default)]
pub struct LogGateway;

#[async_trait]
impl NotificationGateway for LogGateway {
    async fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        tracing::info!(
            target: "notify",
            contact = %notification.contact,
            message = %notification.message,
            "Notification delivered (log gateway)"
        );
        Ok(())
    }
}

/// Handle to the notification queue.
#[derive(Debug, Clone)]
pub struct NotificationService {
    tx: mpsc::UnboundedSender<Notification>,
    shutdown: CancellationToken,
}

impl NotificationService {
    /// Spawn the delivery worker and return the sending handle.
    pub fn start(gateway: Arc<dyn NotificationGateway>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    next = rx.recv() => match next {
                        Some(notification) => {
                            if let Err(e) = gateway.deliver(&notification).await {
                                tracing::warn!(
                                    target: "notify",
                                    contact = %notification.contact,
                                    error = %e,
                                    "Notification delivery failed"
                                );
                            }
                        }
                        None => break,
                    },
                }
            }
            tracing::debug!(target: "notify", "Notification worker stopped");
        });

        Self { tx, shutdown }
    }

    /// Queue a message. Fire-and-forget: a closed queue is logged, not
    /// surfaced.
    pub fn send(&self, contact: impl Into<String>, message: impl Into<String>) {
        let notification = Notification {
            contact: contact.into(),
            message: message.into(),
        };
        if self.tx.send(notification).is_err() {
            tracing::warn!(target: "notify", "Notification queue is closed, message dropped");
        }
    }

    /// Stop the delivery worker.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

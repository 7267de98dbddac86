use async_trait::async_trait;
use crate::models::NotificationMessage;

/// Fire-and-forget delivery of a message to a phone number.
///
/// Implementations absorb their own failures (logging them); callers get no signal back
/// and carry on with the next message.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, notification: &NotificationMessage);
}

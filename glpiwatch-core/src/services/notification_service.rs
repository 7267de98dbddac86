// glpiwatch-core/src/services/notification_service.rs

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, warn};

use glpiwatch_common::models::NotificationMessage;
use glpiwatch_common::traits::notification_traits::NotificationSender;

use crate::http::{DefaultHttpClient, HttpClient};
use crate::Error;

/// Path appended to the configured gateway base URL.
pub const MESSAGE_PATH: &str = "/mensagem";

/// Sends notifications to the messaging gateway over HTTP.
///
/// One POST per message, no retries. Anything other than a 200 is logged and dropped.
pub struct GatewayNotifier {
    client: Box<dyn HttpClient>,
    endpoint: String,
}

impl GatewayNotifier {
    pub fn new(client: Box<dyn HttpClient>, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), MESSAGE_PATH),
        }
    }

    /// Gateway notifier backed by reqwest with the given request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let client = DefaultHttpClient::new(timeout)?;
        Ok(Self::new(Box::new(client), base_url))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NotificationSender for GatewayNotifier {
    async fn send(&self, notification: &NotificationMessage) {
        let payload = match serde_json::to_value(notification) {
            Ok(v) => v,
            Err(e) => {
                error!("Could not serialize notification for {} => {}", notification.phone, e);
                return;
            }
        };

        match self.client.post_json(&self.endpoint, &payload).await {
            Ok(resp) if resp.is_ok() => {
                info!("Notification sent to {}", notification.phone);
            }
            Ok(resp) => {
                warn!(
                    "Gateway refused notification for {} => status={} body={}",
                    notification.phone, resp.status, resp.body
                );
            }
            Err(e) => {
                error!("Error sending notification to {} => {}", notification.phone, e);
            }
        }
    }
}

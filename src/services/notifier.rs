//! Chat-webhook notification dispatcher.
//!
//! Fire-and-forget by contract: delivery failures are logged and
//! swallowed, never retried, never surfaced to the caller whose action
//! triggered the message.

use crate::{
    config::NotifierConfig,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct NotifierService {
    config: NotifierConfig,
    client: reqwest::Client,
}

impl NotifierService {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Send one message to the configured channel. Disabled or
    /// unconfigured notifiers silently accept everything.
    pub async fn send(&self, text: &str) -> AppResult<()> {
        if !self.config.enabled || self.config.webhook_url.is_empty() {
            tracing::debug!("Notifier disabled, dropping message");
            return Ok(());
        }

        let payload = serde_json::json!({
            "channel": self.config.channel,
            "text": text,
        });

        let response = self
            .client
            .post(&self.config.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Webhook request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Internal(format!(
                "Webhook returned {}",
                response.status()
            )));
        }

        Ok(())
    }

    /// Spawn the send and return immediately. The primary operation
    /// never waits on delivery.
    pub fn dispatch(&self, text: String) {
        let notifier = self.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send(&text).await {
                tracing::warn!("Notification delivery failed: {}", e);
            }
        });
    }
}

use crate::domain::model::CustomRequest;
use crate::domain::ports::{ConfigProvider, Notifier};
use crate::utils::error::{NumerologyError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// POSTs each request as JSON to a webhook-style endpoint.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpNotifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send(&self, request: &CustomRequest) -> Result<()> {
        tracing::debug!("Posting custom request to: {}", self.endpoint);

        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("Notification response status: {}", status);

        if status.is_success() {
            tracing::info!("Custom request for {} delivered", request.email);
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Notification endpoint returned {}: {}", status, body);
            Err(NumerologyError::NotificationError {
                status: status.as_u16(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            })
        }
    }
}

/// Records the request in the log and reports success. Used when no endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, request: &CustomRequest) -> Result<()> {
        let payload = serde_json::to_string(request)?;
        tracing::info!("Custom bracelet request: {}", payload);
        Ok(())
    }
}

/// HTTP when an endpoint is configured, log-only otherwise.
pub fn notifier_from_config(config: &impl ConfigProvider) -> Box<dyn Notifier> {
    match config.notify_endpoint() {
        Some(endpoint) => {
            let mut notifier = HttpNotifier::new(endpoint);
            if let Some(secs) = config.notify_timeout_seconds() {
                notifier = notifier.with_timeout(Duration::from_secs(secs));
            }
            Box::new(notifier)
        }
        None => Box::new(LogNotifier),
    }
}

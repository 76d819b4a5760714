//! Chat webhook delivery.
//!
//! Two independent posts per alert: the text report with mentions, then a
//! companion image. The payload shapes (`tag`/`text`/`image_base64`) are
//! owned by the chat service; this client only fills them in. No retries --
//! a run either delivers or reports the failure.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use serde_json::json;
use tracing::{info, warn};

use crate::error::DeliveryError;

/// Client for one webhook endpoint.
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Post the alert text, mentioning `recipients`.
    ///
    /// Blank or whitespace-only ids are dropped from the mention list; when
    /// nothing survives, the text goes out without mentions.
    pub async fn send_text(
        &self,
        content: &str,
        recipients: &[String],
    ) -> Result<(), DeliveryError> {
        let mut text = json!({ "format": 1, "content": content });
        let mentions: Vec<&str> = recipients
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .collect();
        if mentions.is_empty() {
            info!("no valid recipient ids, sending without mentions");
        } else {
            info!(count = mentions.len(), "mentioning on-duty recipients");
            text["mentioned_list"] = json!(mentions);
        }

        let payload = json!({ "tag": "text", "text": text });
        self.post(&payload).await
    }

    /// Post the companion image if it exists on disk.
    ///
    /// A missing file skips the send and returns `Ok(false)`; it is not a
    /// delivery failure.
    pub async fn send_image(&self, path: &Path) -> Result<bool, DeliveryError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => {
                warn!(path = %path.display(), "alert image not found, skipping image send");
                return Ok(false);
            }
        };
        let payload = json!({
            "tag": "image",
            "image_base64": { "content": STANDARD.encode(bytes) },
        });
        self.post(&payload).await?;
        Ok(true)
    }

    async fn post(&self, payload: &serde_json::Value) -> Result<(), DeliveryError> {
        let resp = self.client.post(&self.url).json(payload).send().await?;
        if !resp.status().is_success() {
            return Err(DeliveryError::Status(resp.status().as_u16()));
        }
        Ok(())
    }
}

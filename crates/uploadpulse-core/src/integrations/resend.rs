//! Resend email sender.
//!
//! Posts to the Resend REST API with a bearer key. Any transport failure
//! or non-success status surfaces as [`CoreError::NotificationFailed`];
//! retrying is left to the next scheduled evaluation.

use serde_json::json;

use crate::error::{CoreError, Result};
use crate::integrations::traits::Notifier;

const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";

pub struct ResendNotifier {
    api_key: String,
    from: String,
    endpoint: String,
    rt: tokio::runtime::Runtime,
}

impl ResendNotifier {
    /// Notifier against the production API.
    pub fn new(api_key: String, from: String) -> Result<Self> {
        Self::with_endpoint(api_key, from, DEFAULT_ENDPOINT.to_string())
    }

    /// Notifier against an alternate endpoint (tests point this at a
    /// local mock server).
    pub fn with_endpoint(api_key: String, from: String, endpoint: String) -> Result<Self> {
        Ok(Self {
            api_key,
            from,
            endpoint,
            rt: tokio::runtime::Runtime::new()?,
        })
    }
}

impl Notifier for ResendNotifier {
    fn send(&self, recipient: &str, subject: &str, body_html: &str) -> Result<()> {
        let body = json!({
            "from": self.from,
            "to": [recipient],
            "subject": subject,
            "html": body_html,
        });

        let response = self
            .rt
            .block_on(async {
                reqwest::Client::new()
                    .post(&self.endpoint)
                    .bearer_auth(&self.api_key)
                    .json(&body)
                    .send()
                    .await
            })
            .map_err(|e| CoreError::NotificationFailed {
                message: e.to_string(),
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let text = self.rt.block_on(response.text()).unwrap_or_default();
            Err(CoreError::NotificationFailed {
                message: format!("Resend error (HTTP {status}): {text}"),
            })
        }
    }
}

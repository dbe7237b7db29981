//! Slack notification sink.
//!
//! Posts the payout report to the operator channel via `chat.postMessage`
//! with Markdown formatting enabled, as a bot token.

use serde::Deserialize;
use serde_json::{json, Value};

use erapay_report::notify::NotificationSink;
use erapay_report::{ReportError, Result};

const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Slack Web API sink for the operator channel.
pub struct SlackSink {
    http: reqwest::Client,
    token: String,
    channel: String,
}

#[derive(Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackSink {
    /// Create a sink posting to `channel` with the given OAuth token.
    pub fn new(token: &str, channel: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.to_string(),
            channel: channel.to_string(),
        }
    }

    fn payload(&self, text: &str) -> Value {
        json!({
            "channel": self.channel,
            "text": text,
            "mrkdwn": true,
        })
    }
}

impl NotificationSink for SlackSink {
    async fn post_report(&self, text: &str) -> Result<()> {
        let response = self
            .http
            .post(POST_MESSAGE_URL)
            .bearer_auth(&self.token)
            .json(&self.payload(text))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| ReportError::Notification(e.to_string()))?
            .json::<PostMessageResponse>()
            .await
            .map_err(|e| ReportError::Notification(e.to_string()))?;

        if !response.ok {
            let reason = response.error.unwrap_or_else(|| "unknown error".to_string());
            return Err(ReportError::Notification(reason));
        }
        Ok(())
    }
}

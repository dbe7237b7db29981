//! Notification sink interface and report delivery.
//!
//! Delivery failure is logged and swallowed: the run's on-chain work is
//! already done by the time the report goes out, so a chat outage must
//! never turn a completed run into a failure.

use erapay_runner::run::EraOutcome;

use crate::summary::format_report;
use crate::Result;

/// Posts a formatted report to the operator channel.
pub trait NotificationSink {
    /// Deliver one report message.
    fn post_report(&self, text: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Format the outcome log and deliver it through `sink`.
///
/// Always returns: a [`crate::ReportError::Notification`] from the sink is
/// logged at warn level and dropped.
pub async fn deliver_report<N: NotificationSink>(sink: &N, outcomes: &[EraOutcome]) {
    let report = format_report(outcomes);
    match sink.post_report(&report).await {
        Ok(()) => {
            tracing::info!(eras = outcomes.len(), "payout report delivered");
        }
        Err(e) => {
            tracing::warn!(error = %e, "payout report delivery failed, continuing");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::ReportError;
    use erapay_runner::run::EraStatus;

    struct RecordingSink {
        fail: bool,
        posted: Mutex<Vec<String>>,
    }

    impl NotificationSink for RecordingSink {
        async fn post_report(&self, text: &str) -> Result<()> {
            self.posted.lock().expect("lock").push(text.to_string());
            if self.fail {
                return Err(ReportError::Notification("channel unavailable".to_string()));
            }
            Ok(())
        }
    }

    fn outcomes() -> Vec<EraOutcome> {
        vec![EraOutcome {
            era: 12,
            stats: None,
            pending_claims: 0,
            status: EraStatus::Failed,
        }]
    }

    #[tokio::test]
    async fn test_delivery_posts_formatted_report() {
        let sink = RecordingSink {
            fail: false,
            posted: Mutex::new(Vec::new()),
        };
        deliver_report(&sink, &outcomes()).await;

        let posted = sink.posted.lock().expect("lock");
        assert_eq!(posted.len(), 1);
        assert!(posted[0].contains("12"));
    }

    #[tokio::test]
    async fn test_delivery_failure_is_swallowed() {
        let sink = RecordingSink {
            fail: true,
            posted: Mutex::new(Vec::new()),
        };
        // Must not panic or propagate
        deliver_report(&sink, &outcomes()).await;
        assert_eq!(sink.posted.lock().expect("lock").len(), 1);
    }
}

//! Selection-keyed advisory state.
//!
//! Every selection change bumps a generation token and aborts the previous
//! fetch. A finishing fetch writes its result only if its captured token is
//! still current, so a late answer for an old selection is dropped.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, info};

use crate::advisory::{AdvisoryClient, AdvisoryOutcome, AdvisoryRequest};
use crate::catalog::builder::Occupation;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdvisoryState {
    Idle,
    Loading,
    Ready {
        outcome: AdvisoryOutcome,
        fetched_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionView {
    pub code: Option<String>,
    pub token: u64,
    pub advisory: AdvisoryState,
}

struct Selection {
    token: u64,
    code: Option<String>,
    advisory: AdvisoryState,
    in_flight: Option<AbortHandle>,
}

impl Selection {
    /// Cancels any pending fetch and moves to a new generation.
    fn advance(&mut self, code: Option<String>) -> u64 {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.token += 1;
        self.code = code;
        self.token
    }

    fn view(&self) -> SelectionView {
        SelectionView {
            code: self.code.clone(),
            token: self.token,
            advisory: self.advisory.clone(),
        }
    }
}

/// Single-writer selection state shared through `AppState`.
pub struct SelectionTracker {
    selection: Mutex<Selection>,
    advisor: AdvisoryClient,
}

impl SelectionTracker {
    pub fn new(advisor: AdvisoryClient) -> Self {
        Self {
            selection: Mutex::new(Selection {
                token: 0,
                code: None,
                advisory: AdvisoryState::Idle,
                in_flight: None,
            }),
            advisor,
        }
    }

    /// Selects an occupation and starts its advisory fetch in the background.
    pub async fn select(self: &Arc<Self>, occupation: &Occupation) -> SelectionView {
        let request = AdvisoryRequest::from(occupation);
        let mut selection = self.selection.lock().await;

        let token = selection.advance(Some(occupation.code.clone()));
        selection.advisory = AdvisoryState::Loading;

        let tracker = Arc::clone(self);
        let task = tokio::spawn(async move {
            let outcome = tracker.advisor.fetch(&request).await;
            tracker.complete(token, outcome).await;
        });
        selection.in_flight = Some(task.abort_handle());

        info!(code = %occupation.code, token, "Occupation selected");
        selection.view()
    }

    /// Back to the overview: no selection, no advisory.
    pub async fn clear(&self) -> SelectionView {
        let mut selection = self.selection.lock().await;
        let token = selection.advance(None);
        selection.advisory = AdvisoryState::Idle;
        info!(token, "Selection cleared");
        selection.view()
    }

    /// Applies a finished fetch. Returns false when the token is stale.
    pub async fn complete(&self, token: u64, outcome: AdvisoryOutcome) -> bool {
        let mut selection = self.selection.lock().await;
        if selection.token != token {
            debug!(
                token,
                current = selection.token,
                "Discarding stale advisory result"
            );
            return false;
        }

        selection.advisory = AdvisoryState::Ready {
            outcome,
            fetched_at: Utc::now(),
        };
        selection.in_flight = None;
        true
    }

    pub async fn view(&self) -> SelectionView {
        self.selection.lock().await.view()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::advisory::tests::{insight, FailingProvider, StaticProvider};
    use crate::advisory::{
        AdvisoryError, AdvisoryInsight, InsightProvider, InsightSource,
    };
    use crate::catalog::definitions::Category;
    use crate::catalog::filter::tests::occupation;

    /// Answers with the request code after a per-code delay.
    struct DelayedProvider {
        slow_code: &'static str,
    }

    #[async_trait]
    impl InsightProvider for DelayedProvider {
        async fn insights(
            &self,
            request: &AdvisoryRequest,
        ) -> Result<AdvisoryInsight, AdvisoryError> {
            let delay = if request.code == self.slow_code { 500 } else { 10 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(insight(&format!("analysis for {}", request.code), &["tip"]))
        }

        fn name(&self) -> &'static str {
            "delayed"
        }
    }

    fn tracker(provider: impl InsightProvider + 'static) -> Arc<SelectionTracker> {
        Arc::new(SelectionTracker::new(AdvisoryClient::new(Arc::new(provider))))
    }

    fn ready_summary(view: &SelectionView) -> Option<&str> {
        match &view.advisory {
            AdvisoryState::Ready { outcome, .. } => Some(outcome.insight.summary.as_str()),
            _ => None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_loads_then_ready() {
        let tracker = tracker(StaticProvider(insight("Tight market.", &["a", "b", "c"])));
        let chef = occupation("351311", "Chef", Category::Trades, 75);

        let view = tracker.select(&chef).await;
        assert_eq!(view.code.as_deref(), Some("351311"));
        assert!(matches!(view.advisory, AdvisoryState::Loading));

        tokio::time::sleep(Duration::from_millis(50)).await;
        let view = tracker.view().await;
        assert_eq!(ready_summary(&view), Some("Tight market."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_result_for_old_selection_is_discarded() {
        let tracker = tracker(DelayedProvider { slow_code: "351311" });
        let chef = occupation("351311", "Chef", Category::Trades, 75);
        let nurse = occupation("254499", "Registered Nurse (NEC)", Category::Health, 70);

        tracker.select(&chef).await;
        tracker.select(&nurse).await;

        tokio::time::sleep(Duration::from_secs(1)).await;
        let view = tracker.view().await;
        assert_eq!(view.code.as_deref(), Some("254499"));
        assert_eq!(ready_summary(&view), Some("analysis for 254499"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_token_does_not_overwrite() {
        let tracker = tracker(DelayedProvider { slow_code: "none" });
        let chef = occupation("351311", "Chef", Category::Trades, 75);
        let nurse = occupation("254499", "Registered Nurse (NEC)", Category::Health, 70);

        let first = tracker.select(&chef).await;
        tracker.select(&nurse).await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        let stale = AdvisoryOutcome {
            insight: insight("analysis for 351311", &["tip"]),
            source: InsightSource::Generated,
        };
        assert!(!tracker.complete(first.token, stale).await);
        assert_eq!(
            ready_summary(&tracker.view().await),
            Some("analysis for 254499")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_drops_pending_fetch() {
        let tracker = tracker(DelayedProvider { slow_code: "351311" });
        let chef = occupation("351311", "Chef", Category::Trades, 75);

        let selected = tracker.select(&chef).await;
        let cleared = tracker.clear().await;
        assert!(cleared.token > selected.token);
        assert!(cleared.code.is_none());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(matches!(tracker.view().await.advisory, AdvisoryState::Idle));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_lands_as_fallback() {
        let tracker = tracker(FailingProvider);
        let chef = occupation("351311", "Chef", Category::Trades, 75);

        tracker.select(&chef).await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        match tracker.view().await.advisory {
            AdvisoryState::Ready { outcome, .. } => {
                assert_eq!(outcome.source, InsightSource::Fallback);
                assert_eq!(outcome.insight, AdvisoryInsight::fallback());
            }
            other => panic!("expected ready, got {other:?}"),
        }
    }

    #[test]
    fn test_state_serializes_with_status_tag() {
        let value = serde_json::to_value(AdvisoryState::Loading).unwrap();
        assert_eq!(value["status"], "loading");
    }
}

//! Staggered reveal of search results.
//!
//! Results land one bot message at a time with a fixed pause before each, so
//! the conversation grows while the user watches. Every append is checked
//! against the submission ticket; once the ticket is stale the reveal stops.

use crate::conversation::{ConversationStore, SubmissionTicket};
use crate::types::{Message, NO_RESULTS_TEXT, ProductRecord, SEARCHING_TEXT};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Every record was shown.
    Completed { shown: usize },
    /// No records; the "no products" message was shown.
    Empty,
    /// The ticket went stale after `shown` records.
    Cancelled { shown: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSequencer {
    interval: Duration,
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_REVEAL_INTERVAL)
    }
}

impl RevealSequencer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn run(
        &self,
        store: &ConversationStore,
        ticket: SubmissionTicket,
        records: Vec<ProductRecord>,
    ) -> RevealOutcome {
        if !store.append_if_current(ticket, Message::bot(SEARCHING_TEXT)) {
            return RevealOutcome::Cancelled { shown: 0 };
        }

        if records.is_empty() {
            if store.append_if_current(ticket, Message::bot(NO_RESULTS_TEXT)) {
                return RevealOutcome::Empty;
            }
            return RevealOutcome::Cancelled { shown: 0 };
        }

        let total = records.len();
        let mut shown = 0;
        for record in records {
            tokio::time::sleep(self.interval).await;
            if !store.append_if_current(ticket, record.to_message()) {
                tracing::debug!(shown, total, "reveal superseded");
                return RevealOutcome::Cancelled { shown };
            }
            shown += 1;
        }
        RevealOutcome::Completed { shown }
    }

    /// Run the reveal on its own task.
    pub fn start(
        &self,
        store: ConversationStore,
        ticket: SubmissionTicket,
        records: Vec<ProductRecord>,
    ) -> RevealHandle {
        let sequencer = *self;
        let task_store = store.clone();
        let task = tokio::spawn(async move { sequencer.run(&task_store, ticket, records).await });
        RevealHandle {
            store,
            ticket,
            task,
        }
    }
}

pub struct RevealHandle {
    store: ConversationStore,
    ticket: SubmissionTicket,
    task: JoinHandle<RevealOutcome>,
}

impl RevealHandle {
    /// Stop further appends. Messages already shown stay.
    pub fn cancel(&self) {
        self.store.cancel(self.ticket);
    }

    pub async fn join(self) -> RevealOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "reveal task failed");
                RevealOutcome::Cancelled { shown: 0 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canned::CannedResponses;
    use crate::query::{ProductSearch, QueryResult};
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NoSearch;

    #[async_trait]
    impl ProductSearch for NoSearch {
        async fn query(&self, _text: &str) -> QueryResult<Vec<ProductRecord>> {
            Ok(Vec::new())
        }
    }

    fn record(name: &str) -> ProductRecord {
        serde_json::from_value(serde_json::json!({ "name": name, "price": 1 })).unwrap()
    }

    fn store() -> ConversationStore {
        ConversationStore::new(
            Arc::new(MemoryStore::new()),
            Arc::new(NoSearch),
            CannedResponses::builtin(),
            RevealSequencer::default(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_messages_appear_one_interval_apart() {
        let store = store();
        let ticket = store.begin_submission();
        let sequencer = RevealSequencer::new(Duration::from_secs(1));
        let handle = sequencer.start(
            store.clone(),
            ticket,
            vec![record("a"), record("b"), record("c")],
        );

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(store.messages(), vec![Message::bot(SEARCHING_TEXT)]);

        tokio::time::sleep(Duration::from_secs(1)).await;
        let messages = store.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[1].text.starts_with("🛍️ a"));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(store.len(), 3);

        assert_eq!(handle.join().await, RevealOutcome::Completed { shown: 3 });
        assert_eq!(store.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_pending_appends() {
        let store = store();
        let ticket = store.begin_submission();
        let handle = RevealSequencer::new(Duration::from_secs(1)).start(
            store.clone(),
            ticket,
            vec![record("a"), record("b"), record("c")],
        );

        tokio::time::sleep(Duration::from_millis(1500)).await;
        handle.cancel();

        assert_eq!(handle.join().await, RevealOutcome::Cancelled { shown: 1 });
        assert_eq!(store.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_records_skip_delays() {
        let store = store();
        let ticket = store.begin_submission();
        let started = tokio::time::Instant::now();

        let outcome = RevealSequencer::default()
            .run(&store, ticket, Vec::new())
            .await;

        assert_eq!(outcome, RevealOutcome::Empty);
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(
            store.messages(),
            vec![Message::bot(SEARCHING_TEXT), Message::bot(NO_RESULTS_TEXT)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_submission_supersedes_reveal() {
        let store = store();
        let first = store.begin_submission();
        let handle = RevealSequencer::new(Duration::from_secs(1)).start(
            store.clone(),
            first,
            vec![record("a"), record("b")],
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        let _second = store.begin_submission();

        assert_eq!(handle.join().await, RevealOutcome::Cancelled { shown: 0 });
        assert_eq!(store.messages(), vec![Message::bot(SEARCHING_TEXT)]);
    }
}

//! The conversation store: the ordered message log every page renders.
//!
//! The store is a shared handle. Pages clone it and all see the same log, the
//! same compose draft and the same persisted snapshot. State changes are
//! published through a watch channel so views re-render on every append.

use crate::canned::CannedResponses;
use crate::config::AppConfig;
use crate::query::{HttpProductSearch, ProductSearch, QueryError};
use crate::reveal::{RevealOutcome, RevealSequencer};
use crate::storage::{CHAT_HISTORY_KEY, KeyValueStore, StorageResult};
use crate::types::{ERROR_TEXT, Message};
use anyhow::Context;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub draft: String,
}

/// Identifies one submission. Appends made with a stale ticket are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing appended.
    Skipped,
    /// Answered from the canned-response table.
    Canned,
    Revealed(RevealOutcome),
    /// The search backend could not be reached.
    Failed,
}

struct StoreInner {
    state: watch::Sender<ChatState>,
    generation: AtomicU64,
    storage: Arc<dyn KeyValueStore>,
    search: Arc<dyn ProductSearch>,
    canned: CannedResponses,
    sequencer: RevealSequencer,
}

#[derive(Clone)]
pub struct ConversationStore {
    inner: Arc<StoreInner>,
}

impl PartialEq for ConversationStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ConversationStore {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        search: Arc<dyn ProductSearch>,
        canned: CannedResponses,
        sequencer: RevealSequencer,
    ) -> Self {
        let (state, _) = watch::channel(ChatState::default());
        Self {
            inner: Arc::new(StoreInner {
                state,
                generation: AtomicU64::new(0),
                storage,
                search,
                canned,
                sequencer,
            }),
        }
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let search = HttpProductSearch::new(&config.backend_url, config.request_timeout)
            .context("Failed to build search client")?;
        let canned = match &config.canned_responses_path {
            Some(path) => CannedResponses::from_path(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => CannedResponses::builtin(),
        };
        tracing::info!(
            endpoint = search.endpoint(),
            canned = canned.len(),
            "conversation store ready"
        );
        Ok(Self::new(
            default_storage(config),
            Arc::new(search),
            canned,
            RevealSequencer::new(config.reveal_interval),
        ))
    }

    // ============================================
    // Reads
    // ============================================

    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.inner.state.subscribe()
    }

    pub fn snapshot(&self) -> ChatState {
        self.inner.state.borrow().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner.state.borrow().messages.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.state.borrow().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn draft(&self) -> String {
        self.inner.state.borrow().draft.clone()
    }

    // ============================================
    // Mutations
    // ============================================

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.state.send_if_modified(|state| {
            if state.draft == text {
                return false;
            }
            state.draft = text;
            true
        });
    }

    pub fn append(&self, message: Message) {
        self.inner
            .state
            .send_modify(|state| state.messages.push(message));
    }

    /// Start a new submission. Any older ticket becomes stale.
    pub fn begin_submission(&self) -> SubmissionTicket {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        SubmissionTicket { generation }
    }

    pub fn is_current(&self, ticket: SubmissionTicket) -> bool {
        self.inner.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Append only while `ticket` is the latest submission.
    pub fn append_if_current(&self, ticket: SubmissionTicket, message: Message) -> bool {
        // The check runs under the channel lock so it cannot race a clear()
        self.inner.state.send_if_modified(|state| {
            if !self.is_current(ticket) {
                return false;
            }
            state.messages.push(message);
            true
        })
    }

    /// Make `ticket` stale if it is still the latest one.
    pub fn cancel(&self, ticket: SubmissionTicket) -> bool {
        self.inner
            .generation
            .compare_exchange(
                ticket.generation,
                ticket.generation + 1,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// Empty the log and the draft, drop the persisted snapshot and stop any
    /// reveal still in flight.
    pub fn clear(&self) {
        self.inner.state.send_modify(|state| {
            self.inner.generation.fetch_add(1, Ordering::SeqCst);
            state.messages.clear();
            state.draft.clear();
        });
        if let Err(err) = self.inner.storage.remove(CHAT_HISTORY_KEY) {
            tracing::warn!(error = %err, "failed to remove persisted chat history");
        }
    }

    /// Write the whole log under `chatHistory` in one call.
    pub fn persist(&self) -> StorageResult<()> {
        let encoded = serde_json::to_string(&self.inner.state.borrow().messages)?;
        self.inner.storage.set(CHAT_HISTORY_KEY, &encoded)?;
        tracing::debug!(bytes = encoded.len(), "chat history persisted");
        Ok(())
    }

    /// The persisted log, or empty when it is missing or unreadable.
    pub fn load_snapshot(&self) -> Vec<Message> {
        let Some(raw) = self.inner.storage.get(CHAT_HISTORY_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<Message>>(&raw) {
            Ok(messages) => messages,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable chat history");
                Vec::new()
            }
        }
    }

    /// Replace the live log with the persisted snapshot. Only meant for app
    /// load; it makes any submission in flight stale.
    pub fn restore(&self) -> Vec<Message> {
        let messages = self.load_snapshot();
        self.inner.state.send_modify(|state| {
            self.inner.generation.fetch_add(1, Ordering::SeqCst);
            state.messages = messages.clone();
        });
        messages
    }

    // ============================================
    // Submission
    // ============================================

    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let query = text.trim();
        if query.is_empty() {
            self.set_draft(String::new());
            return SubmitOutcome::Skipped;
        }

        let ticket = self.begin_submission();
        self.append(Message::user(query));

        if let Some(reply) = self.inner.canned.lookup(query) {
            tracing::debug!(query, "answered from canned responses");
            self.append_if_current(ticket, Message::bot(reply));
            self.finish(ticket);
            return SubmitOutcome::Canned;
        }

        tracing::info!(query, "searching products");
        let outcome = match self.inner.search.query(query).await {
            Ok(records) => {
                SubmitOutcome::Revealed(self.inner.sequencer.run(self, ticket, records).await)
            }
            Err(QueryError::Malformed(reason)) => {
                tracing::warn!(%reason, "search response malformed, treating as empty");
                SubmitOutcome::Revealed(self.inner.sequencer.run(self, ticket, Vec::new()).await)
            }
            Err(err @ QueryError::Network(_)) => {
                tracing::warn!(error = %err, "product search failed");
                self.append_if_current(ticket, Message::bot(ERROR_TEXT));
                SubmitOutcome::Failed
            }
        };
        self.finish(ticket);
        outcome
    }

    // A superseded submission leaves the draft to the newer one
    fn finish(&self, ticket: SubmissionTicket) {
        self.inner.state.send_if_modified(|state| {
            if !self.is_current(ticket) || state.draft.is_empty() {
                return false;
            }
            state.draft.clear();
            true
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_storage(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    use crate::storage::FileStore;
    let dir = config
        .storage_dir
        .clone()
        .unwrap_or_else(FileStore::default_dir);
    Arc::new(FileStore::new(dir))
}

#[cfg(target_arch = "wasm32")]
fn default_storage(_config: &AppConfig) -> Arc<dyn KeyValueStore> {
    Arc::new(crate::storage::BrowserStore::new())
}

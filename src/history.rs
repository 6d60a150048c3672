use crate::conversation::ConversationStore;
use crate::types::{HISTORY_PLACEHOLDER_TEXT, Message, Route};

/// What the history page shows.
#[derive(Debug, PartialEq)]
pub enum HistoryDisplay<'a> {
    /// Nothing saved. Display-only, never stored.
    Placeholder(&'static str),
    Messages(&'a [Message]),
}

/// Read-only view over the persisted conversation. Opening it never touches
/// the live log, so a submission in flight keeps running.
pub struct HistoryPage {
    store: ConversationStore,
    entries: Vec<Message>,
}

impl HistoryPage {
    pub fn activate(store: ConversationStore) -> Self {
        let entries = store.load_snapshot();
        tracing::debug!(count = entries.len(), "history page loaded");
        Self { store, entries }
    }

    pub fn display(&self) -> HistoryDisplay<'_> {
        if self.entries.is_empty() {
            HistoryDisplay::Placeholder(HISTORY_PLACEHOLDER_TEXT)
        } else {
            HistoryDisplay::Messages(&self.entries)
        }
    }

    pub fn clear_chat_history(&mut self) {
        self.store.clear();
        self.entries.clear();
    }

    pub fn go_back(&self) -> Route {
        Route::Chat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canned::CannedResponses;
    use crate::query::{ProductSearch, QueryResult};
    use crate::reveal::RevealSequencer;
    use crate::storage::{CHAT_HISTORY_KEY, KeyValueStore, MemoryStore};
    use crate::types::ProductRecord;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NoSearch;

    #[async_trait]
    impl ProductSearch for NoSearch {
        async fn query(&self, _text: &str) -> QueryResult<Vec<ProductRecord>> {
            Ok(Vec::new())
        }
    }

    fn store_with(storage: Arc<MemoryStore>) -> ConversationStore {
        ConversationStore::new(
            storage,
            Arc::new(NoSearch),
            CannedResponses::builtin(),
            RevealSequencer::default(),
        )
    }

    #[test]
    fn test_placeholder_without_snapshot() {
        let page = HistoryPage::activate(store_with(Arc::new(MemoryStore::new())));
        assert_eq!(
            page.display(),
            HistoryDisplay::Placeholder("No chat history available.")
        );
    }

    #[test]
    fn test_shows_persisted_messages() {
        let storage = Arc::new(MemoryStore::new());
        let chat = store_with(storage.clone());
        chat.append(Message::user("hi"));
        chat.append(Message::bot("hello"));
        chat.persist().unwrap();

        let page = HistoryPage::activate(chat.clone());
        match page.display() {
            HistoryDisplay::Messages(messages) => assert_eq!(messages.len(), 2),
            other => panic!("unexpected display: {:?}", other),
        }
    }

    #[test]
    fn test_activate_leaves_live_log_alone() {
        let storage = Arc::new(MemoryStore::new());
        let chat = store_with(storage.clone());
        chat.append(Message::user("saved"));
        chat.persist().unwrap();
        chat.append(Message::user("not saved yet"));
        let ticket = chat.begin_submission();

        let page = HistoryPage::activate(chat.clone());

        assert_eq!(page.display(), HistoryDisplay::Messages(&[Message::user("saved")]));
        assert_eq!(chat.len(), 2);
        assert!(chat.is_current(ticket));
    }

    #[test]
    fn test_clear_removes_snapshot_and_live_log() {
        let storage = Arc::new(MemoryStore::new());
        let chat = store_with(storage.clone());
        chat.append(Message::user("hi"));
        chat.persist().unwrap();

        let mut page = HistoryPage::activate(chat.clone());
        page.clear_chat_history();

        assert!(storage.get(CHAT_HISTORY_KEY).is_none());
        assert!(chat.is_empty());
        assert!(matches!(page.display(), HistoryDisplay::Placeholder(_)));
        assert_eq!(page.go_back(), Route::Chat);
    }
}

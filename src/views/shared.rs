use crate::conversation::{ChatState, ConversationStore};
use crate::types::Message;
use dioxus::prelude::*;

/// Mirror the store's state into a signal so the page re-renders on every
/// append, including appends made by a reveal still running in the background.
pub fn use_chat_state(store: &ConversationStore) -> Signal<ChatState> {
    let state = use_signal(|| store.snapshot());
    let store = store.clone();
    use_future(move || {
        let store = store.clone();
        let mut state = state;
        async move {
            let mut rx = store.subscribe();
            state.set(rx.borrow_and_update().clone());
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                state.set(next);
            }
        }
    });
    state
}

#[component]
pub fn MessageBubble(message: Message) -> Element {
    let side = if message.is_user { "user" } else { "assistant" };
    rsx! {
        div { class: "message-row {side}",
            div { class: "bubble {side}",
                for line in message.paragraphs() {
                    p { "{line}" }
                }
            }
        }
    }
}

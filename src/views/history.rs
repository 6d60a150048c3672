use crate::conversation::ConversationStore;
use crate::history::{HistoryDisplay, HistoryPage};
use crate::types::{Message, Route};
use crate::views::shared::MessageBubble;
use dioxus::prelude::*;

#[component]
pub fn HistoryView(route: Signal<Route>) -> Element {
    let store = use_context::<ConversationStore>();
    let mut page = use_signal(|| HistoryPage::activate(store.clone()));
    let mut route = route;

    let body = match page.read().display() {
        HistoryDisplay::Placeholder(text) => rsx! {
            MessageBubble { message: Message::bot(text) }
        },
        HistoryDisplay::Messages(messages) => rsx! {
            for (i, msg) in messages.iter().enumerate() {
                MessageBubble { key: "{i}", message: msg.clone() }
            }
        },
    };

    rsx! {
        div { class: "main-container",
            h2 { class: "page-title", "Chat History" }
            div { class: "chat-list", {body} }
            div { class: "history-actions",
                button {
                    class: "btn btn-danger", r#type: "button",
                    onclick: move |_| page.write().clear_chat_history(),
                    "Clear Chat History"
                }
                button {
                    class: "btn btn-primary", r#type: "button",
                    onclick: move |_| {
                        let next = page.read().go_back();
                        route.set(next);
                    },
                    "Go Back"
                }
            }
        }
    }
}

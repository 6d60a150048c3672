use crate::conversation::ConversationStore;
use crate::types::Route;
use crate::views::shared::{MessageBubble, use_chat_state};
use dioxus::events::Key;
use dioxus::prelude::*;

const SCROLL_TO_END_JS: &str =
    "document.getElementById('chat-end')?.scrollIntoView({ behavior: 'smooth' });";

#[component]
pub fn ChatView(route: Signal<Route>) -> Element {
    let store = use_context::<ConversationStore>();
    let state = use_chat_state(&store);

    use_effect(move || {
        let _ = state.read().messages.len();
        let _ = document::eval(SCROLL_TO_END_JS);
    });

    let send = {
        let store = store.clone();
        use_callback(move |_: ()| {
            let store = store.clone();
            spawn(async move {
                let text = store.draft();
                let outcome = store.submit(&text).await;
                tracing::debug!(?outcome, "submission finished");
            });
        })
    };

    let input_store = store.clone();
    let clear_store = store.clone();
    let history_store = store.clone();
    let mut route = route;

    let snapshot = state();
    let draft = snapshot.draft.clone();

    rsx! {
        div { class: "main-container",
            h2 { class: "page-title", "Product Finder Chat" }
            div { id: "chat-list", class: "chat-list",
                for (i, msg) in snapshot.messages.iter().enumerate() {
                    MessageBubble { key: "{i}", message: msg.clone() }
                }
                div { id: "chat-end" }
            }

            form { class: "composer",
                textarea {
                    rows: "1",
                    placeholder: "Ask about a product...",
                    value: "{draft}",
                    oninput: move |ev| input_store.set_draft(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            send.call(());
                        }
                    },
                    autofocus: true,
                }
                button {
                    class: "btn btn-primary", r#type: "button",
                    aria_label: "Send Message",
                    disabled: draft.trim().is_empty(),
                    onclick: move |_| send.call(()),
                    "Send"
                }
                button {
                    class: "btn btn-danger", r#type: "button",
                    aria_label: "Clear Chat History",
                    onclick: move |_| clear_store.clear(),
                    "Clear Chat"
                }
                button {
                    class: "btn btn-danger", r#type: "button",
                    aria_label: "View Chat History",
                    onclick: move |_| {
                        if let Err(err) = history_store.persist() {
                            tracing::error!(error = %err, "failed to save chat history");
                        }
                        route.set(Route::History);
                    },
                    "Chat History"
                }
            }
        }
    }
}

use crate::config::AppConfig;
use crate::conversation::ConversationStore;
use crate::theme::APP_CSS;
use crate::types::Route;
use crate::views::{ChatView, HistoryView};
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    let store = use_hook(|| {
        ConversationStore::from_config(&AppConfig::from_env()).map_err(|err| {
            tracing::error!(error = %err, "failed to start conversation store");
            format!("{err:#}")
        })
    });

    rsx! {
        style { dangerous_inner_html: "{APP_CSS}" }
        div { class: "app",
            h1 { class: "app-title", "AI Chatbot" }
            match store {
                Ok(store) => rsx! { AppShell { store } },
                Err(message) => rsx! {
                    p { class: "startup-error", "{message}" }
                },
            }
        }
    }
}

#[component]
fn AppShell(store: ConversationStore) -> Element {
    let store = use_context_provider(|| store);
    let route = use_signal(|| Route::Chat);

    // Rehydrate the previous session once, on first load
    use_hook(|| {
        let restored = store.restore();
        tracing::info!(count = restored.len(), "chat history restored");
    });

    rsx! {
        match route() {
            Route::Chat => rsx! { ChatView { route } },
            Route::History => rsx! { HistoryView { route } },
        }
    }
}

//! Product Finder: a chat-style product search client.
//!
//! The conversation core (`conversation`, `reveal`, `canned`, `query`,
//! `storage`) has no UI dependency. The Dioxus pages in `ui` and `views` are
//! compiled when a platform feature (`web`, `desktop`, `mobile`) is enabled.

pub mod canned;
pub mod config;
pub mod conversation;
pub mod history;
pub mod query;
pub mod reveal;
pub mod storage;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod theme;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;

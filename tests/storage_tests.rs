//! Integration tests for the file-backed chat history storage

use productfinder::storage::{CHAT_HISTORY_KEY, FileStore, KeyValueStore};

mod file_store_tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::new(dir.path());
        let value = r#"[{"text":"hi","isUser":true}]"#;

        store.set(CHAT_HISTORY_KEY, value).expect("Failed to set");

        assert_eq!(store.get(CHAT_HISTORY_KEY), Some(value.to_string()));
        assert!(dir.path().join("chatHistory.json").exists());
    }

    #[test]
    fn test_get_nonexistent() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::new(dir.path().join("not-created-yet"));
        assert_eq!(store.get(CHAT_HISTORY_KEY), None);
    }

    #[test]
    fn test_overwrite_leaves_no_staging_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::new(dir.path());

        store.set(CHAT_HISTORY_KEY, "[]").expect("Failed to set");
        store
            .set(CHAT_HISTORY_KEY, r#"[{"text":"again","isUser":false}]"#)
            .expect("Failed to overwrite");

        assert_eq!(
            store.get(CHAT_HISTORY_KEY),
            Some(r#"[{"text":"again","isUser":false}]"#.to_string())
        );
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .filter(|entry| entry.path().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::new(dir.path());

        store.set(CHAT_HISTORY_KEY, "[]").expect("Failed to set");
        store.remove(CHAT_HISTORY_KEY).expect("Failed to remove");
        assert!(store.get(CHAT_HISTORY_KEY).is_none());

        // removing twice is fine
        store.remove(CHAT_HISTORY_KEY).expect("Failed to remove again");
    }

    #[test]
    fn test_special_characters_in_key() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::new(dir.path());

        store.set("../outside", "value").expect("Failed to set");

        assert_eq!(store.get("../outside"), Some("value".to_string()));
        assert!(dir.path().join("___outside.json").exists());
    }
}

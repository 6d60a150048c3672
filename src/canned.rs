//! Fixed replies that short-circuit the product search.
//!
//! Matching is exact after normalization (trim + lower-case). There is no fuzzy
//! or substring matching: "hi there" does not hit "hi".

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CannedError {
    #[error("Failed to read canned responses: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid canned responses file: {0}")]
    Parse(#[from] serde_json::Error),
}

const BUILTIN_RESPONSES: &[(&str, &str)] = &[
    ("hi", "👋 Hi! I'm your assistant, here to help."),
    ("hello", "👋 Hello! Tell me which product you are looking for."),
    ("hey", "👋 Hey there! What product can I find for you?"),
    ("hii", "👋 Hi! I'm your assistant, here to help."),
    ("good morning", "🌅 Good morning! What are you shopping for today?"),
    ("good afternoon", "☀️ Good afternoon! Which product should I look up?"),
    ("good evening", "🌙 Good evening! How can I help with your search?"),
    ("good night", "🌙 Good night! Come back any time you need a product."),
    ("how are you", "😊 I'm doing great, thanks for asking! How can I help you?"),
    ("how are you?", "😊 I'm doing great, thanks for asking! How can I help you?"),
    ("what's up", "🙂 Just waiting for your next product question!"),
    ("whats up", "🙂 Just waiting for your next product question!"),
    ("who are you", "🤖 I'm a product finder bot. Ask me about any product and I'll list suppliers."),
    ("who are you?", "🤖 I'm a product finder bot. Ask me about any product and I'll list suppliers."),
    ("what is your name", "🤖 I'm the Product Finder assistant."),
    ("what is your name?", "🤖 I'm the Product Finder assistant."),
    ("what's your name", "🤖 I'm the Product Finder assistant."),
    ("what can you do", "🛒 I can search products and show their price, description and supplier contacts."),
    ("what can you do?", "🛒 I can search products and show their price, description and supplier contacts."),
    ("help", "ℹ️ Type a product name or description, for example \"steel bolts\", and I'll search for it."),
    ("help me", "ℹ️ Type a product name or description, for example \"steel bolts\", and I'll search for it."),
    ("how does this work", "ℹ️ Describe the product you need. I query our catalogue and show each match with its supplier."),
    ("how does this work?", "ℹ️ Describe the product you need. I query our catalogue and show each match with its supplier."),
    ("how do i search", "🔎 Just type what you need, like \"office chairs\" or \"LED bulbs\", and press Send."),
    ("how do i search?", "🔎 Just type what you need, like \"office chairs\" or \"LED bulbs\", and press Send."),
    ("thanks", "🙏 You're welcome!"),
    ("thank you", "🙏 You're welcome! Anything else you need?"),
    ("thank you so much", "🙏 Happy to help!"),
    ("thx", "🙏 You're welcome!"),
    ("ok", "👍 Great! Let me know if you need another product."),
    ("okay", "👍 Great! Let me know if you need another product."),
    ("cool", "😎 Glad you like it!"),
    ("great", "🎉 Awesome! Anything else I can find for you?"),
    ("awesome", "🎉 Awesome! Anything else I can find for you?"),
    ("bye", "👋 Goodbye! Have a great day."),
    ("goodbye", "👋 Goodbye! Have a great day."),
    ("see you", "👋 See you soon!"),
    ("see you later", "👋 See you soon!"),
    ("are you a bot", "🤖 Yes, I'm an automated assistant for product search."),
    ("are you a bot?", "🤖 Yes, I'm an automated assistant for product search."),
    ("are you human", "🤖 No, I'm a bot, but I'm good at finding products!"),
    ("are you human?", "🤖 No, I'm a bot, but I'm good at finding products!"),
    ("what is the capital of france", "🇫🇷 The capital of France is Paris."),
    ("what is the capital of france?", "🇫🇷 The capital of France is Paris."),
    ("tell me a joke", "😄 Why did the shopping cart go to therapy? It had too many issues to carry."),
    ("what time is it", "⏰ I can't tell the time, but I can find you a nice clock!"),
    ("what time is it?", "⏰ I can't tell the time, but I can find you a nice clock!"),
    ("how do i contact a supplier", "📞 Every result lists the supplier's contact name, email and phone."),
    ("how do i contact a supplier?", "📞 Every result lists the supplier's contact name, email and phone."),
    ("do you deliver", "🚚 I only help you find products. Please ask the supplier about delivery."),
    ("do you deliver?", "🚚 I only help you find products. Please ask the supplier about delivery."),
    ("can i order here", "🛍️ Orders are placed directly with the supplier listed in each result."),
    ("can i order here?", "🛍️ Orders are placed directly with the supplier listed in each result."),
    ("i love you", "❤️ That's sweet! I'm here whenever you need a product."),
    ("sorry", "🙂 No problem at all!"),
];

static BUILTIN: Lazy<CannedResponses> = Lazy::new(|| {
    CannedResponses::from_pairs(
        BUILTIN_RESPONSES
            .iter()
            .map(|(phrase, reply)| (phrase.to_string(), reply.to_string())),
    )
});

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CannedResponses {
    entries: HashMap<String, String>,
}

impl CannedResponses {
    /// The built-in table.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load a table from a JSON object mapping phrases to replies.
    /// Phrases are normalized on load.
    pub fn from_json(raw: &str) -> Result<Self, CannedError> {
        let entries: HashMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self::from_pairs(entries))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CannedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(phrase, reply)| (normalize(&phrase), reply))
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, query: &str) -> Option<&str> {
        self.entries.get(&normalize(query)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_normalizes_query() {
        let table = CannedResponses::builtin();
        assert_eq!(
            table.lookup("  HI "),
            Some("👋 Hi! I'm your assistant, here to help.")
        );
        assert_eq!(
            table.lookup("What is the capital of France"),
            Some("🇫🇷 The capital of France is Paris.")
        );
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let table = CannedResponses::builtin();
        assert!(table.lookup("hi there").is_none());
        assert!(table.lookup("h").is_none());
        assert!(table.lookup("steel bolts").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_builtin_table_size() {
        assert!(CannedResponses::builtin().len() >= 50);
    }

    #[test]
    fn test_from_json_normalizes_keys() {
        let table = CannedResponses::from_json(r#"{" Ping ": "pong"}"#).unwrap();
        assert_eq!(table.lookup("PING"), Some("pong"));
        assert!(table.lookup("hi").is_none());
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            CannedResponses::from_json(r#"["hi"]"#),
            Err(CannedError::Parse(_))
        ));
    }
}

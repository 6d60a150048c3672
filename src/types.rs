use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const SEARCHING_TEXT: &str = "🔍 Searching for products...";
pub const NO_RESULTS_TEXT: &str = "❌ No products found for this query.";
pub const ERROR_TEXT: &str = "⚠ Error fetching product details. Try again later.";
pub const HISTORY_PLACEHOLDER_TEXT: &str = "No chat history available.";

/// One line of chat. The serialized form is the `chatHistory` storage shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    #[serde(rename = "isUser")]
    pub is_user: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }

    /// Lines of the message, each rendered as its own paragraph.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Chat,
    History,
}

/// Backends send prices either as JSON numbers or as preformatted strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display already drops a trailing `.0`, which matches JS number rendering
            Price::Amount(value) => write!(f, "{}", value),
            Price::Text(value) => write!(f, "{}", value.trim_start_matches('$')),
        }
    }
}

/// One product/supplier tuple returned by the search backend.
///
/// Display fields take whatever scalar the backend sends. Numbers and
/// booleans are rendered as text, `null` or a missing field as empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub supplier_name: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub supplier_contact_name: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub supplier_contact_email: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub supplier_contact_phone: String,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text),
        value @ (serde_json::Value::Number(_) | serde_json::Value::Bool(_)) => {
            Ok(value.to_string())
        }
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

impl ProductRecord {
    pub fn to_message(&self) -> Message {
        let price = match &self.price {
            Some(price) => format!("${}", price),
            None => "n/a".to_string(),
        };
        Message::bot(format!(
            "🛍️ {}\n💰 Price: {}\n📜 {}\n🏪 Supplier: {}\n👤 Contact: {}\n📧 Email: {}\n📞 Phone: {}",
            self.name,
            price,
            self.description,
            self.supplier_name,
            self.supplier_contact_name,
            self.supplier_contact_email,
            self.supplier_contact_phone,
        ))
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Moods offered by the journal form.
pub const MOODS: [&str; 5] = ["😀", "😊", "😐", "😢", "😡"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub mood: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
}

/// Accepts any JSON value for a stored field: `null` becomes empty, other
/// non-string values keep their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

impl Entry {
    /// UTC calendar day of the entry, `YYYY-MM-DD`.
    pub fn day(&self) -> &str {
        self.timestamp.get(..10).unwrap_or(&self.timestamp)
    }
}

/// Submission body. Any client-supplied `timestamp` is dropped on the floor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEntry {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntrySavedResponse {
    pub message: String,
    pub entry: Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub mood: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashbackItem {
    pub mood: String,
    pub date: String,
    pub notes: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimelineQuery {
    pub mode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlashbackQuery {
    pub mood: Option<String>,
    pub limit: Option<String>,
}

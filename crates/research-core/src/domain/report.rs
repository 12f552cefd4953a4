//! Report - orchestrator が返す成果物
//!
//! dispatcher にとっては不透明な pass-through payload です。

use serde::{Deserialize, Serialize};

/// Report は orchestrator の結果をそのまま運ぶ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(serde_json::Value);

impl Report {
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Markdown などテキストの report ならその中身
    pub fn as_text(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl From<String> for Report {
    fn from(s: String) -> Self {
        Self(serde_json::Value::String(s))
    }
}

impl From<&str> for Report {
    fn from(s: &str) -> Self {
        Self(serde_json::Value::String(s.to_string()))
    }
}

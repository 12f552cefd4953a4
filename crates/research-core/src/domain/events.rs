//! Events - stream 経由で observer に届くイベント
//!
//! wire 形式は `{"type": category, "content": name, "output": payload}` です。

use serde::{Deserialize, Serialize};

use super::report::Report;

/// 終端通知のカテゴリ
pub const LOGS_CATEGORY: &str = "logs";
/// 終端通知のイベント名
pub const RESEARCH_REPORT_EVENT: &str = "research_report";

/// StreamEvent は 1 件の進捗通知
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamEvent {
    #[serde(rename = "type")]
    pub category: String,
    #[serde(rename = "content")]
    pub name: String,
    #[serde(rename = "output")]
    pub payload: Report,
}

impl StreamEvent {
    pub fn new(category: impl Into<String>, name: impl Into<String>, payload: Report) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            payload,
        }
    }

    /// run 完了時に dispatcher が送る唯一のイベント
    pub fn research_report(report: Report) -> Self {
        Self::new(LOGS_CATEGORY, RESEARCH_REPORT_EVENT, report)
    }

    pub fn is_research_report(&self) -> bool {
        self.category == LOGS_CATEGORY && self.name == RESEARCH_REPORT_EVENT
    }
}

//! Task Document - 1 回の research run を駆動する設定
//!
//! 値空間は閉じた enum（Mapping / Sequence / Text / Scalar）で表現します。
//! placeholder 解決などの走査は `match` による構造再帰になり、
//! 「その他の型はそのまま通す」ケースもコンパイル時に網羅性が保証されます。
//!
//! JSON との相互変換は `serde_json::Value` を経由します。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 文字列・mapping・sequence 以外の葉の値
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
}

/// Task Document に現れる任意の値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum TaskValue {
    Mapping(BTreeMap<String, TaskValue>),
    Sequence(Vec<TaskValue>),
    Text(String),
    Scalar(Scalar),
}

impl TaskValue {
    pub fn text(s: impl Into<String>) -> Self {
        TaskValue::Text(s.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TaskValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, TaskValue>> {
        match self {
            TaskValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[TaskValue]> {
        match self {
            TaskValue::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for TaskValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => TaskValue::Mapping(
                map.into_iter().map(|(k, v)| (k, TaskValue::from(v))).collect(),
            ),
            serde_json::Value::Array(items) => {
                TaskValue::Sequence(items.into_iter().map(TaskValue::from).collect())
            }
            serde_json::Value::String(s) => TaskValue::Text(s),
            serde_json::Value::Number(n) => TaskValue::Scalar(Scalar::Number(n)),
            serde_json::Value::Bool(b) => TaskValue::Scalar(Scalar::Bool(b)),
            serde_json::Value::Null => TaskValue::Scalar(Scalar::Null),
        }
    }
}

impl From<TaskValue> for serde_json::Value {
    fn from(value: TaskValue) -> Self {
        match value {
            TaskValue::Mapping(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            TaskValue::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            TaskValue::Text(s) => serde_json::Value::String(s),
            TaskValue::Scalar(Scalar::Number(n)) => serde_json::Value::Number(n),
            TaskValue::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(b),
            TaskValue::Scalar(Scalar::Null) => serde_json::Value::Null,
        }
    }
}

impl From<&str> for TaskValue {
    fn from(s: &str) -> Self {
        TaskValue::Text(s.to_string())
    }
}

impl From<String> for TaskValue {
    fn from(s: String) -> Self {
        TaskValue::Text(s)
    }
}

/// TaskDocument は解決済みの top-level mapping
///
/// # Invariants
/// - `TaskLoader` が返す document は空ではない
/// - key の順序は意味を持たない（BTreeMap で保持）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDocument {
    entries: BTreeMap<String, TaskValue>,
}

impl TaskDocument {
    /// `model` key
    pub const MODEL_KEY: &'static str = "model";
    /// `query` key
    pub const QUERY_KEY: &'static str = "query";

    pub fn new(entries: BTreeMap<String, TaskValue>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&TaskValue> {
        self.entries.get(key)
    }

    /// key に値を設定（既存の値は置き換える）
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TaskValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn model(&self) -> Option<&str> {
        self.get(Self::MODEL_KEY).and_then(TaskValue::as_str)
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.insert(Self::MODEL_KEY, model.into());
    }

    pub fn query(&self) -> Option<&str> {
        self.get(Self::QUERY_KEY).and_then(TaskValue::as_str)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.insert(Self::QUERY_KEY, query.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn into_value(self) -> TaskValue {
        TaskValue::Mapping(self.entries)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self.clone().into_value())
    }
}

impl From<BTreeMap<String, TaskValue>> for TaskDocument {
    fn from(entries: BTreeMap<String, TaskValue>) -> Self {
        Self::new(entries)
    }
}

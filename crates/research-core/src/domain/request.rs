//! ResearchRequest - orchestrator に渡す 1 回分の作業単位
//!
//! dispatch ごとに新しく組み立て、orchestrator に所有権ごと渡して捨てます。

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::document::TaskDocument;
use super::ids::RunId;
use super::tone::Tone;
use crate::ports::EventSink;

/// 追加の HTTP header など（orchestrator 側でそのまま使われる）
pub type Headers = BTreeMap<String, String>;

pub struct ResearchRequest {
    pub task: TaskDocument,
    /// untracked run のみ Some
    pub run_id: Option<RunId>,
    pub tone: Tone,
    pub headers: Headers,
    /// 途中経過の送信先。None なら streaming 無効
    pub stream: Option<Arc<dyn EventSink>>,
    /// `LANGCHAIN_TRACING_V2` を orchestrator の環境で有効にするか
    pub langchain_tracing: bool,
}

impl ResearchRequest {
    pub fn new(task: TaskDocument) -> Self {
        Self {
            task,
            run_id: None,
            tone: Tone::default(),
            headers: Headers::new(),
            stream: None,
            langchain_tracing: false,
        }
    }

    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_stream(mut self, stream: Option<Arc<dyn EventSink>>) -> Self {
        self.stream = stream;
        self
    }

    pub fn with_langchain_tracing(mut self, enabled: bool) -> Self {
        self.langchain_tracing = enabled;
        self
    }

    pub fn is_streaming(&self) -> bool {
        self.stream.is_some()
    }
}

impl fmt::Debug for ResearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResearchRequest")
            .field("task", &self.task)
            .field("run_id", &self.run_id)
            .field("tone", &self.tone)
            .field("headers", &self.headers)
            .field("streaming", &self.is_streaming())
            .field("langchain_tracing", &self.langchain_tracing)
            .finish()
    }
}

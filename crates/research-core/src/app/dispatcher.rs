//! Dispatcher - 解決済み task を orchestrator に渡す 2 つの入口
//!
//! - **run**: untracked run。新しい RunId を付けて実行し、report だけ返す
//! - **run_streaming**: task を読み直して query を差し込み、実行後に
//!   sink があれば終端イベントを 1 回だけ送る
//!
//! どちらも retry はせず、失敗はそのまま呼び出し元へ返します。
//! await は orchestrator の完了待ち（と終端イベントの送信）だけです。

use std::sync::Arc;

use crate::config::TaskLoader;
use crate::domain::{
    ConfigError, Headers, Report, ResearchError, ResearchRequest, RunState, StreamEvent,
    TaskDocument, Tone,
};
use crate::ports::{EnvLookup, EventSink, IdGenerator, Orchestrator, langchain_tracing_enabled};

/// run_streaming の任意引数
///
/// sink を持っていれば streaming 有効です。
#[derive(Default)]
pub struct StreamOptions {
    pub sink: Option<Arc<dyn EventSink>>,
    pub tone: Tone,
    pub headers: Headers,
}

impl StreamOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// `CallbackSink::pair` の結果などをそのまま渡す
    pub fn with_optional_sink(mut self, sink: Option<Arc<dyn EventSink>>) -> Self {
        self.sink = sink;
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
}

pub struct Dispatcher {
    orchestrator: Arc<dyn Orchestrator>,
    loader: TaskLoader,
    env: Arc<dyn EnvLookup>,
    id_generator: Arc<dyn IdGenerator>,
}

impl Dispatcher {
    pub(crate) fn new(
        orchestrator: Arc<dyn Orchestrator>,
        loader: TaskLoader,
        env: Arc<dyn EnvLookup>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            orchestrator,
            loader,
            env,
            id_generator,
        }
    }

    pub fn loader(&self) -> &TaskLoader {
        &self.loader
    }

    /// 既定の task を読み込む（untracked run の前段）
    pub fn open_task(&self) -> Result<TaskDocument, ConfigError> {
        self.loader.open_task()
    }

    /// Untracked run
    ///
    /// 外から進捗は見えず、呼び出し元は最終 report だけを受け取ります。
    pub async fn run(&self, task: TaskDocument) -> Result<Report, ResearchError> {
        let run_id = self.id_generator.generate_run_id();
        let request = ResearchRequest::new(task)
            .with_run_id(run_id)
            .with_langchain_tracing(self.langchain_tracing());

        tracing::info!(%run_id, state = RunState::Pending.as_str(), "starting research run");
        let result = self.orchestrator.run_research_task(request).await;
        log_settled(&result, Some(&run_id.to_string()));

        Ok(result?)
    }

    /// Streaming run
    ///
    /// 1. task を読み込む
    /// 2. `query` を書き込む
    /// 3. orchestrator を実行して report を待つ
    /// 4. sink があれば `("logs", "research_report", report)` を 1 回送る
    pub async fn run_streaming(
        &self,
        query: impl Into<String>,
        options: StreamOptions,
    ) -> Result<Report, ResearchError> {
        let StreamOptions {
            sink,
            tone,
            headers,
        } = options;

        let mut task = self.loader.open_task().inspect_err(|e| {
            tracing::warn!(error = %e, "failed to load task");
        })?;
        task.set_query(query);

        let request = ResearchRequest::new(task)
            .with_tone(tone)
            .with_headers(headers)
            .with_stream(sink.clone())
            .with_langchain_tracing(self.langchain_tracing());

        tracing::info!(
            state = RunState::Pending.as_str(),
            %tone,
            streaming = request.is_streaming(),
            "starting research run"
        );
        let result = self.orchestrator.run_research_task(request).await;
        log_settled(&result, None);
        let report = result?;

        if let Some(sink) = sink {
            sink.emit(StreamEvent::research_report(report.clone()))
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "failed to emit research report"))?;
        }

        Ok(report)
    }

    fn langchain_tracing(&self) -> bool {
        langchain_tracing_enabled(self.env.as_ref())
    }
}

fn log_settled<E: std::fmt::Display>(result: &Result<Report, E>, run_id: Option<&str>) {
    let state = RunState::settle(result);
    match result {
        Ok(_) => tracing::info!(run_id, state = state.as_str(), "research run completed"),
        Err(e) => tracing::warn!(run_id, state = state.as_str(), error = %e, "research run failed"),
    }
}

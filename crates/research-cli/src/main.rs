use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use async_trait::async_trait;
use clap::Parser;

use research_core::domain::{Headers, OrchestratorError, Report, ResearchRequest, StreamEvent};
use research_core::impls::ChannelSink;
use research_core::observability::init_tracing;
use research_core::{DispatcherBuilder, Orchestrator, StreamOptions, Tone};

/// Resolve the research task and hand it to the orchestrator.
#[derive(Debug, Parser)]
#[command(name = "research-cli", version)]
struct Args {
    /// Query to research. Without it the bundled task runs untracked.
    query: Option<String>,

    /// Task document to load instead of the bundled task.json
    #[arg(long, value_name = "PATH")]
    task: Option<PathBuf>,

    /// Report tone (Objective, Formal, Analytical, ...)
    #[arg(long, default_value_t = Tone::Objective)]
    tone: Tone,

    /// Extra header forwarded to the orchestrator, as KEY=VALUE
    #[arg(long = "header", value_name = "KEY=VALUE")]
    headers: Vec<String>,
}

/// demo 用の orchestrator：解決済み task をそのまま report として返す
struct EchoOrchestrator;

#[async_trait]
impl Orchestrator for EchoOrchestrator {
    async fn run_research_task(
        &self,
        request: ResearchRequest,
    ) -> Result<Report, OrchestratorError> {
        tracing::info!(
            model = request.task.model().unwrap_or("<unset>"),
            query = request.task.query().unwrap_or("<unset>"),
            tone = %request.tone,
            langchain_tracing = request.langchain_tracing,
            "echo orchestrator received task"
        );

        if let Some(stream) = &request.stream {
            let outline = Report::from(format!(
                "planning sections for '{}'",
                request.task.query().unwrap_or_default()
            ));
            stream
                .emit(StreamEvent::new("logs", "planning", outline))
                .await
                .map_err(|e| OrchestratorError::with_source("failed to stream progress", e))?;
        }

        Ok(Report::new(serde_json::json!({
            "run_id": request.run_id.map(|id| id.to_string()),
            "tone": request.tone.description(),
            "headers": request.headers,
            "task": request.task.to_json(),
        })))
    }
}

/// `.env` を core crate、workspace root、カレントディレクトリの順に読む
///
/// すでに設定されている値は上書きしない（shell の環境が常に優先）。
/// 読み込めたファイルを返す。
fn load_env_files() -> Vec<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        manifest_dir.join("../research-core/.env"),
        manifest_dir.join("../../.env"),
    ];

    let mut loaded: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|path| dotenv::from_path(path).is_ok())
        .collect();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }
    loaded
}

fn parse_headers(raw: &[String]) -> anyhow::Result<Headers> {
    let mut headers = Headers::new();
    for entry in raw {
        let Some((key, value)) = entry.split_once('=') else {
            bail!("invalid header '{entry}': expected KEY=VALUE");
        };
        headers.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(headers)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_files = load_env_files();
    init_tracing();
    for path in &env_files {
        tracing::debug!(path = %path.display(), "loaded env file");
    }

    let args = Args::parse();
    let headers = parse_headers(&args.headers)?;

    let mut builder = DispatcherBuilder::new().orchestrator(EchoOrchestrator);
    if let Some(path) = &args.task {
        builder = builder.task_path(path);
    }
    let dispatcher = builder.build()?;

    let report = match args.query {
        None => {
            let task = dispatcher
                .open_task()
                .with_context(|| format!("loading {}", dispatcher.loader().path().display()))?;
            dispatcher.run(task).await?
        }
        Some(query) => {
            let (sink, mut rx) = ChannelSink::channel();

            // websocket の代わりに JSON lines で stdout に流す
            let printer = tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    match serde_json::to_string(&event) {
                        Ok(line) => println!("{line}"),
                        Err(e) => tracing::warn!(error = %e, "failed to encode stream event"),
                    }
                }
            });

            let options = StreamOptions::new()
                .with_sink(sink)
                .with_tone(args.tone)
                .with_headers(headers);
            let report = dispatcher.run_streaming(query, options).await;

            // sink が drop されると printer は終わる
            printer.await.context("stream printer panicked")?;
            report?
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

//! Errors - エラー型と分類
//!
//! どのエラーも握りつぶさず、そのまま呼び出し元へ伝播します。
//! 未解決の placeholder はエラーではありません（リテラルとして残る）。

use std::path::PathBuf;

use thiserror::Error;

/// ErrorKind は dispatch エラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// task ファイルの欠落・破損・空
    Configuration,
    /// orchestrator 実行中の失敗
    Orchestrator,
    /// 終端イベント送信の失敗
    Emission,
}

/// ConfigError は task document の読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read task file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse task file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "no task found in '{}'. Please ensure a valid task file is present and contains the necessary task information",
        .path.display()
    )]
    NoTask { path: PathBuf },

    #[error("task file '{}' must contain a JSON object at the top level", .path.display())]
    NotAMapping { path: PathBuf },
}

/// OrchestratorError は orchestrator が返す不透明なエラー
#[derive(Debug, Error)]
#[error("orchestrator failed: {message}")]
pub struct OrchestratorError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl OrchestratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// EmitError は stream sink への送信エラー
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("stream channel is closed")]
    ChannelClosed,

    #[error("emit failed: {0}")]
    Failed(String),
}

/// ResearchError は dispatcher の入口が返すエラー
#[derive(Debug, Error)]
pub enum ResearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),

    #[error("failed to emit research report: {0}")]
    Emission(#[from] EmitError),
}

impl ResearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResearchError::Config(_) => ErrorKind::Configuration,
            ResearchError::Orchestrator(_) => ErrorKind::Orchestrator,
            ResearchError::Emission(_) => ErrorKind::Emission,
        }
    }
}

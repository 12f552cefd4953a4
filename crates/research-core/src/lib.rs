//! research-core
//!
//! Entry point of the research-task runner: resolves a task document from a
//! file and the environment, then hands it to an external orchestrator.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（TaskDocument, RunId, Tone, Report, StreamEvent, errors）
//! - **ports**: 抽象化レイヤー（EnvLookup, Orchestrator, EventSink, Clock, IdGenerator）
//! - **config**: placeholder 解決、model override、TaskLoader
//! - **app**: Dispatcher とその builder
//! - **impls**: 実装（ProcessEnv, MapEnv, ChannelSink, CallbackSink）
//! - **observability**: tracing の初期化

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod observability;
pub mod ports;

pub use app::{BuildError, Dispatcher, DispatcherBuilder, StreamOptions};
pub use config::{ModelOverride, Placeholder, PlaceholderResolver, TaskLoader};
pub use domain::{
    ConfigError, EmitError, ErrorKind, Headers, OrchestratorError, Report, ResearchError,
    ResearchRequest, RunId, StreamEvent, TaskDocument, TaskValue, Tone,
};
pub use ports::{EnvLookup, EventSink, Orchestrator};

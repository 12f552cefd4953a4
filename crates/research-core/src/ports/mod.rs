//! Ports - 抽象化レイヤー
//!
//! 外部の collaborator（環境変数、orchestrator、stream 送信先、時刻、ID）への
//! インターフェースを trait で定義し、実装の詳細を隠蔽します。

pub mod clock;
pub mod env;
pub mod event_sink;
pub mod id_generator;
pub mod orchestrator;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::env::{EnvLookup, langchain_tracing_enabled};
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::orchestrator::Orchestrator;

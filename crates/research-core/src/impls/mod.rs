//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **ProcessEnv / MapEnv**: EnvLookup（本番用 / テスト用）
//! - **ChannelSink**: tokio mpsc channel へ送る EventSink
//! - **CallbackSink**: transport channel + emit callback の EventSink

pub mod callback_sink;
pub mod channel_sink;
pub mod env;

// 主要な型を再エクスポート
pub use self::callback_sink::CallbackSink;
pub use self::channel_sink::ChannelSink;
pub use self::env::{MapEnv, ProcessEnv};

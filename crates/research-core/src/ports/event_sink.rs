//! EventSink port - stream 送信先の抽象化
//!
//! 「channel と emit callback の両方がある」状態を 1 つの値で表します。
//! sink を持っていれば streaming 有効、`None` なら無効です。
//!
//! # 実装
//! - **ChannelSink**: tokio mpsc channel へ送る
//! - **CallbackSink**: channel + emit callback の組

use async_trait::async_trait;

use crate::domain::{EmitError, StreamEvent};

/// EventSink は StreamEvent を observer に届ける
///
/// dispatcher は run ごとに高々 1 回、orchestrator の完了後にだけ呼びます。
/// orchestrator は同じ sink に途中経過を送って構いません。
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: StreamEvent) -> Result<(), EmitError>;
}

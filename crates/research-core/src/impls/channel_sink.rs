//! ChannelSink - tokio mpsc channel への送信
//!
//! websocket などの transport に橋渡しする側は receiver を持って
//! 1 件ずつ転送します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::{EmitError, StreamEvent};
use crate::ports::EventSink;

#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<StreamEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<StreamEvent>) -> Self {
        Self { tx }
    }

    /// sink と receiver の組を作る
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<StreamEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl EventSink for ChannelSink {
    async fn emit(&self, event: StreamEvent) -> Result<(), EmitError> {
        self.tx.send(event).map_err(|_| EmitError::ChannelClosed)
    }
}

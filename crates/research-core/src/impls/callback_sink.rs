//! CallbackSink - transport channel と emit callback の組
//!
//! 呼び出し側が「channel」と「emit callback」を別々に持っている場合の adapter です。
//! 両方そろったときだけ sink になり、片方だけなら streaming は黙って無効になります。

use std::future::Future;

use async_trait::async_trait;

use crate::domain::{EmitError, StreamEvent};
use crate::ports::EventSink;

/// CallbackSink は `emit(event, channel)` を呼ぶ EventSink
///
/// `C` は websocket handle などの transport（clone して callback に渡す）。
pub struct CallbackSink<C, F> {
    channel: C,
    emit: F,
}

impl<C, F, Fut> CallbackSink<C, F>
where
    C: Clone + Send + Sync,
    F: Fn(StreamEvent, C) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), EmitError>> + Send,
{
    pub fn new(channel: C, emit: F) -> Self {
        Self { channel, emit }
    }

    /// channel と callback の両方があるときだけ Some
    pub fn pair(channel: Option<C>, emit: Option<F>) -> Option<Self> {
        match (channel, emit) {
            (Some(channel), Some(emit)) => Some(Self::new(channel, emit)),
            (None, None) => None,
            (channel, emit) => {
                tracing::debug!(
                    has_channel = channel.is_some(),
                    has_emit = emit.is_some(),
                    "streaming disabled: channel and emit callback must both be supplied"
                );
                None
            }
        }
    }
}

#[async_trait]
impl<C, F, Fut> EventSink for CallbackSink<C, F>
where
    C: Clone + Send + Sync,
    F: Fn(StreamEvent, C) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), EmitError>> + Send,
{
    async fn emit(&self, event: StreamEvent) -> Result<(), EmitError> {
        (self.emit)(event, self.channel.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Report;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<(String, String, String)>>>;
    type Ready = std::future::Ready<Result<(), EmitError>>;

    async fn record(event: StreamEvent, channel: Log) -> Result<(), EmitError> {
        channel.lock().unwrap().push((
            event.category,
            event.name,
            event.payload.as_text().unwrap_or_default().to_string(),
        ));
        Ok(())
    }

    #[tokio::test]
    async fn passes_event_and_channel_to_callback() {
        let log: Log = Arc::default();
        let sink = CallbackSink::new(log.clone(), record);

        sink.emit(StreamEvent::research_report(Report::from("# Report")))
            .await
            .unwrap();

        let entries = log.lock().unwrap();
        assert_eq!(
            *entries,
            vec![("logs".into(), "research_report".into(), "# Report".into())]
        );
    }

    #[test]
    fn pair_requires_both_parts() {
        let log: Log = Arc::default();

        assert!(CallbackSink::pair(Some(log.clone()), Some(record)).is_some());
        assert!(CallbackSink::pair(Some(log.clone()), None::<fn(StreamEvent, Log) -> Ready>).is_none());
        assert!(CallbackSink::<Log, _>::pair(None, Some(record)).is_none());
    }

    #[tokio::test]
    async fn callback_errors_are_returned() {
        let sink = CallbackSink::new((), |_event: StreamEvent, _channel: ()| async {
            Err(EmitError::Failed("socket gone".into()))
        });

        let err = sink
            .emit(StreamEvent::research_report(Report::from("x")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "emit failed: socket gone");
    }
}

//! Orchestrator port - research pipeline 本体への入口
//!
//! report を実際に作る multi-agent pipeline は外部コンポーネントです。
//! dispatcher は `ResearchRequest` を組み立てて 1 回呼び、結果を待つだけです。

use async_trait::async_trait;

use crate::domain::{OrchestratorError, Report, ResearchRequest};

/// Orchestrator は 1 件の research を最後まで実行して report を返す
///
/// # 契約
/// - request は所有権ごと渡される（run ごとに新規）
/// - 途中経過の送信は `request.stream` を使って orchestrator 自身が行う
/// - 失敗はそのまま `OrchestratorError` で返す（dispatcher は retry しない）
/// - cancellation / timeout は orchestrator と async runtime に任せる
#[async_trait]
pub trait Orchestrator: Send + Sync {
    async fn run_research_task(&self, request: ResearchRequest)
    -> Result<Report, OrchestratorError>;
}

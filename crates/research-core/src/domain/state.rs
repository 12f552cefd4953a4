//! State - run の状態

/// RunState は 1 回の dispatch の状態
///
/// # 状態遷移
/// - pending: task 読み込み済み、orchestrator 未起動
/// - completed: report を返した
/// - failed: エラーを伝播した
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Pending,
    Completed,
    Failed,
}

impl RunState {
    /// 結果から終端状態を決める
    pub fn settle<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => RunState::Completed,
            Err(_) => RunState::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunState::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Pending => "pending",
            RunState::Completed => "completed",
            RunState::Failed => "failed",
        }
    }
}

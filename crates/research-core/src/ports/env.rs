//! EnvLookup port - 環境変数の参照を抽象化
//!
//! process の環境はグローバルな可変状態なので、core は直接読みません。
//! テストでは `MapEnv` を渡して決定的に動かします。
//!
//! # 実装
//! - **ProcessEnv**: `std::env` を読む（本番用）
//! - **MapEnv**: HashMap ベース（テスト用）

/// strategic model の上書き（`provider:model` または `model`）
pub const STRATEGIC_LLM: &str = "STRATEGIC_LLM";
/// 設定されていれば LangChain tracing を有効にする
pub const LANGCHAIN_API_KEY: &str = "LANGCHAIN_API_KEY";
/// orchestrator の環境に立てる tracing flag の名前
pub const LANGCHAIN_TRACING_V2: &str = "LANGCHAIN_TRACING_V2";

/// EnvLookup は名前から値を引く読み取り専用の環境
///
/// # Thread Safety
/// - `Send + Sync` を要求（並行 run から共有される）
pub trait EnvLookup: Send + Sync {
    /// 変数が設定されていれば値を返す（空文字列も「設定あり」）
    fn var(&self, name: &str) -> Option<String>;

    /// 設定されていて空でない値のみ返す
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|v| !v.is_empty())
    }
}

/// `LANGCHAIN_API_KEY` が空でなく設定されているか
pub fn langchain_tracing_enabled(env: &dyn EnvLookup) -> bool {
    env.non_empty_var(LANGCHAIN_API_KEY).is_some()
}

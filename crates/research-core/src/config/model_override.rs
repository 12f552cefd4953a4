//! ModelOverride - `STRATEGIC_LLM` による model の上書き

use crate::ports::EnvLookup;
use crate::ports::env::STRATEGIC_LLM;

/// ModelOverride は `provider:model` または bare な model 名
///
/// 最初の `:` だけが区切りとして意味を持ちます
/// （`openrouter:meta/llama:70b` の model は `meta/llama:70b`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOverride {
    pub provider: Option<String>,
    pub model: String,
}

impl ModelOverride {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((provider, model)) => Self {
                provider: Some(provider.to_string()),
                model: model.to_string(),
            },
            None => Self {
                provider: None,
                model: raw.to_string(),
            },
        }
    }

    /// `STRATEGIC_LLM` が空でなく設定されていれば Some
    pub fn from_env(env: &dyn EnvLookup) -> Option<Self> {
        env.non_empty_var(STRATEGIC_LLM).map(|raw| Self::parse(&raw))
    }
}

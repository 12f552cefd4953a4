//! EnvLookup の実装

use std::collections::HashMap;

use crate::ports::EnvLookup;

/// ProcessEnv は process の環境変数を読む
///
/// UTF-8 でない値は未設定として扱います。
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        std::env::var(name).ok()
    }
}

/// MapEnv は HashMap ベースの環境（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::env::{LANGCHAIN_API_KEY, langchain_tracing_enabled};

    #[test]
    fn map_env_distinguishes_empty_from_unset() {
        let mut env = MapEnv::new();
        env.set("EMPTY", "");

        assert_eq!(env.var("EMPTY").as_deref(), Some(""));
        assert_eq!(env.non_empty_var("EMPTY"), None);
        assert_eq!(env.var("UNSET"), None);
    }

    #[test]
    fn process_env_reads_path() {
        // PATH は CI でもほぼ確実に設定されている
        assert!(ProcessEnv.var("PATH").is_some());
        assert_eq!(ProcessEnv.var(""), None);
    }

    #[test]
    fn langchain_tracing_requires_non_empty_key() {
        assert!(!langchain_tracing_enabled(&MapEnv::new()));
        assert!(!langchain_tracing_enabled(&MapEnv::from_pairs([(LANGCHAIN_API_KEY, "")])));
        assert!(langchain_tracing_enabled(&MapEnv::from_pairs([(LANGCHAIN_API_KEY, "ls-key")])));
    }
}

//! TaskLoader - task document の読み込み
//!
//! 1. 固定パス（既定はこの crate の `task.json`）を読む
//! 2. JSON として parse
//! 3. document 全体の placeholder を解決
//! 4. 空なら `ConfigError::NoTask`
//! 5. `STRATEGIC_LLM` があれば `model` を上書き
//!
//! キャッシュはしません。呼ぶたびにファイルと環境を読み直します。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::model_override::ModelOverride;
use crate::config::placeholder::PlaceholderResolver;
use crate::domain::{ConfigError, Scalar, TaskDocument, TaskValue};
use crate::ports::EnvLookup;

/// crate に同梱されている既定の task ファイル
pub const DEFAULT_TASK_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/task.json");

#[derive(Clone)]
pub struct TaskLoader {
    path: PathBuf,
    env: Arc<dyn EnvLookup>,
}

impl TaskLoader {
    /// 既定パスを読む loader
    pub fn new(env: Arc<dyn EnvLookup>) -> Self {
        Self::with_path(DEFAULT_TASK_PATH, env)
    }

    pub fn with_path(path: impl Into<PathBuf>, env: Arc<dyn EnvLookup>) -> Self {
        Self {
            path: path.into(),
            env,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open_task(&self) -> Result<TaskDocument, ConfigError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        self.parse_task(&content)
    }

    /// ファイル内容から task document を組み立てる（読み込み以外の手順すべて）
    pub fn parse_task(&self, content: &str) -> Result<TaskDocument, ConfigError> {
        let parsed: serde_json::Value =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let resolved = PlaceholderResolver::new(self.env.as_ref()).resolve(TaskValue::from(parsed));

        let mut task = match resolved {
            TaskValue::Mapping(entries) if !entries.is_empty() => TaskDocument::new(entries),
            value if is_empty(&value) => {
                return Err(ConfigError::NoTask {
                    path: self.path.clone(),
                });
            }
            _ => {
                return Err(ConfigError::NotAMapping {
                    path: self.path.clone(),
                });
            }
        };

        if let Some(model_override) = ModelOverride::from_env(self.env.as_ref()) {
            tracing::debug!(
                provider = model_override.provider.as_deref(),
                model = %model_override.model,
                "overriding task model from STRATEGIC_LLM"
            );
            task.set_model(model_override.model);
        }

        Ok(task)
    }
}

fn is_empty(value: &TaskValue) -> bool {
    match value {
        TaskValue::Mapping(entries) => entries.is_empty(),
        TaskValue::Sequence(items) => items.is_empty(),
        TaskValue::Text(s) => s.is_empty(),
        TaskValue::Scalar(Scalar::Null) => true,
        TaskValue::Scalar(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::MapEnv;
    use crate::ports::env::STRATEGIC_LLM;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_task(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("task.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn loader(path: PathBuf, env: MapEnv) -> TaskLoader {
        TaskLoader::with_path(path, Arc::new(env))
    }

    #[test]
    fn default_path_points_at_bundled_task() {
        let loader = TaskLoader::new(Arc::new(MapEnv::new()));
        assert!(loader.path().ends_with("task.json"));

        let task = loader.open_task().unwrap();
        assert_eq!(task.model(), Some("gpt-4o"));
        assert!(task.get("max_sections").is_some());
    }

    #[test]
    fn resolves_placeholders_in_file() {
        let dir = TempDir::new().unwrap();
        let path = write_task(
            &dir,
            r#"{"model": "${STRATEGIC_LLM}", "max_sections": 3, "api": "$SEARCH_KEY"}"#,
        );
        let env = MapEnv::from_pairs([(STRATEGIC_LLM, "gpt-4o"), ("SEARCH_KEY", "tvly-123")]);

        let task = loader(path, env).open_task().unwrap();

        assert_eq!(
            task.to_json(),
            json!({"model": "gpt-4o", "max_sections": 3, "api": "tvly-123"})
        );
    }

    #[rstest]
    #[case::provider_form("openai:gpt-4")]
    #[case::bare_form("gpt-4")]
    fn strategic_llm_overrides_model(#[case] strategic_llm: &str) {
        let dir = TempDir::new().unwrap();
        let path = write_task(&dir, r#"{"model": "gpt-4o-mini", "verbose": true}"#);
        let env = MapEnv::from_pairs([(STRATEGIC_LLM, strategic_llm)]);

        let task = loader(path, env).open_task().unwrap();
        assert_eq!(task.model(), Some("gpt-4"));
    }

    #[test]
    fn override_applies_after_placeholder_resolution() {
        let dir = TempDir::new().unwrap();
        let path = write_task(&dir, r#"{"model": "${STRATEGIC_LLM}", "max_sections": 3}"#);
        let env = MapEnv::from_pairs([(STRATEGIC_LLM, "openai:gpt-4o")]);

        let task = loader(path, env).open_task().unwrap();

        // placeholder は "openai:gpt-4o" に解決され、その後 override で上書きされる
        assert_eq!(task.to_json(), json!({"model": "gpt-4o", "max_sections": 3}));
    }

    #[test]
    fn override_inserts_missing_model_key() {
        let dir = TempDir::new().unwrap();
        let path = write_task(&dir, r#"{"max_sections": 1}"#);
        let env = MapEnv::from_pairs([(STRATEGIC_LLM, "gpt-4")]);

        let task = loader(path, env).open_task().unwrap();
        assert_eq!(task.model(), Some("gpt-4"));
    }

    #[test]
    fn unresolved_placeholders_stay_literal() {
        let dir = TempDir::new().unwrap();
        let path = write_task(&dir, r#"{"model": "${STRATEGIC_LLM}"}"#);

        let task = loader(path, MapEnv::new()).open_task().unwrap();
        assert_eq!(task.model(), Some("${STRATEGIC_LLM}"));
    }

    #[rstest]
    #[case::empty_object("{}")]
    #[case::null("null")]
    #[case::empty_array("[]")]
    #[case::empty_string(r#""""#)]
    fn empty_document_is_no_task(#[case] content: &str) {
        let dir = TempDir::new().unwrap();
        let path = write_task(&dir, content);

        let err = loader(path, MapEnv::new()).open_task().unwrap_err();
        assert!(matches!(err, ConfigError::NoTask { .. }));
    }

    #[test]
    fn non_mapping_document_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_task(&dir, r#"["query"]"#);

        let err = loader(path, MapEnv::new()).open_task().unwrap_err();
        assert!(matches!(err, ConfigError::NotAMapping { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let err = loader(path.clone(), MapEnv::new()).open_task().unwrap_err();
        match err {
            ConfigError::Read { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_task(&dir, r#"{"model": "#);

        let err = loader(path, MapEnv::new()).open_task().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn every_call_rereads_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write_task(&dir, r#"{"model": "a"}"#);
        let loader = loader(path.clone(), MapEnv::new());

        assert_eq!(loader.open_task().unwrap().model(), Some("a"));
        std::fs::write(&path, r#"{"model": "b"}"#).unwrap();
        assert_eq!(loader.open_task().unwrap().model(), Some("b"));
    }
}

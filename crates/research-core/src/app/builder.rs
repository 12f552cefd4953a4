//! DispatcherBuilder - Dispatcher の構築とワイヤリング
//!
//! orchestrator だけが必須です。それ以外は本番用の既定値を使います:
//! - env: `ProcessEnv`
//! - task_path: crate 同梱の `task.json`
//! - id_generator: `UlidGenerator<SystemClock>`

use std::path::PathBuf;
use std::sync::Arc;

use crate::app::dispatcher::Dispatcher;
use crate::config::{DEFAULT_TASK_PATH, TaskLoader};
use crate::impls::ProcessEnv;
use crate::ports::{EnvLookup, IdGenerator, Orchestrator, SystemClock, UlidGenerator};

/// DispatcherBuilder は Dispatcher を構築
///
/// # 使用例
/// ```ignore
/// let dispatcher = DispatcherBuilder::new()
///     .orchestrator(ChiefEditor::new())
///     .task_path("multi_agents/task.json")
///     .build()?;
/// ```
#[derive(Default)]
pub struct DispatcherBuilder {
    orchestrator: Option<Arc<dyn Orchestrator>>,
    env: Option<Arc<dyn EnvLookup>>,
    task_path: Option<PathBuf>,
    id_generator: Option<Arc<dyn IdGenerator>>,
}

/// BuildError は Dispatcher 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no orchestrator configured. Call `orchestrator()` before `build()`.")]
    MissingOrchestrator,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orchestrator(self, orchestrator: impl Orchestrator + 'static) -> Self {
        self.orchestrator_arc(Arc::new(orchestrator))
    }

    /// 呼び出し側と共有している orchestrator を使う
    pub fn orchestrator_arc(mut self, orchestrator: Arc<dyn Orchestrator>) -> Self {
        self.orchestrator = Some(orchestrator);
        self
    }

    pub fn env(mut self, env: impl EnvLookup + 'static) -> Self {
        self.env = Some(Arc::new(env));
        self
    }

    pub fn task_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.task_path = Some(path.into());
        self
    }

    pub fn id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Some(Arc::new(id_generator));
        self
    }

    pub fn build(self) -> Result<Dispatcher, BuildError> {
        let orchestrator = self.orchestrator.ok_or(BuildError::MissingOrchestrator)?;
        let env = self.env.unwrap_or_else(|| Arc::new(ProcessEnv));
        let task_path = self
            .task_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASK_PATH));
        let id_generator = self
            .id_generator
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(SystemClock)));

        let loader = TaskLoader::with_path(task_path, env.clone());
        Ok(Dispatcher::new(orchestrator, loader, env, id_generator))
    }
}

//! Config - task document の解決
//!
//! - **placeholder**: `${NAME}` / `$NAME` の検出と構造再帰での解決
//! - **model_override**: `STRATEGIC_LLM` の parse
//! - **loader**: ファイル読み込みから override までの一連の手順

pub mod loader;
pub mod model_override;
pub mod placeholder;

pub use self::loader::{DEFAULT_TASK_PATH, TaskLoader};
pub use self::model_override::ModelOverride;
pub use self::placeholder::{Placeholder, PlaceholderResolver};

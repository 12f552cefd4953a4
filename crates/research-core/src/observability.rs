//! Observability - tracing subscriber の初期化

use tracing_subscriber::EnvFilter;

/// 既定の filter（`RUST_LOG` がないとき）
pub const DEFAULT_FILTER: &str = "info";

/// fmt subscriber を登録する
///
/// `RUST_LOG` があればそれを使います。すでに subscriber が登録済みなら何もしません。
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

//! App - アプリケーション層
//!
//! ports を組み合わせて dispatch の手順を実装します。
//!
//! # 主要コンポーネント
//! - **DispatcherBuilder**: collaborator のワイヤリング
//! - **Dispatcher**: untracked run と streaming run の 2 つの入口

pub mod builder;
pub mod dispatcher;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, DispatcherBuilder};
pub use self::dispatcher::{Dispatcher, StreamOptions};

//! # Driver Layer (Presentation)
//!
//! CLIと起動時の依存性注入
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **context**: 起動時に一度だけ組み立てる GcpContext
//! - **workflow**: サブコマンドの実行

pub mod cli;
pub mod context;
pub mod workflow;

pub use cli::{Args, Command};
pub use context::{build_client, GcpContext};

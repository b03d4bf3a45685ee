//! # gcp-utils
//!
//! サービスアカウント鍵ファイルの場所を決定し、認証済みの BigQuery クライアントを生成する
//!
//! クリーンアーキテクチャの4層で構成されています：
//!
//! - **Domain層**: 認証情報パス、鍵の検証、エラー分類（外部SDKに依存しない）
//! - **Application層**: パス決定とクライアント生成のユースケース
//! - **Adapter層**: ファイルシステムと BigQuery SDK との統合
//! - **Driver層**: CLI、起動時の依存性注入
//!
//! クライアントはモジュール読み込み時ではなく、アプリケーションの起動処理で
//! [`driver::GcpContext`] として一度だけ生成し、`Arc` で共有します。

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

pub use domain::entities::client_handle::ClientHandle;
pub use domain::entities::credential_path::CredentialPath;
pub use domain::errors::{CredentialLoadError, GcpError};
pub use domain::services::path_resolver::resolve_credentials_path;
pub use driver::{build_client, GcpContext};

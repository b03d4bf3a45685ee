//! # Domain Errors
//!
//! 認証情報の読み込みとクライアント生成のエラー分類

use std::path::PathBuf;
use thiserror::Error;

/// 外部ライブラリから返されたエラーをそのまま保持するための型
pub type ExternalError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 認証情報ファイルの読み込みエラー
#[derive(Debug, Error)]
pub enum CredentialLoadError {
    #[error("credential file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read credential file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed credential file: {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported credential type `{found}` in {}, expected `service_account`", path.display())]
    UnsupportedType { path: PathBuf, found: String },

    #[error("credential file {} is missing required field `{field}`", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("invalid private key in credential file: {}", path.display())]
    InvalidKey {
        path: PathBuf,
        #[source]
        source: ExternalError,
    },
}

/// gcp-utils のエラー
#[derive(Debug, Error)]
pub enum GcpError {
    #[error(transparent)]
    CredentialLoad(#[from] CredentialLoadError),

    #[error("authentication failed")]
    Authentication(#[source] ExternalError),

    #[error("failed to create BigQuery client")]
    ClientCreation(#[source] ExternalError),
}

impl GcpError {
    /// 認証情報の読み込みに起因するエラーかどうか
    pub fn is_credential_load(&self) -> bool {
        matches!(self, GcpError::CredentialLoad(_))
    }

    /// 認証（スコープ付与を含む）に起因するエラーかどうか
    pub fn is_authentication(&self) -> bool {
        matches!(self, GcpError::Authentication(_))
    }
}

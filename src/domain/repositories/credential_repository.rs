//! # Credential Repository Trait
//!
//! 認証情報の読み込みを抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::credential_path::CredentialPath;
use crate::domain::entities::service_account::ServiceAccountCredentials;
use crate::domain::errors::CredentialLoadError;

/// 認証情報リポジトリ
///
/// 指定されたパスからサービスアカウント認証情報を読み込むリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// 認証情報を読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - 鍵ファイルのパス
    /// * `scopes` - 要求するスコープ
    ///
    /// # Errors
    ///
    /// ファイルが存在しない・読めない・形式が不正な場合にエラーを返す
    async fn load(
        &self,
        path: &CredentialPath,
        scopes: &[String],
    ) -> Result<ServiceAccountCredentials, CredentialLoadError>;
}

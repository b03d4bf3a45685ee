//! JSON Credential Repository Implementation
//!
//! CredentialRepositoryのファイル実装（サービスアカウント鍵JSONを読み込む）

use async_trait::async_trait;
use jsonwebtoken::EncodingKey;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;

use crate::domain::entities::credential_path::CredentialPath;
use crate::domain::entities::service_account::ServiceAccountCredentials;
use crate::domain::errors::CredentialLoadError;
use crate::domain::repositories::credential_repository::CredentialRepository;

/// JSONファイルベースの認証情報リポジトリ
#[derive(Debug, Default)]
pub struct JsonCredentialRepository;

impl JsonCredentialRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルから認証情報を読み込む（同期処理）
    fn load_sync(
        path: CredentialPath,
        scopes: Vec<String>,
    ) -> Result<ServiceAccountCredentials, CredentialLoadError> {
        debug!("Reading service account key from {}", path);

        let document = fs::read_to_string(path.as_path()).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                CredentialLoadError::NotFound {
                    path: path.as_path().to_path_buf(),
                }
            } else {
                CredentialLoadError::Read {
                    path: path.as_path().to_path_buf(),
                    source,
                }
            }
        })?;

        let credentials = ServiceAccountCredentials::parse(path, document, scopes)?;
        Self::validate_private_key(&credentials)?;

        info!(
            "Loaded service account key for project {}",
            credentials.project_id()
        );

        Ok(credentials)
    }

    /// 秘密鍵が RSA の PEM として読めることを確認する
    ///
    /// 認証ライブラリがトークン取得時に行う読み込みと同じもの。
    fn validate_private_key(
        credentials: &ServiceAccountCredentials,
    ) -> Result<(), CredentialLoadError> {
        let pem = credentials.key().private_key.as_deref().unwrap_or_default();

        EncodingKey::from_rsa_pem(pem.as_bytes())
            .map(|_| ())
            .map_err(|e| CredentialLoadError::InvalidKey {
                path: credentials.path().as_path().to_path_buf(),
                source: Box::new(e),
            })
    }
}

#[async_trait]
impl CredentialRepository for JsonCredentialRepository {
    async fn load(
        &self,
        path: &CredentialPath,
        scopes: &[String],
    ) -> Result<ServiceAccountCredentials, CredentialLoadError> {
        let path = path.clone();
        let scopes = scopes.to_vec();
        let task_path = path.clone();

        tokio::task::spawn_blocking(move || Self::load_sync(task_path, scopes))
            .await
            .map_err(|e| CredentialLoadError::Read {
                path: path.as_path().to_path_buf(),
                source: std::io::Error::other(format!("Failed to spawn blocking task: {}", e)),
            })?
    }
}

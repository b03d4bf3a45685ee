//! Startup Context
//!
//! 起動時に一度だけ認証情報パスを決定してクライアントを生成し、
//! 以降は `Arc` 経由で読み取り専用に共有する

use google_cloud_bigquery::client::Client;
use log::info;
use std::sync::Arc;

use crate::adapter::bigquery::client::BigQueryConnector;
use crate::adapter::config::Config;
use crate::adapter::repositories::json_credential_repository::JsonCredentialRepository;
use crate::application::use_cases::{BuildClientUseCase, ResolveCredentialsPathUseCase};
use crate::domain::entities::client_handle::ClientHandle;
use crate::domain::entities::credential_path::CredentialPath;
use crate::domain::errors::GcpError;
use crate::domain::repositories::client_connector::ClientConnector;
use crate::domain::repositories::credential_repository::CredentialRepository;

/// 鍵ファイルから本番の BigQuery クライアントを生成
///
/// 呼び出すたびに独立したクライアントを返す。
#[cfg_attr(coverage_nightly, coverage(off))]
pub async fn build_client(
    credential_path: &CredentialPath,
) -> Result<ClientHandle<Client>, GcpError> {
    BuildClientUseCase::new(
        Arc::new(JsonCredentialRepository::new()),
        Arc::new(BigQueryConnector::new()),
    )
    .execute(credential_path)
    .await
}

/// 起動時に組み立てられる GCP コンテキスト
#[derive(Debug)]
pub struct GcpContext<C> {
    credentials_path: CredentialPath,
    client: Arc<ClientHandle<C>>,
}

impl<C> Clone for GcpContext<C> {
    fn clone(&self) -> Self {
        Self {
            credentials_path: self.credentials_path.clone(),
            client: Arc::clone(&self.client),
        }
    }
}

impl GcpContext<Client> {
    /// 本番の BigQuery クライアントでコンテキストを初期化
    ///
    /// # Errors
    ///
    /// 鍵ファイルが存在しない・不正な場合、または認証に失敗した場合にエラーを返す
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn initialize(config: &Config) -> Result<Self, GcpError> {
        Self::initialize_with(
            config,
            Arc::new(JsonCredentialRepository::new()),
            Arc::new(BigQueryConnector::new()),
        )
        .await
    }
}

impl<C: Send + Sync> GcpContext<C> {
    /// 依存を注入してコンテキストを初期化
    pub async fn initialize_with<R, K>(
        config: &Config,
        credential_repository: Arc<R>,
        connector: Arc<K>,
    ) -> Result<Self, GcpError>
    where
        R: CredentialRepository,
        K: ClientConnector<Client = C>,
    {
        let credentials_path =
            ResolveCredentialsPathUseCase::new(config.key_path_override()).execute();
        info!("Using service account key: {}", credentials_path);

        let use_case = BuildClientUseCase::new(credential_repository, connector);
        let handle = use_case.execute(&credentials_path).await?;

        Ok(Self {
            credentials_path,
            client: Arc::new(handle),
        })
    }

    pub fn credentials_path(&self) -> &CredentialPath {
        &self.credentials_path
    }

    /// 共有クライアント
    pub fn client(&self) -> Arc<ClientHandle<C>> {
        Arc::clone(&self.client)
    }

    pub fn project_id(&self) -> &str {
        self.client.project_id()
    }
}

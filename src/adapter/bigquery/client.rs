//! BigQuery Client Connector
//!
//! サービスアカウント認証情報から BigQuery クライアントを生成する

use async_trait::async_trait;
use google_cloud_bigquery::client::google_cloud_auth::credentials::CredentialsFile;
use google_cloud_bigquery::client::google_cloud_auth::project::Config as AuthConfig;
use google_cloud_bigquery::client::google_cloud_auth::token::DefaultTokenSourceProvider;
use google_cloud_bigquery::client::{Client, ClientConfig};
use log::debug;

use crate::domain::entities::service_account::ServiceAccountCredentials;
use crate::domain::errors::{CredentialLoadError, GcpError};
use crate::domain::repositories::client_connector::ClientConnector;

/// 本番用の BigQuery コネクタ
///
/// HTTP（REST API）と gRPC（Storage API）の両方に、認証情報が要求するスコープだけを
/// 持つトークンソースを設定する。
#[derive(Debug, Default)]
pub struct BigQueryConnector;

impl BigQueryConnector {
    pub fn new() -> Self {
        Self
    }

    /// 外部ライブラリの認証情報型に変換
    fn credentials_file(
        credentials: &ServiceAccountCredentials,
    ) -> Result<CredentialsFile, GcpError> {
        serde_json::from_str(credentials.document()).map_err(|source| {
            CredentialLoadError::Malformed {
                path: credentials.path().as_path().to_path_buf(),
                source,
            }
            .into()
        })
    }

    async fn token_source_provider(
        credentials: &ServiceAccountCredentials,
    ) -> Result<DefaultTokenSourceProvider, GcpError> {
        let scopes: Vec<&str> = credentials.scopes().iter().map(String::as_str).collect();
        let file = Self::credentials_file(credentials)?;

        DefaultTokenSourceProvider::new_with_credentials(
            AuthConfig::default().with_scopes(&scopes),
            Box::new(file),
        )
        .await
        .map_err(|e| GcpError::Authentication(Box::new(e)))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl ClientConnector for BigQueryConnector {
    type Client = Client;

    async fn connect(&self, credentials: &ServiceAccountCredentials) -> Result<Client, GcpError> {
        debug!(
            "Authenticating {} with scopes {:?}",
            credentials.client_email(),
            credentials.scopes()
        );

        // プロバイダは生成時にトークンを取得するため、起動時のトークン交換は HTTP 用と gRPC 用の2回になる
        let http_token_source = Self::token_source_provider(credentials).await?;
        let grpc_token_source = Self::token_source_provider(credentials).await?;

        let config = ClientConfig::new(Box::new(http_token_source), Box::new(grpc_token_source));

        Client::new(config)
            .await
            .map_err(|e| GcpError::ClientCreation(Box::new(e)))
    }
}

//! # Client Connector Trait
//!
//! 認証情報からデータウェアハウスのクライアントを生成する処理を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::service_account::ServiceAccountCredentials;
use crate::domain::errors::GcpError;

/// クライアントコネクタ
///
/// 本番では BigQuery クライアントを、テストでは任意の値を返す
#[cfg_attr(test, automock(type Client = String;))]
#[async_trait]
pub trait ClientConnector: Send + Sync {
    /// 生成されるクライアントの型
    type Client: Send + Sync;

    /// 認証情報に束縛されたクライアントを生成する
    ///
    /// # Errors
    ///
    /// 認証またはクライアント生成に失敗した場合にエラーを返す
    async fn connect(
        &self,
        credentials: &ServiceAccountCredentials,
    ) -> Result<Self::Client, GcpError>;
}

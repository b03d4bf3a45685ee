//! # Client Handle Entity
//!
//! 認証済みクライアントとプロジェクトIDの組

use std::fmt;

/// 1つの認証情報と1つのプロジェクトに束縛されたクライアント
///
/// 作成後に変更されることはない。共有する場合は `Arc` で包む。
pub struct ClientHandle<C> {
    client: C,
    project_id: String,
}

impl<C> fmt::Debug for ClientHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("project_id", &self.project_id)
            .finish_non_exhaustive()
    }
}

impl<C> ClientHandle<C> {
    pub fn new(client: C, project_id: impl Into<String>) -> Self {
        Self {
            client,
            project_id: project_id.into(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// クライアントが束縛されているプロジェクトID
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

//! # Resolve Credentials Path Use Case
//!
//! 使用する認証情報ファイルのパスを決定するユースケース

use log::debug;
use std::path::PathBuf;

use crate::domain::entities::credential_path::CredentialPath;
use crate::domain::services::path_resolver::resolve_credentials_path;

/// 認証情報パス決定ユースケース
///
/// 明示的な指定があればそれを、なければクレートのソースディレクトリから
/// 求めた既定のパスを使う
#[derive(Debug, Clone, Default)]
pub struct ResolveCredentialsPathUseCase {
    key_path_override: Option<PathBuf>,
}

impl ResolveCredentialsPathUseCase {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `key_path_override` - 既定のパスの代わりに使う鍵ファイル（展開済み）
    pub fn new(key_path_override: Option<PathBuf>) -> Self {
        Self { key_path_override }
    }

    pub fn execute(&self) -> CredentialPath {
        match &self.key_path_override {
            Some(path) => {
                debug!("Using credential path override: {}", path.display());
                CredentialPath::new(path.clone())
            }
            None => {
                let path = resolve_credentials_path();
                debug!("Using default credential path: {}", path);
                path
            }
        }
    }
}

//! # Credential Path Entity
//!
//! 認証情報ファイルの場所を表す値オブジェクト

use std::fmt;
use std::path::{Path, PathBuf};

/// 認証情報ファイルのパス
///
/// 一度作成したら変更されない。ファイルシステム上での解決（シンボリックリンクや
/// 存在確認）は行わないため、`..` を含むことがある。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CredentialPath(PathBuf);

impl CredentialPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// ファイルが現時点で存在するかどうか
    pub fn exists(&self) -> bool {
        self.0.is_file()
    }
}

impl fmt::Display for CredentialPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_path() {
        let path = CredentialPath::new("/srv/app/src/../config/key.json");
        assert_eq!(path.to_string(), "/srv/app/src/../config/key.json");
    }

    #[test]
    fn test_exists_false_for_missing_file() {
        let path = CredentialPath::new("/definitely/not/here/key.json");
        assert!(!path.exists());
    }
}

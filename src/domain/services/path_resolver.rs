//! # Credential Path Resolver
//!
//! クレートのソースディレクトリを基準に、認証情報ファイルのパスを求める。
//! パスの計算のみを行い、ファイルシステムには触れない。

use std::path::Path;

use crate::domain::entities::credential_path::CredentialPath;

/// ソースディレクトリからの相対位置
pub const CREDENTIALS_RELATIVE_SEGMENTS: [&str; 3] = ["..", "config", "gcp_service_account.json"];

/// このモジュールツリーを含むディレクトリ（`<crate>/src`）
pub fn module_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src"))
}

/// 既定の認証情報パスを返します。
///
/// カレントディレクトリに依存せず、同じビルドであれば常に同じパスになる。
///
/// ```
/// use gcp_utils::domain::services::path_resolver::resolve_credentials_path;
///
/// let path = resolve_credentials_path();
/// assert!(path.as_path().is_absolute());
/// assert!(path.as_path().ends_with("src/../config/gcp_service_account.json"));
/// ```
pub fn resolve_credentials_path() -> CredentialPath {
    resolve_from(module_dir())
}

/// 任意の基準ディレクトリに対して同じ相対位置を適用します。
pub fn resolve_from(base_dir: &Path) -> CredentialPath {
    let path = CREDENTIALS_RELATIVE_SEGMENTS
        .iter()
        .fold(base_dir.to_path_buf(), |acc, segment| acc.join(segment));
    CredentialPath::new(path)
}

//! # Use Cases
//!
//! ## ユースケース
//!
//! - **ResolveCredentialsPathUseCase**: 使用する認証情報ファイルの決定
//! - **BuildClientUseCase**: 認証情報の読み込みとクライアント生成

pub mod build_client;
pub mod resolve_credentials_path;

pub use build_client::BuildClientUseCase;
pub use resolve_credentials_path::ResolveCredentialsPathUseCase;

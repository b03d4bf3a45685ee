//! # Domain Layer
//!
//! 認証情報の所在と、クライアント生成の規則を定義します。
//!
//! ## 特徴
//!
//! - 外部SDKに依存しない（serde / thiserror のみ）
//! - BigQuery や認証プロトコルについて何も知らない
//!
//! ## 構成要素
//!
//! - **entities**: CredentialPath, ServiceAccountCredentials, ClientHandle
//! - **repositories**: 認証情報の読み込みとクライアント接続の trait
//! - **services**: 認証情報パスの解決
//! - **errors**: エラー分類

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;

//! # Application Layer
//!
//! 認証情報パスの決定とクライアント生成のユースケース
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせて起動時の処理を実現
//! - Repository traitに依存（実装には依存しない）
//!
//! ## 構成要素
//!
//! - **use_cases**: ユースケース

pub mod use_cases;

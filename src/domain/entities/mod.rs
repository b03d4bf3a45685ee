//! # Domain Entities
//!
//! ビジネスエンティティの定義

pub mod client_handle;
pub mod credential_path;
pub mod service_account;

//! # Repository Traits
//!
//! 外部システムとの境界となる trait 定義

pub mod client_connector;
pub mod credential_repository;

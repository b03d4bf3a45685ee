//! Repository Implementations
//!
//! Domain層のRepository traitの実装

pub mod json_credential_repository;

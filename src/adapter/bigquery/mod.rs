//! BigQuery Adapter Modules
//!
//! BigQuery SDK を使ったクライアント生成

pub mod client;

pub use client::BigQueryConnector;

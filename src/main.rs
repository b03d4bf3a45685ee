//! gcp-utils CLI
//!
//! サービスアカウント鍵の確認と BigQuery クライアントの生成

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use gcp_utils::adapter::config::Config;
use gcp_utils::driver::{workflow, Args};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    workflow::execute(config, args).await
}

//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// サービスアカウント鍵の確認と BigQuery クライアントの生成を行うCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "gcp-utils")]
#[command(about = "Locate GCP service account credentials and build a BigQuery client", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./config/gcp-utils.json")]
    pub config: String,

    /// Service account key file (overrides config and the default location)
    #[arg(long)]
    pub key_path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the credential path that would be used
    Path,
    /// Load and validate the service account key without network access
    Inspect,
    /// Build the BigQuery client
    Connect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["gcp-utils", "path"]);
        assert_eq!(args.config, "./config/gcp-utils.json");
        assert!(args.key_path.is_none());
        assert_eq!(args.command, Command::Path);
    }

    #[test]
    fn test_args_key_path() {
        let args = Args::parse_from(["gcp-utils", "--key-path", "~/keys/loader.json", "inspect"]);
        assert_eq!(args.key_path.as_deref(), Some("~/keys/loader.json"));
        assert_eq!(args.command, Command::Inspect);
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["gcp-utils", "-c", "/custom/config.json", "connect"]);
        assert_eq!(args.config, "/custom/config.json");
        assert_eq!(args.command, Command::Connect);
    }

    #[test]
    fn test_args_requires_subcommand() {
        assert!(Args::try_parse_from(["gcp-utils"]).is_err());
    }
}

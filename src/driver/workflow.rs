//! Command Workflow
//!
//! サブコマンドごとの処理

use anyhow::{Context, Result};
use log::info;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_credential_repository::JsonCredentialRepository;
use crate::application::use_cases::ResolveCredentialsPathUseCase;
use crate::domain::entities::service_account::{requested_scopes, ServiceAccountCredentials};
use crate::domain::repositories::credential_repository::CredentialRepository;

use super::cli::{Args, Command};
use super::context::GcpContext;

/// CLIの `--key-path` を設定ファイルより優先して反映する
pub fn effective_config(mut config: Config, args: &Args) -> Config {
    if let Some(key_path) = &args.key_path {
        config.service_account_key_path = Some(key_path.clone());
    }
    config
}

/// Execute the selected command
pub async fn execute(config: Config, args: Args) -> Result<()> {
    let config = effective_config(config, &args);

    match args.command {
        Command::Path => print_path(&config),
        Command::Inspect => inspect(&config).await,
        Command::Connect => connect(&config).await,
    }
}

fn print_path(config: &Config) -> Result<()> {
    let path = ResolveCredentialsPathUseCase::new(config.key_path_override()).execute();

    println!("{}", path);
    if !path.exists() {
        println!("⚠ File does not exist yet");
    }

    Ok(())
}

async fn inspect(config: &Config) -> Result<()> {
    let path = ResolveCredentialsPathUseCase::new(config.key_path_override()).execute();
    let scopes = requested_scopes();

    let credentials = JsonCredentialRepository::new()
        .load(&path, &scopes)
        .await
        .with_context(|| format!("Failed to load service account key: {}", path))?;

    println!("✓ Service account key: {}", path);
    for line in describe_credentials(&credentials) {
        println!("  {}", line);
    }

    Ok(())
}

/// `inspect` で表示する鍵の情報（秘密鍵そのものは含めない）
pub fn describe_credentials(credentials: &ServiceAccountCredentials) -> Vec<String> {
    let key = credentials.key();
    let mut lines = vec![
        format!("Project: {}", credentials.project_id()),
        format!("Client email: {}", credentials.client_email()),
    ];
    if let Some(key_id) = &key.private_key_id {
        lines.push(format!("Key ID: {}", key_id));
    }
    if let Some(token_uri) = &key.token_uri {
        lines.push(format!("Token URI: {}", token_uri));
    }
    lines.extend(credentials.scopes().iter().map(|s| format!("Scope: {}", s)));
    lines
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn connect(config: &Config) -> Result<()> {
    info!("Building BigQuery client...");

    let context = GcpContext::initialize(config)
        .await
        .context("Failed to initialize BigQuery client")?;

    println!("✓ Created BigQuery client");
    println!("  Key: {}", context.credentials_path());
    println!("  Project: {}", context.project_id());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::credential_path::CredentialPath;
    use clap::Parser;

    #[test]
    fn test_effective_config_cli_overrides_file() {
        let config = Config {
            service_account_key_path: Some("/from/config.json".to_string()),
        };
        let args = Args::parse_from(["gcp-utils", "--key-path", "/from/cli.json", "path"]);

        let merged = effective_config(config, &args);
        assert_eq!(
            merged.service_account_key_path.as_deref(),
            Some("/from/cli.json")
        );
    }

    #[test]
    fn test_effective_config_keeps_file_value() {
        let config = Config {
            service_account_key_path: Some("/from/config.json".to_string()),
        };
        let args = Args::parse_from(["gcp-utils", "path"]);

        let merged = effective_config(config, &args);
        assert_eq!(
            merged.service_account_key_path.as_deref(),
            Some("/from/config.json")
        );
    }

    #[test]
    fn test_describe_credentials_lists_key_metadata() {
        let credentials = ServiceAccountCredentials::parse(
            CredentialPath::new("/srv/config/gcp_service_account.json"),
            include_str!("../../tests/fixtures/service_account_p1.json").to_string(),
            requested_scopes(),
        )
        .unwrap();

        let lines = describe_credentials(&credentials);

        assert_eq!(
            lines,
            vec![
                "Project: p1",
                "Client email: warehouse-loader@p1.iam.gserviceaccount.com",
                "Key ID: 0123456789abcdef0123456789abcdef01234567",
                "Token URI: https://oauth2.googleapis.com/token",
                "Scope: https://www.googleapis.com/auth/cloud-platform",
            ]
        );
        assert!(lines.iter().all(|l| !l.contains("PRIVATE KEY")));
    }

    #[tokio::test]
    async fn test_inspect_missing_key_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            service_account_key_path: Some(
                temp_dir.path().join("missing.json").to_string_lossy().to_string(),
            ),
        };

        let err = inspect(&config).await.unwrap_err();
        assert!(err.to_string().contains("Failed to load service account key"));
    }
}

//! `user-info` command line tool.
//!
//! ```text
//! user-info --config app.yaml resolve --token "$TOKEN"
//! user-info decode --token "$TOKEN"
//! ```

mod config;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use modkit_http::HyperTransport;
use modkit_security::{Credentials, Principal};
use static_discovery::StaticDiscovery;
use user_info::{UserInfoDeps, UserInfoModule, decode_claims};
use user_info_sdk::UserInfoClient;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "user-info", version, about = "Resolve user identity from user tokens")]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a verified user token into its identity record
    Resolve {
        #[arg(long, env = "USER_INFO_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Print the identity claims of a token without contacting any service
    Decode {
        #[arg(long, env = "USER_INFO_TOKEN", hide_env_values = true)]
        token: String,
    },
}

fn build_client(cfg: &AppConfig) -> anyhow::Result<Arc<dyn UserInfoClient>> {
    let discovery = StaticDiscovery::from_config(&cfg.modules.discovery)?;
    let transport = HyperTransport::new(&cfg.modules.http_client)?;

    UserInfoModule::default().init(
        &cfg.modules.user_info,
        UserInfoDeps {
            discovery: Arc::new(discovery),
            transport: Arc::new(transport),
        },
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;
    logging::init(&cfg.logging)?;

    match cli.command {
        Command::Resolve { token } => {
            let claims = decode_claims(&token)?;
            let credentials = Credentials::builder()
                .principal(Principal::User {
                    user_entity_ref: claims.user_entity_ref,
                })
                .token(token)
                .build();

            let info = build_client(&cfg)?.get_user_info(&credentials).await?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Command::Decode { token } => {
            let claims = decode_claims(&token)?;
            tracing::debug!(complete = claims.is_complete(), "Decoded token claims");
            println!("{}", serde_json::to_string_pretty(&claims)?);
        }
    }

    Ok(())
}

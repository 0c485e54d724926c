//! CLI argument definitions for Stevedore.

use clap::Parser;
use std::path::PathBuf;

use crate::deploy::{DEFAULT_API_ENDPOINT, DEFAULT_HOST};

/// Stevedore - send a compose configuration to the deployer service.
///
/// The intended use is piping a rendered configuration straight in:
/// `docker compose config | stevedore -P my-project -`
#[derive(Parser, Debug)]
#[command(name = "stevedore")]
#[command(
    about = "Send a compose configuration to the deployer service",
    long_about = "Send a compose configuration to the deployer service.\n\n\
        The configuration is read as raw bytes and POSTed to\n\
        <host><api-endpoint><project>/configure/<version>/, tagged with\n\
        --version or, when omitted, the current git revision.\n\n\
        Example:\n    docker compose config | stevedore -P my-project -"
)]
pub struct Cli {
    /// Host for deployer
    #[arg(long, env = "DEPLOYER_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Path to the projects endpoint on the deployer
    #[arg(long, env = "DEPLOYER_API_ENDPOINT", default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// Project name in deployer
    #[arg(short = 'P', long, env = "COMPOSE_PROJECT_NAME")]
    pub project: String,

    /// API token for deployer
    #[arg(long, env = "DEPLOYER_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Version tag for this configuration (defaults to the current git revision)
    #[arg(long)]
    pub version: Option<String>,

    /// Configuration file to send, `-` reads from stdin
    pub configuration: PathBuf,
}

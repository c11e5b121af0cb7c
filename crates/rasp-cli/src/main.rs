mod cmd;
mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rasp-relay",
    about = "Relay Raspberry Pi status reports into Slack",
    version,
    propagate_version = true
)]
struct Cli {
    /// YAML config file (optional)
    #[arg(long, global = true, env = "RASP_RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, global = true, env = "PORT")]
    port: Option<u16>,

    /// Slack bot token used for chat.postMessage
    #[arg(long, global = true, env = "SLACK_TOKEN", hide_env_values = true)]
    slack_token: Option<String>,

    /// Slack channel id the status is posted to
    #[arg(long, global = true, env = "SLACK_CHANNEL")]
    slack_channel: Option<String>,

    /// Slack Web API base URL
    #[arg(long, global = true, env = "SLACK_API_BASE")]
    slack_api_base: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the webhook server (default)
    Serve,

    /// Print the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let overrides = settings::Overrides {
        port: cli.port,
        slack_token: cli.slack_token,
        slack_channel: cli.slack_channel,
        slack_api_base: cli.slack_api_base,
    };

    let result = settings::resolve(cli.config.as_deref(), overrides).and_then(|config| {
        match cli.command.unwrap_or(Commands::Serve) {
            Commands::Serve => cmd::serve::run(config),
            Commands::Config => cmd::config::run(&config),
        }
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

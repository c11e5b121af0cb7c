use anyhow::Result;
use rasp_core::config::RelayConfig;

/// Print the effective configuration with the token masked.
pub fn run(config: &RelayConfig) -> Result<()> {
    let yaml = config.to_redacted_yaml()?;
    print!("{yaml}");
    if config.slack.credentials().is_none() {
        eprintln!("warning: slack token or channel missing; status relay is disabled");
    }
    Ok(())
}

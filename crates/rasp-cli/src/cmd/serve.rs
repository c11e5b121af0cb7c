use anyhow::Result;
use rasp_core::config::RelayConfig;

pub fn run(config: RelayConfig) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        tokio::select! {
            res = rasp_server::serve(&config) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}

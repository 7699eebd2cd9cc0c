use anyhow::{Context, Result};
use roster_core::{Catalog, RosterManager};
use roster_server::ServerConfig;
use std::path::Path;
use std::sync::Arc;

pub fn run(catalog: Option<&Path>, config: ServerConfig) -> Result<()> {
    let catalog = Catalog::load_or_default(catalog).context("failed to load catalog")?;
    let roster = Arc::new(RosterManager::new(catalog)?);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        let actual_port = listener.local_addr()?.port();

        println!(
            "Serving {} activities → http://localhost:{actual_port}/activities",
            roster.len()
        );

        tokio::select! {
            res = roster_server::serve_on(roster, listener, &config) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}

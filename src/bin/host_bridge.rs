//! Headless host bridge binary for stdin/stdout JSON communication.
//!
//! Reads `CommandEnvelope` messages as newline-delimited JSON from stdin and
//! writes one `ResponseEnvelope` per request to stdout.
//!
//! All tracing/diagnostic output goes to stderr so that stdout remains a
//! clean JSON protocol channel.
//!
//! Usage: `solace-host [--config <path>]`

use solace::SolaceConfig;
use solace::engine::ReplyEngine;
use solace::host::handler::HostHandler;
use solace::host::stdio::run_stdio_bridge;
use std::path::PathBuf;

fn config_arg() -> anyhow::Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                path = Some(PathBuf::from(value));
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    Ok(path)
}

fn load_config() -> anyhow::Result<SolaceConfig> {
    if let Some(path) = config_arg()? {
        tracing::info!(path = %path.display(), "loading config");
        return SolaceConfig::from_file(&path)
            .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", path.display()));
    }

    let default_path = SolaceConfig::default_config_path();
    if default_path.exists() {
        tracing::info!(path = %default_path.display(), "loading config");
        SolaceConfig::from_file(&default_path)
            .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", default_path.display()))
    } else {
        Ok(SolaceConfig::default())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing to stderr only (stdout is reserved for the JSON
    // protocol).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("solace=info")),
        )
        .init();

    let config = load_config()?;
    tracing::info!("solace-host starting");

    let handler = HostHandler::new(ReplyEngine::new(config));
    run_stdio_bridge(handler).await.map_err(|e| {
        tracing::error!(error = %e, "solace-host exited with error");
        anyhow::anyhow!("solace-host failed: {e}")
    })?;

    tracing::info!("solace-host shut down cleanly");
    Ok(())
}

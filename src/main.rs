use anyhow::Result;
use github_test_agent::{AgentConfig, root_agent};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load environment variables from .env if present.
    dotenvy::dotenv().ok();

    let config = AgentConfig::from_env()?;
    let agent = root_agent(&config);
    debug!(?agent, "agent descriptor ready for the host runtime");

    Ok(())
}

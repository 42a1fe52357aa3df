use anyhow::Context;
use clap::Parser;

use advent_nft::cli::Cli;
use advent_nft::config::Config;
use advent_nft::logging::init_tracing;
use advent_nft::server::SiteServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config_path();
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid command-line override")?;

    let mut server = SiteServer::new(config).context("starting site")?;
    server.try_bind().await?;
    server.run().await?;

    Ok(())
}

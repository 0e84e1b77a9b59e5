use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{BufReader, BufWriter};

use pubip::{
    config::Config,
    filter::PublicIpFilter,
    log,
    stream,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    log::setup_trace(&config.log_level);

    let filter_config = config.filter_config()?;
    let filter = PublicIpFilter::new(filter_config)
        .context("Invalid filter configuration")?;
    tracing::info!("Classifying field {} of records on stdin", filter.source());

    let input = BufReader::new(tokio::io::stdin());
    let output = BufWriter::new(tokio::io::stdout());
    let stats = stream::run(&filter, input, output).await?;

    tracing::info!(
        "Done: {} records ({} annotated, {} tagged invalid), {} lines skipped",
        stats.processed,
        stats.matched,
        stats.tagged,
        stats.skipped,
    );

    Ok(())
}

//! erapay-bot: unattended staking payout job.
//!
//! One-shot run: derive the target era range from the chain's active era,
//! drive the payout pipeline over it, and post the per-era summary to the
//! operator channel. Intended to run periodically (cron) or on demand.

mod config;
mod gateway;
mod slack;

use tracing::info;

use erapay_report::notify::deliver_report;
use erapay_runner::chain::ChainQueryService;
use erapay_runner::run::EraRunner;

use crate::config::Config;
use crate::gateway::PayoutGateway;
use crate::slack::SlackSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("erapay=info".parse()?),
        )
        .init();

    info!("erapay payout bot starting");

    // 1. Load config
    let config = Config::from_env()?;

    // 2. Build collaborators
    let gateway = PayoutGateway::new(&config.endpoint, &config.seed);
    let sink = SlackSink::new(&config.oath_token, &config.channel_id);

    // 3. Derive the era range: the active era has no payable reward yet
    let active_era = gateway.current_era().await?;
    if active_era == 0 {
        info!("chain is in era 0, nothing to pay out");
        return Ok(());
    }
    let start_era = active_era.saturating_sub(config.claim_depth);
    let end_era = active_era - 1;
    info!(active_era, start_era, end_era, "processing era range");

    // 4. Run the pipeline
    let runner = EraRunner::new(
        gateway.clone(),
        gateway,
        config.chunk_size,
        config.validator_stashes.clone(),
    )?;
    let outcomes = runner.run(start_era, end_era).await;

    // 5. Deliver the report; a delivery failure never fails the run
    deliver_report(&sink, &outcomes).await;

    info!(eras = outcomes.len(), "payout run complete");
    Ok(())
}

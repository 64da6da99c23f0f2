mod models;
mod processors;

use crate::models::ARCSCAN_STATS_URL;
use crate::processors::report_gas_price;
use eyre::Result;
use std::io::Write;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the report line
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "arc_gas_price=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Querying {}", ARCSCAN_STATS_URL);

    // Failures are reported on stdout and the process still exits 0
    let report = report_gas_price(ARCSCAN_STATS_URL).await;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", report)?;

    Ok(())
}

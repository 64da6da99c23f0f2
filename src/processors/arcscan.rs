use crate::models::{GasPriceReport, AVERAGE_KEY, GAS_PRICES_KEY};
use eyre::Result;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

/// GET the stats endpoint and decode the body as generic JSON.
/// Non-2xx statuses and undecodable bodies are errors.
pub async fn fetch_stats(client: &Client, url: &str) -> Result<Value> {
    debug!("GET {}", url);

    let response = client.get(url).send().await?.error_for_status()?;
    let stats = response.json::<Value>().await?;

    Ok(stats)
}

/// Reads `gas_prices.average` out of a stats response.
/// On failure returns the first key that could not be found.
pub fn extract_gas_price(stats: &Value) -> std::result::Result<&Value, &'static str> {
    let gas_prices = stats.get(GAS_PRICES_KEY).ok_or(GAS_PRICES_KEY)?;
    gas_prices.get(AVERAGE_KEY).ok_or(AVERAGE_KEY)
}

pub async fn report_gas_price(url: &str) -> GasPriceReport {
    let client = Client::new();

    let stats = match fetch_stats(&client, url).await {
        Ok(stats) => stats,
        Err(e) => {
            warn!("Stats request failed: {:#}", e);
            // Alternate form keeps the whole cause chain
            return GasPriceReport::RequestFailed(format!("{:#}", e));
        }
    };

    match extract_gas_price(&stats) {
        Ok(gas_price) => {
            info!("Average gas price: {}", gas_price);
            GasPriceReport::Success(gas_price.clone())
        }
        Err(key) => {
            warn!("Key {} missing from stats response", key);
            GasPriceReport::FieldMissing(key)
        }
    }
}

mod arcscan;

pub use arcscan::{GasPriceReport, ARCSCAN_STATS_URL, AVERAGE_KEY, GAS_PRICES_KEY};

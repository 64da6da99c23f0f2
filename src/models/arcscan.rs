use serde_json::Value;
use std::fmt;

pub const ARCSCAN_STATS_URL: &str = "https://testnet.arcscan.app/api/v2/stats";

pub const GAS_PRICES_KEY: &str = "gas_prices";
pub const AVERAGE_KEY: &str = "average";

/// Outcome of one stats lookup. `Display` renders the line printed to stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum GasPriceReport {
    Success(Value),
    RequestFailed(String),
    FieldMissing(&'static str),
}

impl fmt::Display for GasPriceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GasPriceReport::Success(gas_price) => {
                write!(f, "Giá gas trung bình: {} Gwei", render_gas_price(gas_price))
            }
            GasPriceReport::RequestFailed(detail) => write!(f, "Lỗi khi gọi API: {}", detail),
            GasPriceReport::FieldMissing(key) => write!(
                f,
                "Lỗi KeyError: Thiếu khóa '{}' trong dữ liệu JSON. Cấu trúc dữ liệu có thể đã thay đổi.",
                key
            ),
        }
    }
}

// Strings print bare, everything else as compact JSON.
fn render_gas_price(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

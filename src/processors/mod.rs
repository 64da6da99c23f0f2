pub mod arcscan;

pub use arcscan::report_gas_price;

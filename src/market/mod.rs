//! Live mineral market: per-mineral price records, supply/demand pressure,
//! and periodic economic/special events.

pub mod data;
pub mod engine;
pub mod types;

pub use engine::{MarketEngine, MarketSnapshot};
pub use types::{
    EventKind, MarketData, MarketEvent, MarketTickReport, SaleReceipt, Trend,
};

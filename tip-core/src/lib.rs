pub mod calculations;
pub mod ledger;
pub mod models;
pub mod sanitize;
pub mod widget;

pub use ledger::HistoryLedger;
pub use models::*;
pub use widget::{LiveTotals, TipWidget};

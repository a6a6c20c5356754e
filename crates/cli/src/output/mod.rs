//! Output formatting for CLI results.

pub mod detail;
pub mod notify;
pub mod table;

pub use detail::{
    format_addresses, format_dashboard, format_landing, format_stats, format_tx_summary,
};
pub use notify::TerminalNotifier;
pub use table::{format_assets_table, format_holdings_table};

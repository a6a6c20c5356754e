//! Command implementations.

pub mod actions;
pub mod dashboard;
pub mod info;

pub use actions::{run_deposit, run_faucet, run_harvest, run_mock_yield, run_set_target};
pub use dashboard::{run_dashboard, run_watch};
pub use info::{run_addresses, run_assets, run_portfolio, run_stats};

//! mETH test token interface.
//!
//! A plain ERC20 with a rate-limited faucet. The cooldown is enforced by the
//! contract; clients read `lastFaucetTime` and `FAUCET_COOLDOWN` to show it.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IMETH {
        function faucet(uint256 amount) external;
        function lastFaucetTime(address account) external view returns (uint256);
        function FAUCET_COOLDOWN() external view returns (uint256);
    }
}

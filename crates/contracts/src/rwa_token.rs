//! RWA token interface. Each real-world asset is a token id.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IRWAToken {
        function balanceOf(address account, uint256 id) external view returns (uint256);
    }
}

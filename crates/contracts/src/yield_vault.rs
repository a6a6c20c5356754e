//! Yield vault interface.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IYieldVault {
        // Transaction functions
        function deposit(uint256 amount) external;
        function harvestAndBuyRWA() external;
        function setTargetAsset(uint256 assetId) external;
        function mockYield(uint256 amount) external;

        // View functions
        function getUserDashboard(address user) external view returns (
            uint256 principal,
            uint256 pendingYield,
            uint256 totalHarvested,
            uint256 rwaValue,
            uint256 targetAssetId
        );
        function getYieldProgress(address user) external view returns (uint256 progressPercent);
        function getProtocolStats() external view returns (
            uint256 totalDeposits,
            uint256 totalUsers,
            uint256 protocolYield,
            uint256 rwaValue
        );
    }
}

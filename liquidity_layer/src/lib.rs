#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod liquidity;
pub mod storage;
pub mod utils;
pub mod view;
pub use common_events::*;

use common_structs::MarketParams;

/// One lending market. Holds the custody balance of a single asset and the
/// share-based ledger over it. Deployed and owned by the controller.
#[multiversx_sc::contract]
pub trait LiquidityPool:
    storage::Storage
    + common_events::EventsModule
    + common_rates::InterestRates
    + liquidity::LiquidityModule
    + utils::UtilsModule
    + common_math::SharedMathModule
    + view::ViewModule
{
    /// Initializes the market for `asset`.
    ///
    /// **Process**:
    /// 1. Stores the rate model parameters (all basis points).
    /// 2. Starts both indexes at `PRECISION` and every balance at zero.
    /// 3. Records the current block timestamp as the last accrual time.
    /// 4. Derives the initial rates from the empty ledger.
    ///
    /// Parameters are stored as given; the rate model guards against a zero
    /// or full optimal utilization.
    #[init]
    fn init(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        utilization_optimal: u64,
        rate_slope1: u64,
        rate_slope2: u64,
        reserve_factor: u64,
    ) {
        self.params().set(&MarketParams {
            asset_id: asset.clone(),
            utilization_optimal,
            rate_slope1,
            rate_slope2,
            reserve_factor,
        });

        self.borrow_index().set(self.precision());
        self.supply_index().set(self.precision());

        self.pooled_liquidity().set(BigUint::zero());
        self.total_borrowed_principal().set(BigUint::zero());
        self.reserves().set(BigUint::zero());
        self.paused().set(false);

        let timestamp = self.blockchain().get_block_timestamp();
        self.last_timestamp().set(timestamp);

        let mut cache = cache::Cache::new(self);
        self.update_rates(&mut cache);
    }

    #[upgrade]
    fn upgrade(&self) {}
}

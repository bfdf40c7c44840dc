multiversx_sc::imports!();

use crate::storage;
use common_structs::{MarketIndex, MarketSnapshot};

#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage + common_rates::InterestRates + common_math::SharedMathModule
{
    /// Full ledger as of the last accrual.
    #[view(getMarket)]
    fn get_market(&self) -> MarketSnapshot<Self::Api> {
        MarketSnapshot {
            params: self.params().get(),
            pooled_liquidity: self.pooled_liquidity().get(),
            total_borrowed_principal: self.total_borrowed_principal().get(),
            borrow_rate: self.borrow_rate().get(),
            deposit_rate: self.deposit_rate().get(),
            borrow_index: self.borrow_index().get(),
            supply_index: self.supply_index().get(),
            reserves: self.reserves().get(),
            last_accrual_time: self.last_timestamp().get(),
            paused: self.paused().get(),
        }
    }

    /// Indexes an accrual would produce at the current block timestamp.
    ///
    /// Nothing is written; the controller uses this to price debt and deposits
    /// from views.
    #[view(getMarketIndex)]
    fn get_market_index(&self) -> MarketIndex<Self::Api> {
        let current_index = MarketIndex {
            borrow_index: self.borrow_index().get(),
            supply_index: self.supply_index().get(),
        };

        self.simulate_update_indexes(
            self.blockchain().get_block_timestamp(),
            self.last_timestamp().get(),
            &self.pooled_liquidity().get(),
            &self.total_borrowed_principal().get(),
            &self.borrow_rate().get(),
            current_index,
            &self.params().get(),
        )
    }

    /// Utilization in basis points.
    #[view(getUtilization)]
    fn get_utilization(&self) -> BigUint {
        self.calc_utilization(
            &self.total_borrowed_principal().get(),
            &self.pooled_liquidity().get(),
        )
    }
}

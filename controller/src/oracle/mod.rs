use common_errors::ERROR_INVALID_ORACLE;
use common_structs::MarketIndex;

use crate::{cache::Cache, proxy_pool, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait OracleModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Brings the indexes of `asset`'s market up to the current block.
    ///
    /// With `simulate` the pool storage is read in place and the accrual is
    /// computed locally without touching the pool; views use that path.
    /// Otherwise the pool accrues for real and returns its new indexes.
    fn update_asset_index(
        &self,
        asset: &EgldOrEsdtTokenIdentifier<Self::Api>,
        cache: &mut Cache<Self>,
        simulate: bool,
    ) -> MarketIndex<Self::Api> {
        let pool_address = cache.get_cached_pool_address(asset);
        if simulate {
            let current_index = MarketIndex {
                borrow_index: self.borrow_index(pool_address.clone()).get(),
                supply_index: self.supply_index(pool_address.clone()).get(),
            };

            self.simulate_update_indexes(
                cache.current_timestamp,
                self.last_timestamp(pool_address.clone()).get(),
                &self.pooled_liquidity(pool_address.clone()).get(),
                &self.total_borrowed_principal(pool_address.clone()).get(),
                &self.borrow_rate(pool_address.clone()).get(),
                current_index,
                &self.params(pool_address).get(),
            )
        } else {
            self.tx()
                .to(pool_address)
                .typed(proxy_pool::LiquidityPoolProxy)
                .update_indexes()
                .returns(ReturnsResult)
                .sync_call()
        }
    }

    /// USD price of `asset` with 8 decimals.
    ///
    /// A paused aggregator, a missing price and a zero price all fail with
    /// the same oracle error.
    fn get_token_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        if cache.prices_cache.contains(asset) {
            return cache.prices_cache.get(asset);
        }

        let aggregator = cache.price_aggregator_sc.clone();
        require!(
            !self.price_aggregator_paused(aggregator.clone()).get(),
            ERROR_INVALID_ORACLE
        );

        let price = self.prices(aggregator, asset).get();
        require!(price > 0, ERROR_INVALID_ORACLE);

        cache.prices_cache.put(asset, &price);

        price
    }
}

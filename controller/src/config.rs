multiversx_sc::imports!();

use crate::{factory, proxy_pool, storage, validation};
use common_errors::{
    ERROR_ASSET_ALREADY_SUPPORTED, ERROR_PRICE_AGGREGATOR_NOT_SET, ERROR_TEMPLATE_EMPTY,
};
use common_structs::MarketParams;

/// Administrative endpoints.
///
/// Each call must carry the admin cap token, which is returned to the caller
/// in the same transaction.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + factory::FactoryModule
    + common_events::EventsModule
{
    /// Creates the market for `asset` by deploying a new liquidity pool.
    ///
    /// # Arguments
    /// - `asset`: Token the market lends.
    /// - `utilization_optimal`: Kink of the rate curve, in basis points.
    /// - `rate_slope1`: Borrow rate reached at the kink, in basis points.
    /// - `rate_slope2`: Extra borrow rate between the kink and full utilization.
    /// - `reserve_factor`: Share of interest kept as reserves, in basis points.
    ///
    /// # Returns
    /// - `ManagedAddress`: Address of the new pool.
    #[payable]
    #[endpoint(createMarket)]
    fn create_market(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        utilization_optimal: u64,
        rate_slope1: u64,
        rate_slope2: u64,
        reserve_factor: u64,
    ) -> ManagedAddress {
        self.require_admin_cap();
        require!(
            self.pools_map(&asset).is_empty(),
            ERROR_ASSET_ALREADY_SUPPORTED
        );

        let pool_address = self.create_pool(
            &asset,
            utilization_optimal,
            rate_slope1,
            rate_slope2,
            reserve_factor,
        );

        self.pools_map(&asset).set(&pool_address);
        self.markets().insert(asset.clone());

        self.market_created_event(
            &asset,
            &pool_address,
            &MarketParams {
                asset_id: asset.clone(),
                utilization_optimal,
                rate_slope1,
                rate_slope2,
                reserve_factor,
            },
        );

        pool_address
    }

    /// Stops deposits and new borrows on `asset`'s market.
    #[payable]
    #[endpoint(pauseMarket)]
    fn pause_market(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.require_admin_cap();
        self.set_market_paused(&asset, true);
    }

    #[payable]
    #[endpoint(unpauseMarket)]
    fn unpause_market(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.require_admin_cap();
        self.set_market_paused(&asset, false);
    }

    #[payable]
    #[endpoint(setPriceAggregatorAddress)]
    fn set_price_aggregator_address(&self, address: ManagedAddress) {
        self.require_admin_cap();
        require!(!address.is_zero(), ERROR_PRICE_AGGREGATOR_NOT_SET);

        self.price_aggregator_address().set(&address);
    }

    #[payable]
    #[endpoint(setLiquidityLayerTemplate)]
    fn set_liquidity_layer_template(&self, address: ManagedAddress) {
        self.require_admin_cap();
        require!(!address.is_zero(), ERROR_TEMPLATE_EMPTY);

        self.liq_pool_template_address().set(&address);
    }

    fn set_market_paused(&self, asset: &EgldOrEsdtTokenIdentifier, paused: bool) {
        let pool_address = self.require_asset_supported(asset);

        self.tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .set_paused(paused)
            .sync_call();

        self.market_paused_event(asset, paused);
    }
}

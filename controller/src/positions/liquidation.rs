use common_errors::{ERROR_INVALID_ASSET, ERROR_POSITION_HEALTHY};

use crate::{cache::Cache, helpers, oracle, proxy_pool, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_events::EventsModule
    + utils::LendingUtilsModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Liquidates an unhealthy loan.
    ///
    /// **Process**:
    /// 1. Both markets accrue and the debt is resolved at the fresh borrow index.
    /// 2. The health factor must be below `BPS`.
    /// 3. The repayment is credited to the borrow market and retires that much
    ///    principal.
    /// 4. Collateral worth the repaid value plus the liquidation bonus, capped
    ///    at the posted collateral, is paid to `liquidator`.
    ///
    /// The position is removed whatever share of the debt was repaid; any
    /// remaining debt is left with the borrow market.
    fn process_liquidation(
        &self,
        liquidator: &ManagedAddress,
        position_id: u64,
        payment: &EgldOrEsdtTokenPayment<Self::Api>,
        cache: &mut Cache<Self>,
    ) {
        let position = self.require_borrow_position(position_id);
        self.require_amount_greater_than_zero(&payment.amount);
        require!(
            payment.token_identifier == position.borrow_market,
            ERROR_INVALID_ASSET
        );

        let borrow_index = self
            .update_asset_index(&position.borrow_market, cache, false)
            .borrow_index;
        self.update_asset_index(&position.collateral_market, cache, false);

        let debt = self.get_position_debt(&position, &borrow_index);
        let health_factor = self.get_position_health_factor(&position, &debt, cache);
        require!(self.is_liquidatable(&health_factor), ERROR_POSITION_HEALTHY);
        let health_factor = health_factor.unwrap_or_default();

        let borrow_price = self.get_token_price(&position.borrow_market, cache);
        let collateral_price = self.get_token_price(&position.collateral_market, cache);
        let seize_amount = self.calculate_seize_amount(
            &payment.amount,
            &borrow_price,
            &collateral_price,
            &position.collateral_amount,
        );

        let borrow_pool = cache.get_cached_pool_address(&position.borrow_market);
        let collateral_pool = cache.get_cached_pool_address(&position.collateral_market);

        self.tx()
            .to(borrow_pool)
            .typed(proxy_pool::LiquidityPoolProxy)
            .absorb_repayment()
            .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
            .sync_call();

        self.tx()
            .to(collateral_pool)
            .typed(proxy_pool::LiquidityPoolProxy)
            .release_collateral(liquidator, &seize_amount)
            .sync_call();

        self.remove_borrow_position(position_id, &position.owner);

        self.liquidation_event(
            liquidator,
            position_id,
            &payment.amount,
            &seize_amount,
            &health_factor,
            &position,
        );
    }
}

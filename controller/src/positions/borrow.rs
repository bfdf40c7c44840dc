use common_constants::MAX_LTV;
use common_errors::{ERROR_EXCEEDS_LTV, ERROR_INSUFFICIENT_LIQUIDITY, ERROR_SAME_MARKET};
use common_structs::BorrowPosition;

use crate::{cache::Cache, helpers, oracle, proxy_pool, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionBorrowModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_events::EventsModule
    + utils::LendingUtilsModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Opens a loan of `borrow_amount` in `borrow_market` against `collateral`.
    ///
    /// **Process**:
    /// 1. Both amounts must be non-zero; both markets must exist, differ and
    ///    be active.
    /// 2. Both markets accrue, then the loan-to-value at current prices must
    ///    not exceed `MAX_LTV`.
    /// 3. The collateral joins its market's pool and the borrow market lends
    ///    to `caller`, minting the borrow shares.
    ///
    /// # Returns
    /// - Id of the new position.
    fn process_borrow(
        &self,
        caller: &ManagedAddress,
        collateral: &EgldOrEsdtTokenPayment<Self::Api>,
        borrow_market: &EgldOrEsdtTokenIdentifier,
        borrow_amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> u64 {
        self.require_amount_greater_than_zero(&collateral.amount);
        self.require_amount_greater_than_zero(borrow_amount);

        let collateral_market = &collateral.token_identifier;
        let collateral_pool = cache.get_cached_pool_address(collateral_market);
        let borrow_pool = cache.get_cached_pool_address(borrow_market);
        require!(collateral_market != borrow_market, ERROR_SAME_MARKET);

        self.update_asset_index(collateral_market, cache, false);
        self.update_asset_index(borrow_market, cache, false);

        self.require_market_active(&collateral_pool);
        self.require_market_active(&borrow_pool);

        let collateral_price = self.get_token_price(collateral_market, cache);
        let borrow_price = self.get_token_price(borrow_market, cache);

        let collateral_value = self.value_of(&collateral.amount, &collateral_price);
        let borrow_value = self.value_of(borrow_amount, &borrow_price);
        require!(
            self.calculate_ltv(&borrow_value, &collateral_value) <= BigUint::from(MAX_LTV),
            ERROR_EXCEEDS_LTV
        );
        require!(
            &self.pooled_liquidity(borrow_pool.clone()).get() >= borrow_amount,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        self.tx()
            .to(collateral_pool)
            .typed(proxy_pool::LiquidityPoolProxy)
            .add_collateral()
            .egld_or_single_esdt(collateral_market, 0, &collateral.amount)
            .sync_call();

        let minted = self
            .tx()
            .to(borrow_pool)
            .typed(proxy_pool::LiquidityPoolProxy)
            .borrow(caller, borrow_amount)
            .returns(ReturnsResult)
            .sync_call();

        let position = BorrowPosition::new(
            caller.clone(),
            collateral_market.clone(),
            borrow_market.clone(),
            collateral.amount.clone(),
            minted,
        );
        let position_id = self.store_borrow_position(&position);

        self.borrow_event(caller, position_id, borrow_amount, &position);

        position_id
    }
}

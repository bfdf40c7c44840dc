use common_errors::{ERROR_INVALID_ASSET, ERROR_NOT_OWNER};

use crate::{cache::Cache, helpers, oracle, proxy_pool, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_events::EventsModule
    + utils::LendingUtilsModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Closes a loan owned by `caller`.
    ///
    /// The borrow pool resolves the debt and refuses a payment below it; any
    /// excess stays in the pool. The whole collateral then goes back to
    /// `caller` and the position is removed.
    fn process_repay(
        &self,
        caller: &ManagedAddress,
        position_id: u64,
        payment: &EgldOrEsdtTokenPayment<Self::Api>,
        cache: &mut Cache<Self>,
    ) {
        let position = self.require_borrow_position(position_id);
        require!(position.is_owned_by(caller), ERROR_NOT_OWNER);
        self.require_amount_greater_than_zero(&payment.amount);
        require!(
            payment.token_identifier == position.borrow_market,
            ERROR_INVALID_ASSET
        );

        let borrow_pool = cache.get_cached_pool_address(&position.borrow_market);
        let collateral_pool = cache.get_cached_pool_address(&position.collateral_market);

        let debt = self
            .tx()
            .to(borrow_pool)
            .typed(proxy_pool::LiquidityPoolProxy)
            .repay(&position.borrow_shares, &position.index_at_mint)
            .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
            .returns(ReturnsResult)
            .sync_call();

        self.tx()
            .to(collateral_pool)
            .typed(proxy_pool::LiquidityPoolProxy)
            .release_collateral(caller, &position.collateral_amount)
            .sync_call();

        self.remove_borrow_position(position_id, &position.owner);

        self.repay_event(caller, position_id, &payment.amount, &debt, &position);
    }
}

use common_errors::ERROR_NOT_OWNER;

use crate::{cache::Cache, helpers, oracle, proxy_pool, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionWithdrawModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_events::EventsModule
    + utils::LendingUtilsModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Redeems a whole deposit position. The pool pays `caller` directly.
    ///
    /// Works on paused markets so depositors can always exit, as long as the
    /// pool holds enough idle liquidity.
    ///
    /// # Returns
    /// - Amount paid out.
    fn process_withdraw(
        &self,
        caller: &ManagedAddress,
        position_id: u64,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let position = self.require_deposit_position(position_id);
        require!(position.is_owned_by(caller), ERROR_NOT_OWNER);

        self.remove_deposit_position(position_id, &position.owner);

        let pool_address = cache.get_cached_pool_address(&position.market);
        let amount = self
            .tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .withdraw(caller, &position.shares, &position.index_at_mint)
            .returns(ReturnsResult)
            .sync_call();

        self.withdraw_event(caller, position_id, &amount, &position);

        amount
    }
}

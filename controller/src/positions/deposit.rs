use common_structs::DepositPosition;

use crate::{cache::Cache, helpers, oracle, proxy_pool, storage, utils, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionDepositModule:
    storage::Storage
    + validation::ValidationModule
    + oracle::OracleModule
    + common_events::EventsModule
    + utils::LendingUtilsModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Moves `payment` into its market and records the shares as a new
    /// deposit position owned by `caller`.
    ///
    /// The pool rejects deposits while its market is paused.
    ///
    /// # Returns
    /// - Id of the new position.
    fn process_deposit(
        &self,
        caller: &ManagedAddress,
        payment: &EgldOrEsdtTokenPayment<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> u64 {
        self.require_amount_greater_than_zero(&payment.amount);
        let pool_address = cache.get_cached_pool_address(&payment.token_identifier);

        let minted = self
            .tx()
            .to(pool_address)
            .typed(proxy_pool::LiquidityPoolProxy)
            .deposit()
            .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
            .returns(ReturnsResult)
            .sync_call();

        let position =
            DepositPosition::new(caller.clone(), payment.token_identifier.clone(), minted);
        let position_id = self.store_deposit_position(&position);

        self.deposit_event(caller, position_id, &payment.amount, &position);

        position_id
    }
}

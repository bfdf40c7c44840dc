multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{cache::Cache, storage};

use common_errors::{ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_ASSET, ERROR_ZERO_AMOUNT};

/// Helpers shared by every ledger operation: accrual, rate refresh, payment
/// intake and asset transfers.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Accrues interest up to the current block timestamp.
    ///
    /// **Process**:
    /// 1. Returns immediately when the clock has not advanced since the last accrual.
    /// 2. Grows the borrow index at the stored borrow rate.
    /// 3. Grows the supply index at the deposit rate implied by the current utilization.
    /// 4. Books the protocol cut of the new interest into `reserves`.
    /// 5. Moves `last_timestamp` forward and emits `market_state`.
    ///
    /// Never fails. Calling it twice in one block is a no-op the second time.
    fn global_sync(&self, cache: &mut Cache<Self>) {
        if cache.timestamp <= cache.last_timestamp {
            return;
        }

        let old_borrow_index = cache.borrow_index.clone();
        let new_index = self.simulate_update_indexes(
            cache.timestamp,
            cache.last_timestamp,
            &cache.pooled_liquidity,
            &cache.total_borrowed_principal,
            &cache.borrow_rate,
            cache.index(),
            &cache.params,
        );

        cache.reserves += self.calc_reserve_increase(
            &cache.total_borrowed_principal,
            &old_borrow_index,
            &new_index.borrow_index,
            cache.params.reserve_factor,
        );
        cache.borrow_index = new_index.borrow_index;
        cache.supply_index = new_index.supply_index;
        cache.last_timestamp = cache.timestamp;

        self.emit_market_update(cache);
    }

    /// Recomputes utilization and stores the resulting borrow and deposit rates.
    fn update_rates(&self, cache: &mut Cache<Self>) {
        let utilization =
            self.calc_utilization(&cache.total_borrowed_principal, &cache.pooled_liquidity);
        let borrow_rate = self.calc_borrow_rate(&utilization, &cache.params);

        cache.deposit_rate =
            self.calc_deposit_rate(&utilization, &borrow_rate, cache.params.reserve_factor);
        cache.borrow_rate = borrow_rate;
    }

    #[inline(always)]
    fn emit_market_update(&self, cache: &Cache<Self>) {
        self.market_state_event(
            cache.timestamp,
            &cache.params.asset_id,
            &cache.borrow_index,
            &cache.supply_index,
            &cache.pooled_liquidity,
            &cache.total_borrowed_principal,
            &cache.reserves,
        );
    }

    /// Debits `amount` from the pooled liquidity, failing when the market does not hold it.
    fn debit_liquidity(&self, cache: &mut Cache<Self>, amount: &BigUint) {
        require!(cache.has_liquidity(amount), ERROR_INSUFFICIENT_LIQUIDITY);

        cache.pooled_liquidity -= amount;
    }

    /// Transfers `amount` of the market asset to `to`.
    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &BigUint,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(cache.params.asset_id.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Retrieves the attached payment, which must be a non-zero amount of the market asset.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        amount
    }
}

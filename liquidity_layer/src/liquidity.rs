multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{cache::Cache, storage, utils};
use common_errors::{ERROR_MARKET_PAUSED, ERROR_ZERO_AMOUNT};
use common_structs::{MarketIndex, ShareMint};

/// Ledger operations of a single market.
///
/// Every endpoint is reserved to the owner (the controller), accrues interest
/// before touching the ledger and refreshes the rates after mutating it.
#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_rates::InterestRates
    + common_math::SharedMathModule
{
    /// Accrues interest up to the current block and returns the fresh indexes.
    #[only_owner]
    #[endpoint(updateIndexes)]
    fn update_indexes(&self) -> MarketIndex<Self::Api> {
        let mut cache = Cache::new(self);

        self.global_sync(&mut cache);

        cache.index()
    }

    /// Adds the attached payment to the pool and mints deposit shares for it.
    ///
    /// # Returns
    /// - `ShareMint`: the shares and the supply index they were minted at.
    #[payable]
    #[only_owner]
    #[endpoint(deposit)]
    fn deposit(&self) -> ShareMint<Self::Api> {
        let mut cache = Cache::new(self);
        require!(!cache.paused, ERROR_MARKET_PAUSED);

        let amount = self.get_payment_amount(&cache);

        self.global_sync(&mut cache);

        let shares = self.calc_deposit_shares(
            &amount,
            &cache.pooled_liquidity,
            &cache.supply_index,
        );
        cache.pooled_liquidity += &amount;

        self.update_rates(&mut cache);

        ShareMint {
            shares,
            index: cache.supply_index.clone(),
        }
    }

    /// Redeems deposit shares and sends the underlying to `caller`.
    ///
    /// Available while paused.
    ///
    /// # Returns
    /// - `BigUint`: the amount paid out.
    #[only_owner]
    #[endpoint(withdraw)]
    fn withdraw(&self, caller: &ManagedAddress, shares: BigUint, index_at_mint: BigUint) -> BigUint {
        let mut cache = Cache::new(self);

        self.global_sync(&mut cache);

        let amount = self.calc_redeem_amount(&shares, &cache.supply_index, &index_at_mint);
        self.debit_liquidity(&mut cache, &amount);

        self.update_rates(&mut cache);

        self.send_asset(&cache, &amount, caller);

        amount
    }

    /// Lends `amount` to `caller` and mints borrow shares for the new debt.
    #[only_owner]
    #[endpoint(borrow)]
    fn borrow(&self, caller: &ManagedAddress, amount: BigUint) -> ShareMint<Self::Api> {
        let mut cache = Cache::new(self);
        require!(!cache.paused, ERROR_MARKET_PAUSED);
        require!(amount > 0, ERROR_ZERO_AMOUNT);

        self.global_sync(&mut cache);

        let shares = self.calc_borrow_shares(
            &amount,
            &cache.total_borrowed_principal,
            &cache.borrow_index,
        );

        self.debit_liquidity(&mut cache, &amount);
        cache.total_borrowed_principal += &amount;

        self.update_rates(&mut cache);

        self.send_asset(&cache, &amount, caller);

        ShareMint {
            shares,
            index: cache.borrow_index.clone(),
        }
    }

    /// Takes custody of collateral posted against a loan in another market.
    #[payable]
    #[only_owner]
    #[endpoint(addCollateral)]
    fn add_collateral(&self) {
        let mut cache = Cache::new(self);
        require!(!cache.paused, ERROR_MARKET_PAUSED);

        let amount = self.get_payment_amount(&cache);

        self.global_sync(&mut cache);

        cache.pooled_liquidity += &amount;

        self.update_rates(&mut cache);
    }

    /// Settles a loan in full with the attached payment.
    ///
    /// The payment must cover the debt resolved from `borrow_shares`. Any excess
    /// stays in the pool. The principal is reduced by the debt, floored at zero.
    ///
    /// # Returns
    /// - `BigUint`: the resolved debt.
    #[payable]
    #[only_owner]
    #[endpoint(repay)]
    fn repay(&self, borrow_shares: BigUint, index_at_mint: BigUint) -> BigUint {
        let mut cache = Cache::new(self);

        let payment = self.get_payment_amount(&cache);

        self.global_sync(&mut cache);

        let debt = self.calc_debt(&borrow_shares, &cache.borrow_index, &index_at_mint);
        require!(payment >= debt, ERROR_ZERO_AMOUNT);

        cache.total_borrowed_principal =
            self.sub_or_zero(&cache.total_borrowed_principal, &debt);
        cache.pooled_liquidity += &payment;

        self.update_rates(&mut cache);

        debt
    }

    /// Credits a liquidator's repayment and retires that much principal.
    #[payable]
    #[only_owner]
    #[endpoint(absorbRepayment)]
    fn absorb_repayment(&self) {
        let mut cache = Cache::new(self);

        let amount = self.get_payment_amount(&cache);

        self.global_sync(&mut cache);

        cache.total_borrowed_principal =
            self.sub_or_zero(&cache.total_borrowed_principal, &amount);
        cache.pooled_liquidity += &amount;

        self.update_rates(&mut cache);
    }

    /// Pays collateral held by this market out to `to`.
    ///
    /// Used both to return collateral on repay and to hand seized collateral
    /// to a liquidator.
    #[only_owner]
    #[endpoint(releaseCollateral)]
    fn release_collateral(&self, to: &ManagedAddress, amount: BigUint) {
        let mut cache = Cache::new(self);

        self.global_sync(&mut cache);

        self.debit_liquidity(&mut cache, &amount);

        self.update_rates(&mut cache);

        self.send_asset(&cache, &amount, to);
    }

    #[only_owner]
    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        self.paused().set(paused);
    }
}

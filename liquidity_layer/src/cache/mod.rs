use common_structs::{MarketIndex, MarketParams};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of the market ledger, cached from on-chain storage for the
/// duration of one endpoint call.
///
/// Mutable fields are written back when the cache is dropped, so an endpoint
/// reads storage once and commits once no matter how many steps it runs.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub pooled_liquidity: BigUint<C::Api>,
    pub total_borrowed_principal: BigUint<C::Api>,
    pub borrow_rate: BigUint<C::Api>,
    pub deposit_rate: BigUint<C::Api>,
    pub borrow_index: BigUint<C::Api>,
    pub supply_index: BigUint<C::Api>,
    pub reserves: BigUint<C::Api>,
    /// Current block timestamp (seconds).
    pub timestamp: u64,
    pub last_timestamp: u64,
    pub params: MarketParams<C::Api>,
    pub paused: bool,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            pooled_liquidity: sc_ref.pooled_liquidity().get(),
            total_borrowed_principal: sc_ref.total_borrowed_principal().get(),
            borrow_rate: sc_ref.borrow_rate().get(),
            deposit_rate: sc_ref.deposit_rate().get(),
            borrow_index: sc_ref.borrow_index().get(),
            supply_index: sc_ref.supply_index().get(),
            reserves: sc_ref.reserves().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            last_timestamp: sc_ref.last_timestamp().get(),
            params: sc_ref.params().get(),
            paused: sc_ref.paused().get(),
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.pooled_liquidity().set(&self.pooled_liquidity);
        self.sc_ref
            .total_borrowed_principal()
            .set(&self.total_borrowed_principal);
        self.sc_ref.borrow_rate().set(&self.borrow_rate);
        self.sc_ref.deposit_rate().set(&self.deposit_rate);
        self.sc_ref.borrow_index().set(&self.borrow_index);
        self.sc_ref.supply_index().set(&self.supply_index);
        self.sc_ref.reserves().set(&self.reserves);
        self.sc_ref.last_timestamp().set(self.last_timestamp);
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage,
{
    pub fn index(&self) -> MarketIndex<C::Api> {
        MarketIndex {
            borrow_index: self.borrow_index.clone(),
            supply_index: self.supply_index.clone(),
        }
    }

    pub fn has_liquidity(&self, amount: &BigUint<C::Api>) -> bool {
        &self.pooled_liquidity >= amount
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.params.asset_id == *asset
    }
}

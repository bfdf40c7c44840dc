use common_errors::{ERROR_ASSET_NOT_SUPPORTED, ERROR_PRICE_AGGREGATOR_NOT_SET};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-call memo of prices and pool addresses. Holds nothing that needs
/// writing back, so views may use it freely.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,

    pub prices_cache: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, BigUint<C::Api>>,
    pub asset_pools:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, ManagedAddress<C::Api>>,
    pub price_aggregator_sc: ManagedAddress<C::Api>,
    pub current_timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let price_aggregator = sc_ref.price_aggregator_address();
        if !(!price_aggregator.is_empty()) {
            multiversx_sc::contract_base::ErrorHelper::<C::Api>::signal_error_with_message(ERROR_PRICE_AGGREGATOR_NOT_SET);
        }

        Cache {
            sc_ref,
            prices_cache: ManagedMapEncoded::new(),
            asset_pools: ManagedMapEncoded::new(),
            price_aggregator_sc: price_aggregator.get(),
            current_timestamp: sc_ref.blockchain().get_block_timestamp(),
        }
    }

    /// Pool address of `asset`. Fails for assets without a market.
    pub fn get_cached_pool_address(
        &mut self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedAddress<C::Api> {
        if self.asset_pools.contains(asset) {
            return self.asset_pools.get(asset);
        }

        let mapper = self.sc_ref.pools_map(asset);
        if !(!mapper.is_empty()) {
            multiversx_sc::contract_base::ErrorHelper::<C::Api>::signal_error_with_message(ERROR_ASSET_NOT_SUPPORTED);
        }

        let address = mapper.get();
        self.asset_pools.put(asset, &address);

        address
    }
}

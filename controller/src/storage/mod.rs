use common_structs::{BorrowPosition, DepositPosition, MarketParams};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Assets with a live market.
    #[view(getMarkets)]
    #[storage_mapper("markets")]
    fn markets(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Liquidity pool deployed for each asset.
    #[storage_mapper("pools_map")]
    fn pools_map(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<ManagedAddress>;

    /// Template every new liquidity pool is deployed from.
    #[view(getLiquidityLayerTemplate)]
    #[storage_mapper("liq_pool_template_address")]
    fn liq_pool_template_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPriceAggregatorAddress)]
    #[storage_mapper("price_aggregator_address")]
    fn price_aggregator_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Token whose holder may call the administrative endpoints.
    #[view(getAdminCapToken)]
    #[storage_mapper("admin_cap_token")]
    fn admin_cap_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Last id handed out. Deposit and borrow positions share the sequence.
    #[view(getLastPositionId)]
    #[storage_mapper("last_position_id")]
    fn last_position_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("deposit_positions")]
    fn deposit_positions(&self, position_id: u64) -> SingleValueMapper<DepositPosition<Self::Api>>;

    #[storage_mapper("borrow_positions")]
    fn borrow_positions(&self, position_id: u64) -> SingleValueMapper<BorrowPosition<Self::Api>>;

    #[view(getAccountDeposits)]
    #[storage_mapper("account_deposits")]
    fn account_deposits(&self, owner: &ManagedAddress) -> UnorderedSetMapper<u64>;

    #[view(getAccountBorrows)]
    #[storage_mapper("account_borrows")]
    fn account_borrows(&self, owner: &ManagedAddress) -> UnorderedSetMapper<u64>;

    // Liquidity pool storage, read in place.

    #[storage_mapper_from_address("params")]
    fn params(
        &self,
        liquidity_pool_address: ManagedAddress,
    ) -> SingleValueMapper<MarketParams<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("pooled_liquidity")]
    fn pooled_liquidity(
        &self,
        liquidity_pool_address: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("total_borrowed_principal")]
    fn total_borrowed_principal(
        &self,
        liquidity_pool_address: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("borrow_rate")]
    fn borrow_rate(
        &self,
        liquidity_pool_address: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("borrow_index")]
    fn borrow_index(
        &self,
        liquidity_pool_address: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("supply_index")]
    fn supply_index(
        &self,
        liquidity_pool_address: ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("last_timestamp")]
    fn last_timestamp(
        &self,
        liquidity_pool_address: ManagedAddress,
    ) -> SingleValueMapper<u64, ManagedAddress>;

    #[storage_mapper_from_address("paused")]
    fn market_paused(
        &self,
        liquidity_pool_address: ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;

    // Price aggregator storage.

    #[storage_mapper_from_address("prices")]
    fn prices(
        &self,
        price_aggregator_address: ManagedAddress,
        market: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("pause_module:paused")]
    fn price_aggregator_paused(
        &self,
        price_aggregator_address: ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;
}

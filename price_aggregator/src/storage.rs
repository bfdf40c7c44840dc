multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("prices")]
    fn prices(&self, market: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;
}

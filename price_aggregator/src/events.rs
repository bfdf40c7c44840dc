multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("price_updated")]
    fn price_updated_event(
        &self,
        #[indexed] market: &EgldOrEsdtTokenIdentifier,
        #[indexed] price: &BigUint,
        timestamp: u64,
    );

    #[event("admin_changed")]
    fn admin_changed_event(
        &self,
        #[indexed] previous_admin: &ManagedAddress,
        new_admin: &ManagedAddress,
    );
}

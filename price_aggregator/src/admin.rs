multiversx_sc::imports!();

use common_errors::ERROR_INVALID_ORACLE;

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + multiversx_sc_modules::pause::PauseModule
    + crate::events::EventsModule
{
    #[init]
    fn init(&self, admin: ManagedAddress) {
        self.admin().set(&admin);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Hands the writer role over to `new_admin`.
    #[endpoint(setAdmin)]
    fn set_admin(&self, new_admin: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.admin().get(),
            ERROR_INVALID_ORACLE
        );

        self.admin().set(&new_admin);
        self.admin_changed_event(&caller, &new_admin);
    }
}

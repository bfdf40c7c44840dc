multiversx_sc::imports!();

use common_errors::{
    ERROR_ASSET_NOT_SUPPORTED, ERROR_MARKET_PAUSED, ERROR_POSITION_NOT_FOUND, ERROR_UNAUTHORIZED,
    ERROR_ZERO_AMOUNT,
};
use common_structs::{BorrowPosition, DepositPosition};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Pool address of `asset`, failing when no market exists for it.
    fn require_asset_supported(&self, asset: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let mapper = self.pools_map(asset);
        require!(!mapper.is_empty(), ERROR_ASSET_NOT_SUPPORTED);

        mapper.get()
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(*amount > 0, ERROR_ZERO_AMOUNT);
    }

    fn require_market_active(&self, pool_address: &ManagedAddress) {
        require!(
            !self.market_paused(pool_address.clone()).get(),
            ERROR_MARKET_PAUSED
        );
    }

    /// Checks that the call carries exactly one payment of the admin cap token
    /// and hands it straight back to the caller.
    fn require_admin_cap(&self) {
        let payments = self.call_value().all_esdt_transfers();
        require!(payments.len() == 1, ERROR_UNAUTHORIZED);

        let payment = payments.get(0).clone();
        require!(
            payment.token_identifier == self.admin_cap_token().get(),
            ERROR_UNAUTHORIZED
        );

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .single_esdt(
                &payment.token_identifier,
                payment.token_nonce,
                &payment.amount,
            )
            .transfer();
    }

    fn require_deposit_position(&self, position_id: u64) -> DepositPosition<Self::Api> {
        let mapper = self.deposit_positions(position_id);
        require!(!mapper.is_empty(), ERROR_POSITION_NOT_FOUND);

        mapper.get()
    }

    fn require_borrow_position(&self, position_id: u64) -> BorrowPosition<Self::Api> {
        let mapper = self.borrow_positions(position_id);
        require!(!mapper.is_empty(), ERROR_POSITION_NOT_FOUND);

        mapper.get()
    }
}

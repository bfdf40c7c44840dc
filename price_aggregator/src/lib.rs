#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod events;
pub mod storage;
pub mod views;

use common_errors::ERROR_INVALID_ORACLE;

/// Keyed USD price table (8 decimals) with a single authorized writer.
#[multiversx_sc::contract]
pub trait PriceAggregator:
    multiversx_sc_modules::pause::PauseModule
    + events::EventsModule
    + storage::StorageModule
    + views::ViewsModule
    + admin::AdminModule
{
    /// Records the price of `market`. Only the admin may write.
    ///
    /// A zero price is stored as given and reads back as missing.
    #[endpoint(setPrice)]
    fn set_price(&self, market: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.require_is_admin();

        self.prices(&market).set(&price);

        self.price_updated_event(
            &market,
            &price,
            self.blockchain().get_block_timestamp(),
        );
    }

    fn require_is_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERROR_INVALID_ORACLE);
    }
}

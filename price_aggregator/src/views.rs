multiversx_sc::imports!();

use common_errors::ERROR_INVALID_ORACLE;

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    /// Price of `market` in USD with 8 decimals.
    ///
    /// Fails with the invalid oracle error when the feed is paused, or when no
    /// positive price was ever recorded for `market`.
    #[view(getPrice)]
    fn get_price(&self, market: EgldOrEsdtTokenIdentifier) -> BigUint {
        require!(self.not_paused(), ERROR_INVALID_ORACLE);

        let price = self.prices(&market).get();
        require!(price > 0, ERROR_INVALID_ORACLE);

        price
    }

    #[view(hasPrice)]
    fn has_price(&self, market: EgldOrEsdtTokenIdentifier) -> bool {
        let mapper = self.prices(&market);

        !mapper.is_empty() && mapper.get() > 0
    }
}

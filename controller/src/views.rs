use common_structs::{BorrowPosition, DepositPosition};

use crate::{cache::Cache, helpers, oracle, storage, utils, validation};

multiversx_sc::imports!();

/// Read-only queries. Interest is simulated up to the current block, so the
/// figures match what a transaction in this block would see.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + oracle::OracleModule
    + utils::LendingUtilsModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + validation::ValidationModule
{
    #[view(getMarketAddress)]
    fn get_market_address(&self, asset: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        self.require_asset_supported(asset)
    }

    #[view(getDepositPosition)]
    fn get_deposit_position(&self, position_id: u64) -> DepositPosition<Self::Api> {
        self.require_deposit_position(position_id)
    }

    #[view(getBorrowPosition)]
    fn get_borrow_position(&self, position_id: u64) -> BorrowPosition<Self::Api> {
        self.require_borrow_position(position_id)
    }

    /// Amount a withdrawal of the position would pay out now.
    #[view(getDepositValue)]
    fn get_deposit_value(&self, position_id: u64) -> BigUint {
        let position = self.require_deposit_position(position_id);
        let mut cache = Cache::new(self);
        let index = self.update_asset_index(&position.market, &mut cache, true);

        self.calc_redeem_amount(
            &position.shares,
            &index.supply_index,
            &position.index_at_mint,
        )
    }

    /// Debt a repayment would have to cover now.
    #[view(getDebt)]
    fn get_debt(&self, position_id: u64) -> BigUint {
        let position = self.require_borrow_position(position_id);
        let mut cache = Cache::new(self);
        let index = self.update_asset_index(&position.borrow_market, &mut cache, true);

        self.get_position_debt(&position, &index.borrow_index)
    }

    /// Health factor in basis points; empty when the debt is worth nothing.
    #[view(getHealthFactor)]
    fn get_health_factor(&self, position_id: u64) -> OptionalValue<BigUint> {
        let position = self.require_borrow_position(position_id);
        let mut cache = Cache::new(self);
        let index = self.update_asset_index(&position.borrow_market, &mut cache, true);
        let debt = self.get_position_debt(&position, &index.borrow_index);

        self.get_position_health_factor(&position, &debt, &mut cache)
            .into()
    }

    #[view(getPrice)]
    fn get_price(&self, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let mut cache = Cache::new(self);

        self.get_token_price(asset, &mut cache)
    }
}

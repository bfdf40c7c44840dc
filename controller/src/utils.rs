multiversx_sc::imports!();

use crate::cache::Cache;
use crate::{helpers, oracle, storage};
use common_structs::{BorrowPosition, DepositPosition};

/// Position bookkeeping and valuation shared by the position flows and the
/// views.
#[multiversx_sc::module]
pub trait LendingUtilsModule:
    storage::Storage
    + oracle::OracleModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    fn next_position_id(&self) -> u64 {
        self.last_position_id().update(|last_id| {
            *last_id += 1;
            *last_id
        })
    }

    fn store_deposit_position(&self, position: &DepositPosition<Self::Api>) -> u64 {
        let position_id = self.next_position_id();
        self.deposit_positions(position_id).set(position);
        self.account_deposits(&position.owner).insert(position_id);

        position_id
    }

    fn store_borrow_position(&self, position: &BorrowPosition<Self::Api>) -> u64 {
        let position_id = self.next_position_id();
        self.borrow_positions(position_id).set(position);
        self.account_borrows(&position.owner).insert(position_id);

        position_id
    }

    fn remove_deposit_position(&self, position_id: u64, owner: &ManagedAddress) {
        self.deposit_positions(position_id).clear();
        self.account_deposits(owner).swap_remove(&position_id);
    }

    fn remove_borrow_position(&self, position_id: u64, owner: &ManagedAddress) {
        self.borrow_positions(position_id).clear();
        self.account_borrows(owner).swap_remove(&position_id);
    }

    /// Debt of `position` at `borrow_index`.
    fn get_position_debt(
        &self,
        position: &BorrowPosition<Self::Api>,
        borrow_index: &BigUint,
    ) -> BigUint {
        self.calc_debt(
            &position.borrow_shares,
            borrow_index,
            &position.index_at_mint,
        )
    }

    /// Health factor of `position` carrying `debt`, priced through the cache.
    fn get_position_health_factor(
        &self,
        position: &BorrowPosition<Self::Api>,
        debt: &BigUint,
        cache: &mut Cache<Self>,
    ) -> Option<BigUint> {
        let collateral_price = self.get_token_price(&position.collateral_market, cache);
        let borrow_price = self.get_token_price(&position.borrow_market, cache);

        let collateral_value = self.value_of(&position.collateral_amount, &collateral_price);
        let debt_value = self.value_of(debt, &borrow_price);

        self.calculate_health_factor(&collateral_value, &debt_value)
    }
}

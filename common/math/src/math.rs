#![no_std]

use common_constants::{BPS, PRECISION};

multiversx_sc::imports!();

/// Integer helpers shared by the pools and the controller.
///
/// Every division truncates toward zero. Amounts, prices and indexes are plain
/// `BigUint` values; indexes carry the `PRECISION` scale.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn precision(&self) -> BigUint {
        BigUint::from(PRECISION)
    }

    fn bps(&self) -> BigUint {
        BigUint::from(BPS)
    }

    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        (a * b) / denominator
    }

    /// `a - b`, or zero when `b` exceeds `a`.
    fn sub_or_zero(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a > b {
            a - b
        } else {
            BigUint::zero()
        }
    }

    fn min_of(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a < b {
            a.clone()
        } else {
            b.clone()
        }
    }

    /// Value of `amount` at an 8-decimal `price`, kept unscaled.
    fn value_of(&self, amount: &BigUint, price: &BigUint) -> BigUint {
        amount * price
    }

    /// Shares minted for a deposit of `amount`.
    ///
    /// An empty pool, or one whose indexed value rounds to zero, mints 1:1.
    /// Otherwise `amount * pooled_liquidity / (pooled_liquidity * supply_index / PRECISION)`.
    fn calc_deposit_shares(
        &self,
        amount: &BigUint,
        pooled_liquidity: &BigUint,
        supply_index: &BigUint,
    ) -> BigUint {
        let zero = BigUint::zero();
        if pooled_liquidity == &zero {
            return amount.clone();
        }

        let total_value = self.mul_div_floor(pooled_liquidity, supply_index, &self.precision());
        if total_value == zero {
            return amount.clone();
        }

        self.mul_div_floor(amount, pooled_liquidity, &total_value)
    }

    /// Underlying amount redeemed by `shares` minted at `index_at_mint`.
    fn calc_redeem_amount(
        &self,
        shares: &BigUint,
        supply_index: &BigUint,
        index_at_mint: &BigUint,
    ) -> BigUint {
        let zero = BigUint::zero();
        if index_at_mint == &zero || shares == &zero {
            return shares.clone();
        }

        self.mul_div_floor(shares, supply_index, index_at_mint)
    }

    /// Borrow shares minted for a new loan of `amount`.
    fn calc_borrow_shares(
        &self,
        amount: &BigUint,
        total_borrowed_principal: &BigUint,
        borrow_index: &BigUint,
    ) -> BigUint {
        let zero = BigUint::zero();
        if total_borrowed_principal == &zero {
            return amount.clone();
        }

        let total_borrow_value =
            self.mul_div_floor(total_borrowed_principal, borrow_index, &self.precision());
        if total_borrow_value == zero {
            return amount.clone();
        }

        self.mul_div_floor(amount, total_borrowed_principal, &total_borrow_value)
    }

    /// Current debt of `borrow_shares` minted at `index_at_mint`.
    fn calc_debt(
        &self,
        borrow_shares: &BigUint,
        borrow_index: &BigUint,
        index_at_mint: &BigUint,
    ) -> BigUint {
        let zero = BigUint::zero();
        if borrow_shares == &zero || index_at_mint == &zero {
            return borrow_shares.clone();
        }

        self.mul_div_floor(borrow_shares, borrow_index, index_at_mint)
    }
}

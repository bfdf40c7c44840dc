use common_constants::{LIQUIDATION_BONUS, LIQUIDATION_THRESHOLD};

multiversx_sc::imports!();

/// # Controller Math Helpers
///
/// Risk arithmetic on USD values. Values are `amount * price` with the
/// price's 8 decimals left in, so ratios between two values need no rescaling.
///
/// - **Loan-to-value**: `borrow_value * BPS / collateral_value`
/// - **Health factor**: `collateral_value * LIQUIDATION_THRESHOLD / debt_value`,
///   in basis points; below `BPS` the position can be liquidated
/// - **Seizure**: the repaid value converted into collateral units, plus the
///   liquidation bonus, capped at the posted collateral
#[multiversx_sc::module]
pub trait MathsModule: common_math::SharedMathModule {
    /// Loan-to-value in basis points. `collateral_value` must be non-zero.
    fn calculate_ltv(&self, borrow_value: &BigUint, collateral_value: &BigUint) -> BigUint {
        self.mul_div_floor(borrow_value, &self.bps(), collateral_value)
    }

    /// Health factor in basis points, or `None` when there is no debt.
    fn calculate_health_factor(
        &self,
        collateral_value: &BigUint,
        debt_value: &BigUint,
    ) -> Option<BigUint> {
        if debt_value == &BigUint::zero() {
            return None;
        }

        Some(self.mul_div_floor(
            collateral_value,
            &BigUint::from(LIQUIDATION_THRESHOLD),
            debt_value,
        ))
    }

    fn is_liquidatable(&self, health_factor: &Option<BigUint>) -> bool {
        match health_factor {
            Some(health_factor) => health_factor < &self.bps(),
            None => false,
        }
    }

    /// Collateral paid to a liquidator repaying `repay_amount` of debt.
    fn calculate_seize_amount(
        &self,
        repay_amount: &BigUint,
        borrow_price: &BigUint,
        collateral_price: &BigUint,
        collateral_amount: &BigUint,
    ) -> BigUint {
        let base = self.mul_div_floor(repay_amount, borrow_price, collateral_price);
        let bonus = self.mul_div_floor(&base, &BigUint::from(LIQUIDATION_BONUS), &self.bps());

        self.min_of(&(base + bonus), collateral_amount)
    }
}

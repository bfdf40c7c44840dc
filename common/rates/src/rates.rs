#![no_std]
use common_constants::{BPS, SECONDS_PER_YEAR};
use common_structs::{MarketIndex, MarketParams};

multiversx_sc::imports!();

/// The InterestRates module provides the kinked rate curve, the per-second
/// conversion and the index growth used by every market.
///
/// Rates are annual and expressed in basis points. Indexes are `PRECISION`-scaled.
/// Nothing here touches storage; the pool feeds its ledger values in and
/// writes the results back.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Share of pooled liquidity currently lent out, in basis points.
    ///
    /// An empty pool has zero utilization.
    fn calc_utilization(&self, borrowed: &BigUint, pooled: &BigUint) -> BigUint {
        if pooled == &BigUint::zero() {
            return BigUint::zero();
        }

        self.mul_div_floor(borrowed, &self.bps(), pooled)
    }

    /// Annual borrow rate (bps) for a given utilization.
    ///
    /// **Formula**:
    /// - `utilization_optimal == 0`: `rate_slope1`.
    /// - `utilization <= utilization_optimal`: `utilization * rate_slope1 / utilization_optimal`.
    /// - otherwise: `rate_slope1 + (utilization - utilization_optimal) * rate_slope2 / (BPS - utilization_optimal)`,
    ///   or plain `rate_slope2` when that denominator is zero (or would be negative).
    fn calc_borrow_rate(&self, utilization: &BigUint, params: &MarketParams<Self::Api>) -> BigUint {
        let slope1 = BigUint::from(params.rate_slope1);
        let slope2 = BigUint::from(params.rate_slope2);

        if params.utilization_optimal == 0 {
            return slope1;
        }

        let optimal = BigUint::from(params.utilization_optimal);
        if utilization <= &optimal {
            return self.mul_div_floor(utilization, &slope1, &optimal);
        }

        if params.utilization_optimal >= BPS {
            return slope2;
        }

        let excess = utilization - &optimal;
        let denominator = BigUint::from(BPS - params.utilization_optimal);

        slope1 + self.mul_div_floor(&excess, &slope2, &denominator)
    }

    /// Annual deposit rate (bps): `borrow_rate * utilization * (BPS - reserve_factor) / BPS²`.
    fn calc_deposit_rate(
        &self,
        utilization: &BigUint,
        borrow_rate: &BigUint,
        reserve_factor: u64,
    ) -> BigUint {
        if reserve_factor >= BPS {
            return BigUint::zero();
        }

        let bps = self.bps();
        let supplier_share = BigUint::from(BPS - reserve_factor);

        borrow_rate * utilization * &supplier_share / (&bps * &bps)
    }

    /// Converts an annual bps rate to a `PRECISION`-scaled per-second rate.
    ///
    /// The divisions are chained in this order and each one truncates.
    fn calc_rate_per_second(&self, annual_rate: &BigUint) -> BigUint {
        annual_rate * &self.precision() / &BigUint::from(SECONDS_PER_YEAR) / &self.bps()
    }

    /// Simple-interest growth of `index` over `elapsed` seconds:
    /// `index + index * (rate_per_second * elapsed) / PRECISION`.
    fn grow_index(&self, index: &BigUint, annual_rate: &BigUint, elapsed: u64) -> BigUint {
        if elapsed == 0 {
            return index.clone();
        }

        let rate_over_period = self.calc_rate_per_second(annual_rate) * &BigUint::from(elapsed);
        let growth = self.mul_div_floor(index, &rate_over_period, &self.precision());

        index + &growth
    }

    /// Protocol cut of the interest accrued by `principal` while the borrow
    /// index moved from `old_borrow_index` to `new_borrow_index`.
    fn calc_reserve_increase(
        &self,
        principal: &BigUint,
        old_borrow_index: &BigUint,
        new_borrow_index: &BigUint,
        reserve_factor: u64,
    ) -> BigUint {
        let index_delta = self.sub_or_zero(new_borrow_index, old_borrow_index);
        let interest = self.mul_div_floor(principal, &index_delta, &self.precision());

        self.mul_div_floor(&interest, &BigUint::from(reserve_factor), &self.bps())
    }

    /// Indexes an accrual at `current_timestamp` would produce.
    ///
    /// The borrow index grows at the stored borrow rate. The supply index grows
    /// at the deposit rate derived from that borrow rate and the utilization of
    /// the ledger passed in. A clock that has not advanced returns the inputs.
    fn simulate_update_indexes(
        &self,
        current_timestamp: u64,
        last_timestamp: u64,
        pooled: &BigUint,
        borrowed: &BigUint,
        borrow_rate: &BigUint,
        current_index: MarketIndex<Self::Api>,
        params: &MarketParams<Self::Api>,
    ) -> MarketIndex<Self::Api> {
        if current_timestamp <= last_timestamp {
            return current_index;
        }

        let elapsed = current_timestamp - last_timestamp;
        let borrow_index = self.grow_index(&current_index.borrow_index, borrow_rate, elapsed);

        let utilization = self.calc_utilization(borrowed, pooled);
        let supply_rate = self.calc_deposit_rate(&utilization, borrow_rate, params.reserve_factor);
        let supply_index = self.grow_index(&current_index.supply_index, &supply_rate, elapsed);

        MarketIndex {
            borrow_index,
            supply_index,
        }
    }
}

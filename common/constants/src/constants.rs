#![no_std]

/// Basis points representing 100%.
pub const BPS: u64 = 10_000;

/// Fixed-point scale of the borrow and supply indexes (1.0 == 1e12).
pub const PRECISION: u64 = 1_000_000_000_000;

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Maximum loan-to-value accepted when a borrow is opened (80%).
pub const MAX_LTV: u64 = 8_000;

/// Weight applied to collateral value when computing the health factor (85%).
pub const LIQUIDATION_THRESHOLD: u64 = 8_500;

/// Extra collateral paid to a liquidator on top of the repaid value (5%).
pub const LIQUIDATION_BONUS: u64 = 500;

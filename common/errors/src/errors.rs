#![no_std]

pub static ERROR_ZERO_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_EXCEEDS_LTV: &[u8] = b"Loan-to-value exceeds the maximum allowed.";

pub static ERROR_POSITION_HEALTHY: &[u8] = b"Health not low enough for liquidation.";

pub static ERROR_NOT_OWNER: &[u8] = b"Caller is not the owner of the position.";

pub static ERROR_INVALID_ORACLE: &[u8] = b"Invalid oracle.";

pub static ERROR_MARKET_PAUSED: &[u8] = b"Market is paused.";

// Reserved: no code path raises it.
pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] =
    b"Not enough collateral available for this loan.";

pub static ERROR_ASSET_NOT_SUPPORTED: &[u8] = b"Asset not supported.";

pub static ERROR_ASSET_ALREADY_SUPPORTED: &[u8] = b"Asset already supported.";

pub static ERROR_SAME_MARKET: &[u8] = b"Collateral and borrow markets must differ.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_POSITION_NOT_FOUND: &[u8] = b"Position not found.";

pub static ERROR_UNAUTHORIZED: &[u8] = b"Admin capability required.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Liquidity pool contract template is empty.";

pub static ERROR_PRICE_AGGREGATOR_NOT_SET: &[u8] = b"Price aggregator not set.";

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::MarketParams;

/// The Storage trait provides on-chain storage mappers and view functions
/// for accessing the ledger of a single market.
#[multiversx_sc::module]
pub trait Storage {
    /// Rate model configuration and the asset this market lends.
    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<MarketParams<Self::Api>>;

    /// Units of the asset currently held by the market.
    ///
    /// Deposits, collateral and repayments credit it; withdrawals, borrows and
    /// released collateral debit it. It is checked before every debit.
    #[view(getPooledLiquidity)]
    #[storage_mapper("pooled_liquidity")]
    fn pooled_liquidity(&self) -> SingleValueMapper<BigUint>;

    /// Sum of the amounts lent out, without accrued interest.
    #[view(getTotalBorrowedPrincipal)]
    #[storage_mapper("total_borrowed_principal")]
    fn total_borrowed_principal(&self) -> SingleValueMapper<BigUint>;

    /// Annual borrow rate in basis points, as of the last mutation.
    #[view(getBorrowRate)]
    #[storage_mapper("borrow_rate")]
    fn borrow_rate(&self) -> SingleValueMapper<BigUint>;

    /// Annual deposit rate in basis points, as of the last mutation.
    #[view(getDepositRate)]
    #[storage_mapper("deposit_rate")]
    fn deposit_rate(&self) -> SingleValueMapper<BigUint>;

    #[view(getBorrowIndex)]
    #[storage_mapper("borrow_index")]
    fn borrow_index(&self) -> SingleValueMapper<BigUint>;

    #[view(getSupplyIndex)]
    #[storage_mapper("supply_index")]
    fn supply_index(&self) -> SingleValueMapper<BigUint>;

    /// Protocol share of accrued borrow interest. Informational, never moves liquidity.
    #[view(getReserves)]
    #[storage_mapper("reserves")]
    fn reserves(&self) -> SingleValueMapper<BigUint>;

    /// Timestamp (seconds) of the last accrual.
    #[view(getLastAccrualTime)]
    #[storage_mapper("last_timestamp")]
    fn last_timestamp(&self) -> SingleValueMapper<u64>;

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;
}

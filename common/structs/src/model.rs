#![no_std]

use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

/// Rate model configuration of one market. All values are basis points.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct MarketParams<M: ManagedTypeApi> {
    pub asset_id: EgldOrEsdtTokenIdentifier<M>,
    pub utilization_optimal: u64,
    pub rate_slope1: u64,
    pub rate_slope2: u64,
    pub reserve_factor: u64,
}

/// The two compounding indexes of a market, `PRECISION`-scaled.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct MarketIndex<M: ManagedTypeApi> {
    pub borrow_index: BigUint<M>,
    pub supply_index: BigUint<M>,
}

/// Full ledger state of a market as seen after the latest accrual.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct MarketSnapshot<M: ManagedTypeApi> {
    pub params: MarketParams<M>,
    pub pooled_liquidity: BigUint<M>,
    pub total_borrowed_principal: BigUint<M>,
    pub borrow_rate: BigUint<M>,
    pub deposit_rate: BigUint<M>,
    pub borrow_index: BigUint<M>,
    pub supply_index: BigUint<M>,
    pub reserves: BigUint<M>,
    pub last_accrual_time: u64,
    pub paused: bool,
}

impl<M: ManagedTypeApi> MarketSnapshot<M> {
    pub fn index(&self) -> MarketIndex<M> {
        MarketIndex {
            borrow_index: self.borrow_index.clone(),
            supply_index: self.supply_index.clone(),
        }
    }
}

/// Shares minted by a pool together with the index they were minted at.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct ShareMint<M: ManagedTypeApi> {
    pub shares: BigUint<M>,
    pub index: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct DepositPosition<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub market: EgldOrEsdtTokenIdentifier<M>,
    pub shares: BigUint<M>,
    pub index_at_mint: BigUint<M>,
}

impl<M: ManagedTypeApi> DepositPosition<M> {
    pub fn new(
        owner: ManagedAddress<M>,
        market: EgldOrEsdtTokenIdentifier<M>,
        minted: ShareMint<M>,
    ) -> Self {
        DepositPosition {
            owner,
            market,
            shares: minted.shares,
            index_at_mint: minted.index,
        }
    }

    pub fn is_owned_by(&self, address: &ManagedAddress<M>) -> bool {
        &self.owner == address
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct BorrowPosition<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub collateral_market: EgldOrEsdtTokenIdentifier<M>,
    pub borrow_market: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_amount: BigUint<M>,
    pub borrow_shares: BigUint<M>,
    pub index_at_mint: BigUint<M>,
}

impl<M: ManagedTypeApi> BorrowPosition<M> {
    pub fn new(
        owner: ManagedAddress<M>,
        collateral_market: EgldOrEsdtTokenIdentifier<M>,
        borrow_market: EgldOrEsdtTokenIdentifier<M>,
        collateral_amount: BigUint<M>,
        minted: ShareMint<M>,
    ) -> Self {
        BorrowPosition {
            owner,
            collateral_market,
            borrow_market,
            collateral_amount,
            borrow_shares: minted.shares,
            index_at_mint: minted.index,
        }
    }

    pub fn is_owned_by(&self, address: &ManagedAddress<M>) -> bool {
        &self.owner == address
    }
}

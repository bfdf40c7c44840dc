#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("market_created")]
    fn market_created_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] market_address: &ManagedAddress,
        params: &MarketParams<Self::Api>,
    );

    // Emitted by a pool every time accrual advances its clock
    #[event("market_state")]
    fn market_state_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] borrow_index: &BigUint,
        #[indexed] supply_index: &BigUint,
        #[indexed] pooled_liquidity: &BigUint,
        #[indexed] total_borrowed_principal: &BigUint,
        #[indexed] reserves: &BigUint,
    );

    #[event("market_paused")]
    fn market_paused_event(&self, #[indexed] asset: &EgldOrEsdtTokenIdentifier, paused: bool);

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] position_id: u64,
        #[indexed] amount: &BigUint,
        position: &DepositPosition<Self::Api>,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] position_id: u64,
        #[indexed] amount: &BigUint,
        position: &DepositPosition<Self::Api>,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] position_id: u64,
        #[indexed] amount: &BigUint,
        position: &BorrowPosition<Self::Api>,
    );

    // `debt` is the resolved debt at repay time, `amount` what was actually paid
    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] position_id: u64,
        #[indexed] amount: &BigUint,
        #[indexed] debt: &BigUint,
        position: &BorrowPosition<Self::Api>,
    );

    #[event("liquidation")]
    fn liquidation_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] position_id: u64,
        #[indexed] repay_amount: &BigUint,
        #[indexed] seized_amount: &BigUint,
        #[indexed] health_factor: &BigUint,
        position: &BorrowPosition<Self::Api>,
    );
}

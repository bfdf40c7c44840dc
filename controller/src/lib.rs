#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod factory;
pub mod helpers;
pub mod oracle;
pub mod positions;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait Controller:
    positions::deposit::PositionDepositModule
    + positions::withdraw::PositionWithdrawModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::liquidation::PositionLiquidationModule
    + config::ConfigModule
    + factory::FactoryModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + views::ViewsModule
    + helpers::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Initializes the controller with its collaborators.
    ///
    /// # Arguments
    /// - `price_aggregator_address`: Oracle read for every valuation.
    /// - `liquidity_layer_template`: Template new markets are deployed from.
    /// - `admin_cap_token`: Token that unlocks the administrative endpoints.
    #[init]
    fn init(
        &self,
        price_aggregator_address: &ManagedAddress,
        liquidity_layer_template: &ManagedAddress,
        admin_cap_token: &TokenIdentifier,
    ) {
        self.price_aggregator_address()
            .set(price_aggregator_address);
        self.liq_pool_template_address()
            .set(liquidity_layer_template);
        self.admin_cap_token().set(admin_cap_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Deposits the attached payment into its market.
    ///
    /// # Payment
    /// - One fungible payment of a supported asset.
    ///
    /// # Returns
    /// - Id of the new deposit position.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self) -> u64 {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        let payment = self.get_fungible_payment();

        self.process_deposit(&caller, &payment, &mut cache)
    }

    /// Withdraws a whole deposit position owned by the caller.
    ///
    /// # Returns
    /// - Amount paid out, principal plus earned interest.
    #[endpoint(withdraw)]
    fn withdraw(&self, position_id: u64) -> BigUint {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();

        self.process_withdraw(&caller, position_id, &mut cache)
    }

    /// Borrows `borrow_amount` of `borrow_market` against the attached collateral.
    ///
    /// # Payment
    /// - One fungible payment of the collateral asset.
    ///
    /// # Returns
    /// - Id of the new borrow position.
    #[payable]
    #[endpoint(borrow)]
    fn borrow(&self, borrow_market: EgldOrEsdtTokenIdentifier, borrow_amount: BigUint) -> u64 {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        let collateral = self.get_fungible_payment();

        self.process_borrow(
            &caller,
            &collateral,
            &borrow_market,
            &borrow_amount,
            &mut cache,
        )
    }

    /// Repays a borrow position in full and returns its collateral.
    ///
    /// # Payment
    /// - The borrowed asset, at least the current debt. Any excess is kept.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self, position_id: u64) {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        let payment = self.get_fungible_payment();

        self.process_repay(&caller, position_id, &payment, &mut cache);
    }

    /// Liquidates an unhealthy borrow position. Open to anyone.
    ///
    /// # Payment
    /// - The borrowed asset; the amount repaid on the borrower's behalf.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(&self, position_id: u64) {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        let payment = self.get_fungible_payment();

        self.process_liquidation(&caller, position_id, &payment, &mut cache);
    }

    fn get_fungible_payment(&self) -> EgldOrEsdtTokenPayment<Self::Api> {
        let (token_identifier, amount) = self.call_value().egld_or_single_fungible_esdt();

        EgldOrEsdtTokenPayment::new(token_identifier, 0, amount)
    }
}

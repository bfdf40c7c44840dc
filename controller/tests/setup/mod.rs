use crate::constants::*;

use controller::{
    proxy_controller, proxy_pool, proxy_price_aggregator, BorrowPosition, DepositPosition,
    MarketSnapshot,
};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult,
    TestAddress, TestEsdtTransfer,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestTokenIdentifier},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("controller");

    blockchain.register_contract(CONTROLLER_PATH, controller::ContractBuilder);
    blockchain.register_contract(LIQUIDITY_POOL_PATH, liquidity_layer::ContractBuilder);
    blockchain.register_contract(PRICE_AGGREGATOR_PATH, price_aggregator::ContractBuilder);

    blockchain
}

pub fn asset(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn message(error: &[u8]) -> &str {
    core::str::from_utf8(error).unwrap()
}

pub struct LendingPoolTestState {
    pub world: ScenarioWorld,
    pub controller_sc: ManagedAddress<StaticApi>,
    pub template_address_liquidity_pool: ManagedAddress<StaticApi>,
    pub price_aggregator_sc: ManagedAddress<StaticApi>,
    pub usdc_market: ManagedAddress<StaticApi>,
    pub egld_market: ManagedAddress<StaticApi>,
}

impl LendingPoolTestState {
    /// Controller with a USDC and an EGLD market, both priced at $1.
    pub fn new() -> Self {
        Self::new_with_params(U_OPTIMAL, R_SLOPE1, R_SLOPE2, RESERVE_FACTOR)
    }

    /// Same as `new`, with both markets on the given rate model.
    pub fn new_with_params(
        utilization_optimal: u64,
        rate_slope1: u64,
        rate_slope2: u64,
        reserve_factor: u64,
    ) -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let template_address_liquidity_pool = setup_template_liquidity_pool(&mut world);
        let price_aggregator_sc = setup_price_aggregator(&mut world);
        let controller_sc = setup_controller(
            &mut world,
            &template_address_liquidity_pool,
            &price_aggregator_sc,
        );

        let mut state = Self {
            world,
            controller_sc,
            template_address_liquidity_pool,
            price_aggregator_sc,
            usdc_market: ManagedAddress::zero(),
            egld_market: ManagedAddress::zero(),
        };

        state.usdc_market = state.create_market_with_params(
            USDC_TOKEN,
            utilization_optimal,
            rate_slope1,
            rate_slope2,
            reserve_factor,
        );
        state.egld_market = state.create_market_with_params(
            EGLD_TOKEN,
            utilization_optimal,
            rate_slope1,
            rate_slope2,
            reserve_factor,
        );
        state.set_price(USDC_TOKEN, PRICE_ONE_DOLLAR);
        state.set_price(EGLD_TOKEN, PRICE_ONE_DOLLAR);

        state
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn check_balance(&mut self, address: TestAddress, token: TestTokenIdentifier, amount: u64) {
        self.world
            .check_account(address)
            .esdt_balance(token, BigUint::<StaticApi>::from(amount));
    }

    // Oracle

    pub fn set_price(&mut self, token: TestTokenIdentifier, price: u64) {
        self.world
            .tx()
            .from(ORACLE_ADMIN_ADDRESS)
            .to(self.price_aggregator_sc.clone())
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .set_price(asset(token), BigUint::from(price))
            .run();
    }

    pub fn pause_price_aggregator(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.price_aggregator_sc.clone())
            .typed(proxy_price_aggregator::PriceAggregatorProxy)
            .pause_endpoint()
            .run();
    }

    // Administration

    pub fn create_market(&mut self, token: TestTokenIdentifier) -> ManagedAddress<StaticApi> {
        self.create_market_with_params(token, U_OPTIMAL, R_SLOPE1, R_SLOPE2, RESERVE_FACTOR)
    }

    pub fn create_market_with_params(
        &mut self,
        token: TestTokenIdentifier,
        utilization_optimal: u64,
        rate_slope1: u64,
        rate_slope2: u64,
        reserve_factor: u64,
    ) -> ManagedAddress<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .create_market(
                asset(token),
                utilization_optimal,
                rate_slope1,
                rate_slope2,
                reserve_factor,
            )
            .esdt(TestEsdtTransfer(ADMIN_CAP_TOKEN, 0, 1u64))
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_market_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        admin_cap: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .create_market(
                asset(token),
                U_OPTIMAL,
                R_SLOPE1,
                R_SLOPE2,
                RESERVE_FACTOR,
            )
            .esdt(TestEsdtTransfer(admin_cap, 0, 1u64))
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn create_market_without_payment_error(
        &mut self,
        token: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .create_market(
                asset(token),
                U_OPTIMAL,
                R_SLOPE1,
                R_SLOPE2,
                RESERVE_FACTOR,
            )
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn pause_market(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .pause_market(asset(token))
            .esdt(TestEsdtTransfer(ADMIN_CAP_TOKEN, 0, 1u64))
            .run();
    }

    pub fn unpause_market(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .unpause_market(asset(token))
            .esdt(TestEsdtTransfer(ADMIN_CAP_TOKEN, 0, 1u64))
            .run();
    }

    // Deposits

    pub fn deposit(&mut self, from: TestAddress, token: TestTokenIdentifier, amount: u64) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .deposit()
            .esdt(TestEsdtTransfer(token, 0, amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_error(
        &mut self,
        from: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .deposit()
            .esdt(TestEsdtTransfer(token, 0, amount))
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn deposit_without_payment_error(&mut self, from: TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .deposit()
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn withdraw(&mut self, from: TestAddress, position_id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .withdraw(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_error(&mut self, from: TestAddress, position_id: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .withdraw(position_id)
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    // Loans

    pub fn borrow(
        &mut self,
        from: TestAddress,
        collateral_token: TestTokenIdentifier,
        collateral_amount: u64,
        borrow_token: TestTokenIdentifier,
        borrow_amount: u64,
    ) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .borrow(asset(borrow_token), BigUint::from(borrow_amount))
            .esdt(TestEsdtTransfer(collateral_token, 0, collateral_amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_error(
        &mut self,
        from: TestAddress,
        collateral_token: TestTokenIdentifier,
        collateral_amount: u64,
        borrow_token: TestTokenIdentifier,
        borrow_amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .borrow(asset(borrow_token), BigUint::from(borrow_amount))
            .esdt(TestEsdtTransfer(collateral_token, 0, collateral_amount))
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn borrow_without_collateral_error(
        &mut self,
        from: TestAddress,
        borrow_token: TestTokenIdentifier,
        borrow_amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .borrow(asset(borrow_token), BigUint::from(borrow_amount))
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn repay(
        &mut self,
        from: TestAddress,
        position_id: u64,
        token: TestTokenIdentifier,
        amount: u64,
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .repay(position_id)
            .esdt(TestEsdtTransfer(token, 0, amount))
            .run();
    }

    pub fn repay_error(
        &mut self,
        from: TestAddress,
        position_id: u64,
        token: TestTokenIdentifier,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .repay(position_id)
            .esdt(TestEsdtTransfer(token, 0, amount))
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn repay_without_payment_error(
        &mut self,
        from: TestAddress,
        position_id: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .repay(position_id)
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn liquidate_without_payment_error(
        &mut self,
        from: TestAddress,
        position_id: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .liquidate(position_id)
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn liquidate(
        &mut self,
        from: TestAddress,
        position_id: u64,
        token: TestTokenIdentifier,
        amount: u64,
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .liquidate(position_id)
            .esdt(TestEsdtTransfer(token, 0, amount))
            .run();
    }

    pub fn liquidate_error(
        &mut self,
        from: TestAddress,
        position_id: u64,
        token: TestTokenIdentifier,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .liquidate(position_id)
            .esdt(TestEsdtTransfer(token, 0, amount))
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    // Views

    pub fn get_deposit_position(&mut self, position_id: u64) -> DepositPosition<StaticApi> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_deposit_position(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_borrow_position(&mut self, position_id: u64) -> BorrowPosition<StaticApi> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_borrow_position(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_borrow_position_error(&mut self, position_id: u64, error_message: &[u8]) {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_borrow_position(position_id)
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn get_deposit_position_error(&mut self, position_id: u64, error_message: &[u8]) {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_deposit_position(position_id)
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn get_account_deposits(&mut self, owner: TestAddress) -> Vec<u64> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_account_deposits(owner.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn get_account_borrows(&mut self, owner: TestAddress) -> Vec<u64> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_account_borrows(owner.to_managed_address())
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn get_deposit_value(&mut self, position_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_deposit_value(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_debt(&mut self, position_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_debt(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_health_factor(&mut self, position_id: u64) -> Option<BigUint<StaticApi>> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_health_factor(position_id)
            .returns(ReturnsResult)
            .run()
            .into_option()
    }

    pub fn get_price(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_price(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_price_error(&mut self, token: TestTokenIdentifier, error_message: &[u8]) {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_price(asset(token))
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn get_market_address(&mut self, token: TestTokenIdentifier) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_market_address(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_market_address_error(&mut self, token: TestTokenIdentifier, error_message: &[u8]) {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .get_market_address(asset(token))
            .returns(ExpectMessage(message(error_message)))
            .run();
    }

    pub fn get_markets(&mut self) -> Vec<EgldOrEsdtTokenIdentifier<StaticApi>> {
        self.world
            .query()
            .to(self.controller_sc.clone())
            .typed(proxy_controller::ControllerProxy)
            .markets()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn get_market(&mut self, market: ManagedAddress<StaticApi>) -> MarketSnapshot<StaticApi> {
        self.world
            .query()
            .to(market)
            .typed(proxy_pool::LiquidityPoolProxy)
            .get_market()
            .returns(ReturnsResult)
            .run()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(ADMIN_CAP_TOKEN, BigUint::<StaticApi>::from(1u64));
    world.account(ORACLE_ADMIN_ADDRESS).nonce(1);

    for user in [SUPPLIER_ADDRESS, BORROWER_ADDRESS, LIQUIDATOR_ADDRESS] {
        world
            .account(user)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::<StaticApi>::from(INITIAL_BALANCE))
            .esdt_balance(EGLD_TOKEN, BigUint::<StaticApi>::from(INITIAL_BALANCE))
            .esdt_balance(XOXNO_TOKEN, BigUint::<StaticApi>::from(INITIAL_BALANCE));
    }
}

pub fn setup_template_liquidity_pool(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_pool::LiquidityPoolProxy)
        .init(
            asset(USDC_TOKEN),
            U_OPTIMAL,
            R_SLOPE1,
            R_SLOPE2,
            RESERVE_FACTOR,
        )
        .code(LIQUIDITY_POOL_PATH)
        .new_address(LIQUIDITY_POOL_ADDRESS)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_price_aggregator(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_price_aggregator::PriceAggregatorProxy)
        .init(ORACLE_ADMIN_ADDRESS.to_managed_address())
        .code(PRICE_AGGREGATOR_PATH)
        .new_address(PRICE_AGGREGATOR_ADDRESS)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_controller(
    world: &mut ScenarioWorld,
    template_address_liquidity_pool: &ManagedAddress<StaticApi>,
    price_aggregator_sc: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_controller::ControllerProxy)
        .init(
            price_aggregator_sc,
            template_address_liquidity_pool,
            ADMIN_CAP_TOKEN.to_token_identifier(),
        )
        .code(CONTROLLER_PATH)
        .new_address(CONTROLLER_ADDRESS)
        .returns(ReturnsNewManagedAddress)
        .run()
}

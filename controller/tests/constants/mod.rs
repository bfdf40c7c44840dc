use multiversx_sc::types::{TestAddress, TestSCAddress};
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const U_OPTIMAL: u64 = 8_000; // 80%
pub const R_SLOPE1: u64 = 400; // 4%
pub const R_SLOPE2: u64 = 7_500; // 75%
pub const RESERVE_FACTOR: u64 = 1_000; // 10%

pub const PRICE_ONE_DOLLAR: u64 = 100_000_000; // 8 decimals

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const EGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const XOXNO_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("XOXNO-abcdef");
pub const ADMIN_CAP_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("ADMIN-abcdef");

pub const INITIAL_BALANCE: u64 = 10_000_000;

pub const CONTROLLER_ADDRESS: TestSCAddress = TestSCAddress::new("controller");
pub const LIQUIDITY_POOL_ADDRESS: TestSCAddress = TestSCAddress::new("liquidity-pool");
pub const PRICE_AGGREGATOR_ADDRESS: TestSCAddress = TestSCAddress::new("price-aggregator");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const ORACLE_ADMIN_ADDRESS: TestAddress = TestAddress::new("oracle-admin");
pub const SUPPLIER_ADDRESS: TestAddress = TestAddress::new("supplier");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");

pub const CONTROLLER_PATH: MxscPath = MxscPath::new("output/controller.mxsc.json");
pub const LIQUIDITY_POOL_PATH: MxscPath =
    MxscPath::new("../liquidity_layer/output/liquidity_layer.mxsc.json");
pub const PRICE_AGGREGATOR_PATH: MxscPath =
    MxscPath::new("../price_aggregator/output/price_aggregator.mxsc.json");

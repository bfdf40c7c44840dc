use crate::{proxy_pool, storage};
use common_errors::ERROR_TEMPLATE_EMPTY;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait FactoryModule: storage::Storage {
    /// Deploys a liquidity pool for `asset` from the stored template. The
    /// controller becomes the owner of the new pool.
    fn create_pool(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        utilization_optimal: u64,
        rate_slope1: u64,
        rate_slope2: u64,
        reserve_factor: u64,
    ) -> ManagedAddress {
        require!(
            !self.liq_pool_template_address().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );

        self.tx()
            .typed(proxy_pool::LiquidityPoolProxy)
            .init(
                asset,
                utilization_optimal,
                rate_slope1,
                rate_slope2,
                reserve_factor,
            )
            .from_source(self.liq_pool_template_address().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call()
    }
}

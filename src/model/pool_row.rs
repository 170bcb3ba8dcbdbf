use crate::{
    helpers::{format_percent, format_usd},
    types::Pool,
};

/// A pool with every numeric field rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRow {
    pub symbol: String,
    pub project: String,
    pub chain: String,
    pub tvl_usd: String,
    pub apy: String,
    pub apy_base: String,
    pub apy_mean_30d: String,
}

impl From<Pool> for PoolRow {
    fn from(pool: Pool) -> Self {
        PoolRow {
            tvl_usd: format_usd(pool.tvl_usd),
            apy: format_percent(pool.apy),
            apy_base: format_percent(pool.apy_base),
            apy_mean_30d: format_percent(pool.apy_mean_30d),
            symbol: pool.symbol,
            project: pool.project,
            chain: pool.chain,
        }
    }
}

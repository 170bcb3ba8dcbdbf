use tracing::{debug, error};

use crate::{
    error::Error, helpers::symbol_matches, model::PoolRow,
    provider::PoolSource, types::Pool,
};

/// Fetches, filters and ranks pools for `token`. Failures are logged and
/// reported as an empty result.
pub async fn top_pools<S: PoolSource>(
    source: &S,
    token: &str,
    top_n: usize,
) -> Vec<PoolRow> {
    match try_top_pools(source, token, top_n).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Error fetching pool data: {}", e);
            vec![]
        },
    }
}

pub async fn try_top_pools<S: PoolSource>(
    source: &S,
    token: &str,
    top_n: usize,
) -> Result<Vec<PoolRow>, Error> {
    let pools = source.fetch_pools().await?;
    let total = pools.len();
    let selected = select_pools(pools, token, top_n);

    debug!(
        "Selected {} of {} pools for token {}",
        selected.len(),
        total,
        token
    );

    Ok(selected.into_iter().map(PoolRow::from).collect())
}

/// Keeps pools whose symbol contains `token` (any case) and whose APY is
/// strictly positive, ordered by TVL descending and cut to `top_n`.
pub fn select_pools(pools: Vec<Pool>, token: &str, top_n: usize) -> Vec<Pool> {
    let mut items: Vec<Pool> = pools
        .into_iter()
        .filter(|pool| pool.apy.is_some_and(|apy| apy > 0.0))
        .filter(|pool| symbol_matches(&pool.symbol, token))
        .collect();

    items.sort_by(|a, b| b.tvl_usd.total_cmp(&a.tvl_usd));
    items.truncate(top_n);

    items
}

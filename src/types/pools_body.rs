use serde::Deserialize;

/// Top-level body of the yields `/pools` endpoint.
#[derive(Debug, Deserialize)]
pub struct PoolsBody {
    pub data: Vec<Pool>,
}

/// A single pool as reported upstream. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub symbol: String,
    pub project: String,
    pub chain: String,
    pub tvl_usd: f64,
    pub apy: Option<f64>,
    pub apy_base: Option<f64>,
    #[serde(rename = "apyMean30d")]
    pub apy_mean_30d: Option<f64>,
}

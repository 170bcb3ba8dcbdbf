use chrono::{DateTime, Utc};

use crate::model::PoolRow;

const RANK_WIDTH: usize = 4;
const SYMBOL_WIDTH: usize = 20;
const PROJECT_WIDTH: usize = 20;
const CHAIN_WIDTH: usize = 12;
const TVL_WIDTH: usize = 20;
const APY_WIDTH: usize = 10;
const APY_BASE_WIDTH: usize = 10;
const APY_MEAN_WIDTH: usize = 10;

/// Column widths plus one space between each of the eight columns.
pub const TABLE_WIDTH: usize = RANK_WIDTH
    + SYMBOL_WIDTH
    + PROJECT_WIDTH
    + CHAIN_WIDTH
    + TVL_WIDTH
    + APY_WIDTH
    + APY_BASE_WIDTH
    + APY_MEAN_WIDTH
    + 7;

pub fn render_table(rows: &[PoolRow]) -> String {
    render_table_at(rows, Utc::now())
}

pub fn render_table_at(rows: &[PoolRow], generated_at: DateTime<Utc>) -> String {
    let mut table = String::new();
    let heavy_rule = "=".repeat(TABLE_WIDTH);
    let light_rule = "-".repeat(TABLE_WIDTH);

    table.push_str(&heavy_rule);
    table.push('\n');
    table.push_str(&format_line(
        "Rank", "Symbol", "Project", "Chain", "TVL (USD)", "APY", "Base APY", "30d Mean",
    ));
    table.push_str(&heavy_rule);
    table.push('\n');

    for (index, row) in rows.iter().enumerate() {
        let rank = (index + 1).to_string();
        table.push_str(&format_line(
            &rank,
            &row.symbol,
            &row.project,
            &row.chain,
            &row.tvl_usd,
            &row.apy,
            &row.apy_base,
            &row.apy_mean_30d,
        ));
    }

    table.push_str(&light_rule);
    table.push('\n');
    table.push_str(&format!(
        "Note: APY values are annualized, sourced from DefiLlama and subject to change. Generated {}.\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    table
}

#[allow(clippy::too_many_arguments)]
fn format_line(
    rank: &str,
    symbol: &str,
    project: &str,
    chain: &str,
    tvl: &str,
    apy: &str,
    apy_base: &str,
    apy_mean: &str,
) -> String {
    format!(
        "{:<rw$} {:<sw$} {:<pw$} {:<cw$} {:>tw$} {:>aw$} {:>bw$} {:>mw$}\n",
        rank,
        symbol,
        project,
        chain,
        tvl,
        apy,
        apy_base,
        apy_mean,
        rw = RANK_WIDTH,
        sw = SYMBOL_WIDTH,
        pw = PROJECT_WIDTH,
        cw = CHAIN_WIDTH,
        tw = TVL_WIDTH,
        aw = APY_WIDTH,
        bw = APY_BASE_WIDTH,
        mw = APY_MEAN_WIDTH,
    )
}

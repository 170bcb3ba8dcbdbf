pub use self::{
    interactive::run,
    table::{render_table, render_table_at},
    top_pools::{select_pools, top_pools, try_top_pools},
};

pub mod interactive;
pub mod table;
pub mod top_pools;

#[cfg(test)]
pub(crate) mod fixtures;

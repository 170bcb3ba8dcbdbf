pub use self::pool_row::PoolRow;

mod pool_row;

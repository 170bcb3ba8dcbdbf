pub use self::pools_body::{Pool, PoolsBody};

mod pools_body;

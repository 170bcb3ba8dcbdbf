use crate::{error::Error, types::Pool};

pub use self::http::HTTP;

mod http;

/// Anything that can produce the full upstream pool list.
#[allow(async_fn_in_trait)]
pub trait PoolSource {
    async fn fetch_pools(&self) -> Result<Vec<Pool>, Error>;
}

use std::{
    io,
    sync::{Arc, Mutex},
};

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::{error::Error, provider::PoolSource, types::Pool};

pub fn pool(symbol: &str, tvl_usd: f64, apy: Option<f64>) -> Pool {
    Pool {
        symbol: symbol.to_owned(),
        project: String::from("test-project"),
        chain: String::from("Ethereum"),
        tvl_usd,
        apy,
        apy_base: None,
        apy_mean_30d: apy,
    }
}

pub struct StaticSource(pub Vec<Pool>);

impl PoolSource for StaticSource {
    async fn fetch_pools(&self) -> Result<Vec<Pool>, Error> {
        Ok(self.0.clone())
    }
}

pub struct FailingSource;

impl PoolSource for FailingSource {
    async fn fetch_pools(&self) -> Result<Vec<Pool>, Error> {
        Err(Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

/// In-memory log sink for asserting on emitted `tracing` events.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Installs a thread-local subscriber writing into the returned sink.
    /// Events are captured until the guard is dropped.
    pub fn install() -> (CapturedLogs, DefaultGuard) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(logs.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);

        (logs, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

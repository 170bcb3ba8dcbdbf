use url::Url;

use crate::{cli::Cli, error::Error};

pub const DEFAULT_API_URL: &str = "https://yields.llama.fi/pools";
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub top_n: usize,
    pub timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: String::from(DEFAULT_API_URL),
            top_n: DEFAULT_TOP_N,
            timeout: None,
        }
    }
}

pub fn get_configuration(cli: &Cli) -> Result<Config, Error> {
    let api_url = Url::parse(&cli.url)?;

    if !matches!(api_url.scheme(), "http" | "https") {
        return Err(Error::ConfigurationError(format!(
            "unsupported url scheme: {}",
            api_url.scheme()
        )));
    }

    if cli.top_n == 0 {
        return Err(Error::ConfigurationError(String::from(
            "top-n must be greater than 0",
        )));
    }

    let config = Config {
        api_url: api_url.to_string(),
        top_n: cli.top_n,
        timeout: cli.timeout,
    };

    Ok(config)
}

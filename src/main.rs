use clap::Parser;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, warn, Level};

use yield_scout::{
    cli::Cli, configuration::get_configuration, error::Error, handler,
    provider::HTTP,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level({
            #[cfg(debug_assertions)]
            {
                Level::INFO
            }

            #[cfg(not(debug_assertions))]
            {
                Level::WARN
            }
        })
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = get_configuration(&cli)?;

    let http = HTTP::new(config.clone())?;
    let reader = BufReader::new(stdin());

    tokio::select! {
        result = handler::run(&http, &config, reader, stdout()) => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, exiting");
            // stdin is read on a blocking thread the runtime would wait on
            std::process::exit(0)
        }
    }
}

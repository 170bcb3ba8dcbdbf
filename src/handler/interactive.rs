use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info};

use crate::{
    configuration::Config,
    error::Error,
    handler::{table::render_table, top_pools::try_top_pools},
    provider::PoolSource,
};

const PROMPT: &str = "Enter token symbol (or 'quit' to exit): ";
const QUIT: &str = "quit";

/// Prompt loop: one query per line until `quit` or end of input.
pub async fn run<S, R, W>(
    source: &S,
    config: &Config,
    reader: R,
    mut writer: W,
) -> Result<(), Error>
where
    S: PoolSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    write(
        &mut writer,
        &format!(
            "DeFi yield explorer: top {} pools by TVL from {}\n",
            config.top_n, config.api_url
        ),
    )
    .await?;

    loop {
        write(&mut writer, PROMPT).await?;

        let Some(line) = lines.next_line().await? else {
            write(&mut writer, "\n").await?;
            break;
        };

        let token = line.trim();

        if token.is_empty() {
            continue;
        }

        if token.eq_ignore_ascii_case(QUIT) {
            break;
        }

        info!("Querying pools for {}", token);

        match try_top_pools(source, token, config.top_n).await {
            Ok(rows) if rows.is_empty() => {
                write(
                    &mut writer,
                    &format!("No pools found for '{}' with positive APY.\n", token),
                )
                .await?;
            },
            Ok(rows) => {
                write(
                    &mut writer,
                    &format!("\nTop {} pools for '{}' by TVL:\n", rows.len(), token),
                )
                .await?;
                write(&mut writer, &render_table(&rows)).await?;
            },
            Err(e) => {
                error!("Error fetching pool data: {}", e);
                write(
                    &mut writer,
                    "Could not fetch pool data right now. Please try again later.\n",
                )
                .await?;
            },
        }
    }

    write(&mut writer, "Goodbye!\n").await?;

    Ok(())
}

async fn write<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<(), Error> {
    writer.write_all(text.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

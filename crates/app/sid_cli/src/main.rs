// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use client::SidClient;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

mod cli;
mod client;
mod conversation;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let _logger = logging::init()?;

    let args = Cli::parse();
    let client = SidClient::new(&args.server);

    match &args.command {
        Commands::Send { message, offline } => {
            let reply = conversation::answer(&client, *offline, message).await?;
            log::info!("answered by {}", reply.source);
            println!("{}", reply.text);
        }
        Commands::Repl { offline } => repl(&client, *offline).await?,
        Commands::Health => {
            let health = client.health().await?;
            println!("{} {} {}", health.status, health.service, health.timestamp);
        }
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

async fn repl(client: &SidClient, offline: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"you> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let reply = conversation::answer(client, offline, line).await?;
        log::info!("answered by {}", reply.source);
        stdout
            .write_all(format!("sid> {}\n", reply.text).as_bytes())
            .await?;
    }

    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

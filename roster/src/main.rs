use std::{io, sync::Arc};

use anyhow::Error;

use clap::Parser as _;

use roster::{
    cli::Args,
    commands::{Command, Context, help},
    config::Config,
    dispatch::{self, Pending},
    http::Client,
    screen::UserList,
};

use tokio::io::{AsyncBufReadExt as _, BufReader};

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // load config
    let config = Arc::new(Config::load(args.config_path())?);

    tracing::info!("connecting to {}...", config.api.endpoint);

    // setup screen
    let client = Client::new(&config.api)?;
    let cx = Context::new(UserList::new(client, config.api.page_size), config);

    cx.load_initial().await;
    tracing::info!(count = cx.len(), "loaded users");
    dispatch::show(&cx);

    if args.once {
        return Ok(());
    }

    println!("{}", help());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = Pending::default();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}, try `help`", err);
                continue;
            }
        };

        if !pending.track(dispatch::command(&cx, command)) {
            break;
        }
    }

    // let gestures still in flight land before the runtime shuts down
    pending.finish().await;

    Ok(())
}

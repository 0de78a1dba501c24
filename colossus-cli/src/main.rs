use anyhow::Context;
use colossus_cli::{session, AppState, Console};
use colossus_store::{app_config::Config, FileRepository};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    // Logs go to stderr so they never land in the middle of the menu.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let repo = FileRepository::new(&config.storage.data_file);
    tracing::info!("Using data file {}", repo.path().display());
    let mut state = AppState::new(&repo);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    session::run(&mut state, &mut console)
}

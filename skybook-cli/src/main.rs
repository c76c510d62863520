use std::io;

use anyhow::Context;
use skybook_cli::{BookingSession, Console};
use skybook_store::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    // Menus own stdout; logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(
        credentials = %config.credentials.path.display(),
        "Starting booking session"
    );

    let mut session = BookingSession::from_config(&config);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    session.run(&mut console)?;

    Ok(())
}

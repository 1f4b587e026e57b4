use std::io;

use anyhow::Result;
use clap::Parser;
use users_app::{logging, Config, Session, UreqTransport};
use users_core::{UserManager, UsersClient};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init_logging(&config.log_level)?;
    tracing::info!(base_url = %config.base_url, "starting");

    let manager = UserManager::new(UsersClient::new(&config.base_url))
        .with_notification_ttl(config.notification_ttl());
    let mut session = Session::new(manager, UreqTransport::new(), io::stdin().lock(), io::stdout().lock());
    session.run()?;
    Ok(())
}

//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;

/// Users collection served by the bundled mock server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/users";

#[derive(Parser, Debug, Clone)]
#[command(name = "users", version, about = "Manage the users of a remote REST collection")]
pub struct Config {
    /// URL of the users collection (GET/POST on it, PUT/DELETE on `{url}/{id}`).
    #[arg(long, env = "USERS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seconds a notification stays on screen.
    #[arg(long, env = "USERS_NOTIFICATION_SECS", default_value_t = 3)]
    pub notification_secs: u64,

    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, env = "USERS_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }
}

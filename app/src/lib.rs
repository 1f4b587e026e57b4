//! Terminal front end for the user directory.
//!
//! # Overview
//! Renders the page a `UserManager` describes as plain text, reads one
//! command per line and executes requests with ureq. Configuration comes
//! from flags or the environment; logs go to stderr.

pub mod command;
pub mod config;
pub mod logging;
pub mod session;
pub mod transport;
pub mod view;

pub use command::{Command, CommandError};
pub use config::Config;
pub use session::Session;
pub use transport::UreqTransport;

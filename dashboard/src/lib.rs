//! Terminal front end for the user management dashboard.
//!
//! Executes the core's fetch with `ureq`, renders the dashboard as text and
//! runs a command session for local add/edit/delete.

pub mod config;
pub mod logging;
pub mod session;
pub mod transport;

pub use config::{Config, ConfigError};
pub use session::{Command, Session, SessionError};
pub use transport::{Transport, UreqTransport};
